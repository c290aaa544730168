// Identity cache for resolved bearer tokens

use moka::future::Cache;
use sha2::{Digest, Sha256};
use std::time::Duration;

use crate::auth::Identity;

/// Cache configuration
#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub max_entries: u64,
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            ttl: Duration::from_secs(300), // 5 minutes
        }
    }
}

/// Identities keyed by the digest of the token they were resolved from.
///
/// Entries are dropped after the configured TTL; token expiry is checked by
/// the caller on every hit.
#[derive(Clone)]
pub struct TokenCache {
    entries: Cache<String, Identity>,
}

impl TokenCache {
    pub fn new(config: &CacheConfig) -> Self {
        let entries = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .build();

        Self { entries }
    }

    pub async fn get(&self, token: &str) -> Option<Identity> {
        self.entries.get(&hash_token(token)).await
    }

    pub async fn insert(&self, token: &str, identity: Identity) {
        self.entries.insert(hash_token(token), identity).await;
    }

    pub async fn invalidate(&self, token: &str) {
        self.entries.invalidate(&hash_token(token)).await;
    }
}

/// Hash a token using SHA-256
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
