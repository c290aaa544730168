use anyhow::{Context, Result};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use validator::Validate;

use crate::cache::CacheConfig;

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct Settings {
    #[validate]
    pub server: ServerSettings,
    #[validate]
    pub auth: AuthSettings,
    #[validate]
    pub token_cache: TokenCacheSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[validate(range(min = 1024, max = 65535))]
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AuthSettings {
    // Checked in `Settings::validate_all`; `Secret<String>` is not `Serialize`
    pub jwt_secret: Secret<String>,
    #[validate(range(max = 300))]
    #[serde(default = "default_jwt_leeway_seconds")]
    pub jwt_leeway_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct TokenCacheSettings {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    #[validate(range(min = 1))]
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: u64,
    #[validate(range(min = 1, max = 86400))]
    #[serde(default = "default_cache_ttl_seconds")]
    pub ttl_seconds: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8006
}

fn default_jwt_leeway_seconds() -> u64 {
    60
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_max_entries() -> u64 {
    10_000
}

fn default_cache_ttl_seconds() -> u64 {
    300
}

impl Settings {
    /// Load settings from the environment (`SERVER_*`, `AUTH_*`, `TOKEN_CACHE_*`)
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Settings {
            server: envy::prefixed("SERVER_")
                .from_env::<ServerSettings>()
                .context("Failed to read SERVER_* settings")?,
            auth: envy::prefixed("AUTH_")
                .from_env::<AuthSettings>()
                .context("Failed to read AUTH_* settings")?,
            token_cache: envy::prefixed("TOKEN_CACHE_")
                .from_env::<TokenCacheSettings>()
                .context("Failed to read TOKEN_CACHE_* settings")?,
        };

        settings
            .validate_all()
            .context("Configuration validation failed")?;

        Ok(settings)
    }

    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()?;
        self.server.validate()?;
        self.auth.validate()?;
        self.token_cache.validate()?;

        if let Err(e) = validate_secret(&self.auth.jwt_secret) {
            let mut errors = validator::ValidationErrors::new();
            errors.add("jwt_secret", e);
            return Err(errors);
        }

        Ok(())
    }
}

fn validate_secret(secret: &Secret<String>) -> Result<(), validator::ValidationError> {
    if secret.expose_secret().len() < 16 {
        return Err(validator::ValidationError::new("jwt_secret_too_short"));
    }
    Ok(())
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.address()
            .parse()
            .with_context(|| format!("Invalid listen address: {}", self.address()))
    }
}

impl TokenCacheSettings {
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            max_entries: self.max_entries,
            ttl: Duration::from_secs(self.ttl_seconds),
        }
    }
}
