use async_trait::async_trait;
use axum_extra::headers::{authorization::Bearer, Authorization};
use axum_extra::TypedHeader;
use jsonwebtoken::{decode, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::cache::TokenCache;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // account id
    pub exp: usize,  // expiration time
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("token subject is not an account id")]
    InvalidSubject,
}

/// Account a token was issued to, with the token's expiry in seconds since
/// the Unix epoch when it carries one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub account_id: Uuid,
    pub expires_at: Option<i64>,
}

impl Identity {
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map_or(false, |exp| exp <= chrono::Utc::now().timestamp())
    }
}

/// Resolves the account a bearer token was issued to
#[async_trait]
pub trait IdentityResolver: Send + Sync + 'static {
    async fn resolve_identity(&self, token: &str) -> Result<Identity, AuthError>;

    async fn resolve_account_id(&self, token: &str) -> Result<Uuid, AuthError> {
        Ok(self.resolve_identity(token).await?.account_id)
    }
}

/// Bearer token from the `Authorization` header, if one was sent
pub fn bearer_token(auth: &Option<TypedHeader<Authorization<Bearer>>>) -> Option<&str> {
    auth.as_ref().map(|header| header.token())
}

/// Verifies HS256 tokens signed with a shared secret
pub struct JwtIdentityResolver {
    secret: Secret<String>,
    validation: Validation,
}

impl JwtIdentityResolver {
    pub fn new(secret: Secret<String>) -> Self {
        Self {
            secret,
            validation: Validation::default(),
        }
    }

    /// Clock skew tolerated when checking `exp`, in seconds
    pub fn with_leeway(mut self, leeway: u64) -> Self {
        self.validation.leeway = leeway;
        self
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        tracing::debug!("Verifying bearer token");

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &self.validation,
        )
        .map_err(|e| {
            tracing::warn!("Token verification error: {:?}", e);
            AuthError::InvalidToken(e)
        })?;

        Ok(token_data.claims)
    }
}

#[async_trait]
impl IdentityResolver for JwtIdentityResolver {
    async fn resolve_identity(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = self.verify_token(token)?;
        let account_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidSubject)?;

        tracing::debug!("Token verified successfully for account ID: {}", account_id);
        Ok(Identity {
            account_id,
            expires_at: Some(claims.exp as i64),
        })
    }
}

/// Keeps successful resolutions of an inner resolver in a [`TokenCache`].
///
/// Failures are never cached. A hit whose token has expired is dropped and
/// the token goes back to the inner resolver.
pub struct CachedIdentityResolver {
    inner: Arc<dyn IdentityResolver>,
    cache: TokenCache,
}

impl CachedIdentityResolver {
    pub fn new(inner: Arc<dyn IdentityResolver>, cache: TokenCache) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl IdentityResolver for CachedIdentityResolver {
    async fn resolve_identity(&self, token: &str) -> Result<Identity, AuthError> {
        if let Some(identity) = self.cache.get(token).await {
            if !identity.is_expired() {
                tracing::debug!(
                    "Token found in cache for account ID: {}",
                    identity.account_id
                );
                return Ok(identity);
            }

            tracing::debug!("Cached token has expired, verifying again");
            self.cache.invalidate(token).await;
        }

        let identity = self.inner.resolve_identity(token).await?;
        if !identity.is_expired() {
            self.cache.insert(token, identity).await;
        }
        Ok(identity)
    }
}
