use axum::response::Response;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::response;

/// Liveness report for the account service
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceHealth {
    pub service: String,
    pub version: String,
}

impl ServiceHealth {
    fn current() -> Self {
        Self {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness probe, wrapped in the usual `{code, status, content}` envelope
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Account service is up", body = ServiceHealth)
    )
)]
pub async fn check() -> Response {
    response::status_ok(ServiceHealth::current())
}
