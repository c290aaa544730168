use crate::handlers;
use crate::AppState;
use axum::{routing::get, Router};

pub fn health_router() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::check))
}
