use crate::AppState;
use axum::Router;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(super::health::health_router())
        .merge(super::companies::company_router())
}
