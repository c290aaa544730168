use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub mod cache;
pub mod config;
pub mod controller;
pub mod decoder;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod server;

use handlers::companies::CompanyRequestHandler;

#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<CompanyRequestHandler>,
}

/// Create the main Axum application router
pub fn create_app(state: AppState) -> Router {
    // Register API documentation
    let openapi = openapi::ApiDoc::openapi();

    Router::new()
        .merge(routes::api::api_router())
        // Serve Swagger UI
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}
