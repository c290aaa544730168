use crate::handlers::companies;
use crate::AppState;
use axum::{
    routing::{patch, post},
    Router,
};

pub fn company_router() -> Router<AppState> {
    Router::new()
        // Company management
        .route(
            "/api/companies",
            post(companies::create_company).get(companies::list_companies),
        )
        .route(
            "/api/companies/:company_id",
            patch(companies::update_company)
                .get(companies::get_company)
                .delete(companies::delete_company),
        )
        // Member management
        .route(
            "/api/companies/:company_id/roles",
            post(companies::invite_user).get(companies::get_company_accounts),
        )
        .route(
            "/api/companies/:company_id/roles/:account_id",
            patch(companies::update_account_company).delete(companies::remove_user),
        )
}
