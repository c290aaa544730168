use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers::{companies, health};
use crate::models::{
    AccountCompanyRole, AccountRole, Company, CompanyAccount, CompanyPayload, CompanyResponse,
    InviteUser,
};

/// Generate the OpenAPI documentation for the entire API
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        health::check,

        // Company endpoints
        companies::create_company,
        companies::update_company,
        companies::get_company,
        companies::list_companies,
        companies::delete_company,

        // Membership endpoints
        companies::update_account_company,
        companies::invite_user,
        companies::get_company_accounts,
        companies::remove_user,
    ),
    components(
        schemas(
            health::ServiceHealth,
            Company,
            CompanyPayload,
            CompanyResponse,
            AccountRole,
            AccountCompanyRole,
            InviteUser,
            CompanyAccount,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "companies", description = "Company and membership management"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
