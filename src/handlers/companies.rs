// src/handlers/companies.rs
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::headers::{authorization::Bearer, Authorization};
use axum_extra::TypedHeader;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    auth::{bearer_token, AuthError, IdentityResolver},
    controller::CompanyController,
    decoder::PayloadDecoder,
    error::ApiError,
    handlers::params::{parse_account_id, parse_company_id},
    models::{AccountCompanyRole, InviteUser, RemoveUser},
    response, AppState,
};

/// Translates company requests into controller calls and controller
/// results into responses.
pub struct CompanyRequestHandler {
    controller: Arc<dyn CompanyController>,
    identity: Arc<dyn IdentityResolver>,
    decoder: Arc<dyn PayloadDecoder>,
}

impl CompanyRequestHandler {
    pub fn new(
        controller: Arc<dyn CompanyController>,
        identity: Arc<dyn IdentityResolver>,
        decoder: Arc<dyn PayloadDecoder>,
    ) -> Self {
        Self {
            controller,
            identity,
            decoder,
        }
    }

    pub async fn create(&self, token: Option<&str>, body: &[u8]) -> Response {
        finish("create", self.try_create(token, body).await)
    }

    async fn try_create(&self, token: Option<&str>, body: &[u8]) -> Result<Response, ApiError> {
        let company = self.decoder.decode_company(body)?;
        let account_id = self.require_account_id(token).await?;

        let created = self
            .controller
            .create(account_id, company)
            .await
            .map_err(ApiError::internal)?;

        Ok(response::status_created(created))
    }

    pub async fn update(&self, company_id: &str, body: &[u8]) -> Response {
        finish("update", self.try_update(company_id, body).await)
    }

    async fn try_update(&self, company_id: &str, body: &[u8]) -> Result<Response, ApiError> {
        let company = self.decoder.decode_company(body)?;
        let company_id = parse_company_id(company_id)?;

        let updated = self
            .controller
            .update(company_id, company)
            .await
            .map_err(ApiError::bad_request)?;

        Ok(response::status_ok(updated))
    }

    /// Anonymous callers are allowed: a missing or invalid token is not an error here.
    pub async fn get(&self, token: Option<&str>, company_id: &str) -> Response {
        finish("get", self.try_get(token, company_id).await)
    }

    async fn try_get(&self, token: Option<&str>, company_id: &str) -> Result<Response, ApiError> {
        let company_id = parse_company_id(company_id)?;
        let account_id = self.optional_account_id(token).await;

        let company = self
            .controller
            .get(company_id, account_id)
            .await
            .map_err(ApiError::bad_request)?;

        Ok(response::status_ok(company))
    }

    pub async fn list(&self, token: Option<&str>) -> Response {
        finish("list", self.try_list(token).await)
    }

    async fn try_list(&self, token: Option<&str>) -> Result<Response, ApiError> {
        let account_id = self.require_account_id(token).await?;

        let companies = self
            .controller
            .list(account_id)
            .await
            .map_err(ApiError::bad_request)?;

        Ok(response::status_ok(companies))
    }

    pub async fn delete(&self, company_id: &str) -> Response {
        finish("delete", self.try_delete(company_id).await)
    }

    async fn try_delete(&self, company_id: &str) -> Result<Response, ApiError> {
        let company_id = parse_company_id(company_id)?;

        self.controller
            .delete(company_id)
            .await
            .map_err(ApiError::internal)?;

        Ok(response::status_no_content())
    }

    pub async fn update_account_company(
        &self,
        company_id: &str,
        account_id: &str,
        body: &[u8],
    ) -> Response {
        finish(
            "update_account_company",
            self.try_update_account_company(company_id, account_id, body)
                .await,
        )
    }

    async fn try_update_account_company(
        &self,
        company_id: &str,
        account_id: &str,
        body: &[u8],
    ) -> Result<Response, ApiError> {
        let account_company = self.account_company_from_request(company_id, account_id, body)?;

        self.controller
            .update_account_company(account_company)
            .await
            .map_err(ApiError::bad_request)?;

        Ok(response::status_ok("role updated"))
    }

    fn account_company_from_request(
        &self,
        company_id: &str,
        account_id: &str,
        body: &[u8],
    ) -> Result<AccountCompanyRole, ApiError> {
        let account_company = self.decoder.decode_account_company(body)?;
        let company_id = parse_company_id(company_id)?;
        let account_id = parse_account_id(account_id)?;

        Ok(account_company.with_company_and_account(company_id, account_id))
    }

    pub async fn invite_user(&self, company_id: &str, body: &[u8]) -> Response {
        finish("invite_user", self.try_invite_user(company_id, body).await)
    }

    async fn try_invite_user(&self, company_id: &str, body: &[u8]) -> Result<Response, ApiError> {
        let invite = self.invite_user_from_request(company_id, body)?;

        self.controller
            .invite_user(invite)
            .await
            .map_err(ApiError::from_default_check)?;

        Ok(response::status_no_content())
    }

    fn invite_user_from_request(&self, company_id: &str, body: &[u8]) -> Result<InviteUser, ApiError> {
        let invite = self.decoder.decode_invite_user(body)?;
        let company_id = parse_company_id(company_id)?;

        Ok(invite.with_company(company_id))
    }

    pub async fn get_accounts(&self, company_id: &str) -> Response {
        finish("get_accounts", self.try_get_accounts(company_id).await)
    }

    async fn try_get_accounts(&self, company_id: &str) -> Result<Response, ApiError> {
        let company_id = parse_company_id(company_id)?;

        let accounts = self
            .controller
            .get_accounts(company_id)
            .await
            .map_err(ApiError::internal)?;

        Ok(response::status_ok(accounts))
    }

    /// The removal is built from the path alone; no body is read.
    pub async fn remove_user(&self, company_id: &str, account_id: &str) -> Response {
        finish("remove_user", self.try_remove_user(company_id, account_id).await)
    }

    async fn try_remove_user(&self, company_id: &str, account_id: &str) -> Result<Response, ApiError> {
        let account_id = parse_account_id(account_id)?;
        let company_id = parse_company_id(company_id)?;

        self.controller
            .remove_user(RemoveUser::new(account_id, company_id))
            .await
            .map_err(ApiError::from_default_check)?;

        Ok(response::status_no_content())
    }

    async fn require_account_id(&self, token: Option<&str>) -> Result<Uuid, ApiError> {
        let token = token.ok_or(AuthError::MissingToken)?;

        self.identity.resolve_account_id(token).await.map_err(|e| {
            tracing::warn!("Rejected bearer token: {}", e);
            ApiError::from(e)
        })
    }

    async fn optional_account_id(&self, token: Option<&str>) -> Option<Uuid> {
        match token {
            Some(token) => self.identity.resolve_account_id(token).await.ok(),
            None => None,
        }
    }
}

fn finish(operation: &'static str, result: Result<Response, ApiError>) -> Response {
    let response = result.unwrap_or_else(IntoResponse::into_response);

    metrics::counter!(
        "company_requests_total",
        "operation" => operation,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);

    response
}

type BearerHeader = Option<TypedHeader<Authorization<Bearer>>>;

/// Create a new company owned by the caller
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = "companies",
    request_body = crate::models::CompanyPayload,
    responses(
        (status = 201, description = "Company created successfully"),
        (status = 400, description = "Invalid request body"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_company(
    State(state): State<AppState>,
    auth: BearerHeader,
    body: Bytes,
) -> Response {
    state.companies.create(bearer_token(&auth), &body).await
}

/// Update a company
#[utoipa::path(
    patch,
    path = "/api/companies/{company_id}",
    tag = "companies",
    request_body = crate::models::CompanyPayload,
    params(("company_id" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company updated successfully"),
        (status = 400, description = "Invalid request body, company ID or update")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    body: Bytes,
) -> Response {
    state.companies.update(&company_id, &body).await
}

/// Get company details
#[utoipa::path(
    get,
    path = "/api/companies/{company_id}",
    tag = "companies",
    params(("company_id" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company details retrieved successfully"),
        (status = 400, description = "Invalid company ID or lookup failed")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_company(
    State(state): State<AppState>,
    auth: BearerHeader,
    Path(company_id): Path<String>,
) -> Response {
    state.companies.get(bearer_token(&auth), &company_id).await
}

/// List the caller's companies
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "companies",
    responses(
        (status = 200, description = "Companies retrieved successfully"),
        (status = 400, description = "Listing failed"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_companies(State(state): State<AppState>, auth: BearerHeader) -> Response {
    state.companies.list(bearer_token(&auth)).await
}

/// Delete a company
#[utoipa::path(
    delete,
    path = "/api/companies/{company_id}",
    tag = "companies",
    params(("company_id" = String, Path, description = "Company ID")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 400, description = "Invalid company ID"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Response {
    state.companies.delete(&company_id).await
}

/// Change the role of a company member
#[utoipa::path(
    patch,
    path = "/api/companies/{company_id}/roles/{account_id}",
    tag = "companies",
    request_body = AccountCompanyRole,
    params(
        ("company_id" = String, Path, description = "Company ID"),
        ("account_id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Role updated"),
        (status = 400, description = "Invalid request body, IDs or role change")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_account_company(
    State(state): State<AppState>,
    Path((company_id, account_id)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    state
        .companies
        .update_account_company(&company_id, &account_id, &body)
        .await
}

/// Invite an account into a company
#[utoipa::path(
    post,
    path = "/api/companies/{company_id}/roles",
    tag = "companies",
    request_body = InviteUser,
    params(("company_id" = String, Path, description = "Company ID")),
    responses(
        (status = 204, description = "Invitation sent"),
        (status = 400, description = "Invalid request body or company ID"),
        (status = 404, description = "Company or account not found"),
        (status = 409, description = "User is already a member of this company"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn invite_user(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    body: Bytes,
) -> Response {
    state.companies.invite_user(&company_id, &body).await
}

/// List the accounts of a company
#[utoipa::path(
    get,
    path = "/api/companies/{company_id}/roles",
    tag = "companies",
    params(("company_id" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company accounts retrieved successfully"),
        (status = 400, description = "Invalid company ID"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_company_accounts(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Response {
    state.companies.get_accounts(&company_id).await
}

/// Remove an account from a company
#[utoipa::path(
    delete,
    path = "/api/companies/{company_id}/roles/{account_id}",
    tag = "companies",
    params(
        ("company_id" = String, Path, description = "Company ID"),
        ("account_id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 204, description = "Account removed"),
        (status = 400, description = "Invalid company or account ID"),
        (status = 404, description = "Membership not found"),
        (status = 409, description = "Conflicting membership"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_user(
    State(state): State<AppState>,
    Path((company_id, account_id)): Path<(String, String)>,
) -> Response {
    state.companies.remove_user(&company_id, &account_id).await
}
