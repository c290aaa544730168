#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

use account_service::auth::{AuthError, Identity, IdentityResolver};
use account_service::controller::{CompanyController, ControllerError};
use account_service::decoder::JsonPayloadDecoder;
use account_service::handlers::companies::CompanyRequestHandler;
use account_service::models::{
    AccountCompanyRole, AccountRole, Company, CompanyAccount, CompanyPayload, CompanyResponse,
    InviteUser, RemoveUser,
};
use account_service::{create_app, AppState};

pub const VALID_TOKEN: &str = "valid-token";

/// Every controller invocation, with the arguments it received
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create {
        account_id: Uuid,
        company: CompanyPayload,
    },
    Update {
        company_id: Uuid,
        company: CompanyPayload,
    },
    Get {
        company_id: Uuid,
        account_id: Option<Uuid>,
    },
    List {
        account_id: Uuid,
    },
    Delete {
        company_id: Uuid,
    },
    UpdateAccountCompany(AccountCompanyRole),
    InviteUser(InviteUser),
    GetAccounts {
        company_id: Uuid,
    },
    RemoveUser(RemoveUser),
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    NotFound,
    AlreadyExists,
    Other,
}

#[derive(Default, Clone)]
pub struct MockCompanyController {
    calls: Arc<Mutex<Vec<Call>>>,
    failure: Arc<Mutex<Option<Failure>>>,
}

impl MockCompanyController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failure: Failure) -> Self {
        let controller = Self::new();
        *controller.failure.lock().unwrap() = Some(failure);
        controller
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), ControllerError> {
        self.calls.lock().unwrap().push(call);

        match *self.failure.lock().unwrap() {
            None => Ok(()),
            Some(Failure::NotFound) => Err(ControllerError::NotFound),
            Some(Failure::AlreadyExists) => Err(ControllerError::AlreadyExists),
            Some(Failure::Other) => Err(ControllerError::other(
                "pq: duplicate key value violates unique constraint",
            )),
        }
    }
}

pub fn company(company_id: Uuid, payload: &CompanyPayload) -> Company {
    let now = Utc::now();
    Company {
        company_id,
        name: payload.name.clone(),
        description: payload.description.clone(),
        authz_member: payload.authz_member.clone(),
        authz_admin: payload.authz_admin.clone(),
        created_at: now,
        updated_at: now,
    }
}

fn sample_payload() -> CompanyPayload {
    CompanyPayload {
        name: "acme".to_string(),
        description: None,
        authz_member: None,
        authz_admin: None,
    }
}

#[async_trait]
impl CompanyController for MockCompanyController {
    async fn create(
        &self,
        account_id: Uuid,
        company_payload: CompanyPayload,
    ) -> Result<Company, ControllerError> {
        self.record(Call::Create {
            account_id,
            company: company_payload.clone(),
        })?;
        Ok(company(Uuid::new_v4(), &company_payload))
    }

    async fn update(
        &self,
        company_id: Uuid,
        company_payload: CompanyPayload,
    ) -> Result<Company, ControllerError> {
        self.record(Call::Update {
            company_id,
            company: company_payload.clone(),
        })?;
        Ok(company(company_id, &company_payload))
    }

    async fn get(
        &self,
        company_id: Uuid,
        account_id: Option<Uuid>,
    ) -> Result<CompanyResponse, ControllerError> {
        self.record(Call::Get {
            company_id,
            account_id,
        })?;
        let role = account_id.map(|_| AccountRole::Member);
        Ok(CompanyResponse::from_company(
            company(company_id, &sample_payload()),
            role,
        ))
    }

    async fn list(&self, account_id: Uuid) -> Result<Vec<CompanyResponse>, ControllerError> {
        self.record(Call::List { account_id })?;
        Ok(vec![CompanyResponse::from_company(
            company(Uuid::new_v4(), &sample_payload()),
            Some(AccountRole::Admin),
        )])
    }

    async fn delete(&self, company_id: Uuid) -> Result<(), ControllerError> {
        self.record(Call::Delete { company_id })
    }

    async fn update_account_company(
        &self,
        account_company: AccountCompanyRole,
    ) -> Result<(), ControllerError> {
        self.record(Call::UpdateAccountCompany(account_company))
    }

    async fn invite_user(&self, invite: InviteUser) -> Result<(), ControllerError> {
        self.record(Call::InviteUser(invite))
    }

    async fn get_accounts(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<CompanyAccount>, ControllerError> {
        self.record(Call::GetAccounts { company_id })?;
        Ok(vec![CompanyAccount {
            account_id: Uuid::new_v4(),
            email: "dev@example.com".to_string(),
            username: "dev".to_string(),
            role: AccountRole::Admin,
        }])
    }

    async fn remove_user(&self, remove: RemoveUser) -> Result<(), ControllerError> {
        self.record(Call::RemoveUser(remove))
    }
}

/// Accepts only [`VALID_TOKEN`]
pub struct StaticIdentityResolver {
    pub account_id: Uuid,
}

#[async_trait]
impl IdentityResolver for StaticIdentityResolver {
    async fn resolve_identity(&self, token: &str) -> Result<Identity, AuthError> {
        if token == VALID_TOKEN {
            Ok(Identity {
                account_id: self.account_id,
                expires_at: None,
            })
        } else {
            Err(AuthError::InvalidSubject)
        }
    }
}

pub fn test_app(controller: &MockCompanyController, account_id: Uuid) -> Router {
    let handler = CompanyRequestHandler::new(
        Arc::new(controller.clone()),
        Arc::new(StaticIdentityResolver { account_id }),
        Arc::new(JsonPayloadDecoder::new()),
    );

    create_app(AppState {
        companies: Arc::new(handler),
    })
}

/// Send one request and return the status with the decoded JSON body, if any
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: &str,
) -> (StatusCode, Option<Value>) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    if !body.is_empty() {
        request = request.header(header::CONTENT_TYPE, "application/json");
    }

    let response = app
        .oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).unwrap())
    };

    (status, json)
}
