// src/models/company.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::account_company::AccountRole;

/// Company as returned by the controller after a create or update
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Company {
    /// Unique company ID
    pub company_id: Uuid,
    /// Company name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Authorization group granting member access
    pub authz_member: Option<String>,
    /// Authorization group granting admin access
    pub authz_admin: Option<String>,
    /// When the company was created
    pub created_at: DateTime<Utc>,
    /// When the company was last updated
    pub updated_at: DateTime<Utc>,
}

/// Company as seen by a specific caller
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct CompanyResponse {
    pub company_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub authz_member: Option<String>,
    pub authz_admin: Option<String>,
    /// Caller's role in the company, absent for anonymous lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AccountRole>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompanyResponse {
    pub fn from_company(company: Company, role: Option<AccountRole>) -> Self {
        Self {
            company_id: company.company_id,
            name: company.name,
            description: company.description,
            authz_member: company.authz_member,
            authz_admin: company.authz_admin,
            role,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

/// Body accepted when creating or updating a company
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate, ToSchema)]
pub struct CompanyPayload {
    /// Company name (1-255 characters)
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Optional description (max 1000 characters)
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub authz_member: Option<String>,
    #[validate(length(max = 255))]
    pub authz_admin: Option<String>,
}
