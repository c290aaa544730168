// src/models/account_company.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Admin,
    Member,
}

/// Membership grant linking an account to a company.
///
/// Ids present in the body are overwritten by the ones taken from the URL.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate, ToSchema)]
pub struct AccountCompanyRole {
    #[serde(default)]
    pub company_id: Uuid,
    #[serde(default)]
    pub account_id: Uuid,
    pub role: AccountRole,
}

impl AccountCompanyRole {
    pub fn with_company_and_account(mut self, company_id: Uuid, account_id: Uuid) -> Self {
        self.company_id = company_id;
        self.account_id = account_id;
        self
    }
}

/// Invitation of an account, by e-mail, into a company
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate, ToSchema)]
pub struct InviteUser {
    /// E-mail of the account to invite
    #[validate(email)]
    pub email: String,
    pub role: AccountRole,
    #[serde(default)]
    pub company_id: Uuid,
}

impl InviteUser {
    pub fn with_company(mut self, company_id: Uuid) -> Self {
        self.company_id = company_id;
        self
    }
}

/// Removal of an account from a company, built from path parameters only
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RemoveUser {
    pub account_id: Uuid,
    pub company_id: Uuid,
}

impl RemoveUser {
    pub fn new(account_id: Uuid, company_id: Uuid) -> Self {
        Self {
            account_id,
            company_id,
        }
    }
}

/// Account listed as a member of a company
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct CompanyAccount {
    pub account_id: Uuid,
    pub email: String,
    pub username: String,
    pub role: AccountRole,
}
