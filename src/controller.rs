use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    AccountCompanyRole, Company, CompanyAccount, CompanyPayload, CompanyResponse, InviteUser,
    RemoveUser,
};

/// Failure reported by a [`CompanyController`].
///
/// The variant is the classification used when mapping to a status code,
/// so implementations must report missing records and duplicate
/// memberships through `NotFound` and `AlreadyExists`.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("Record not found")]
    NotFound,
    #[error("Record already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ControllerError {
    pub fn other(message: impl std::fmt::Display) -> Self {
        ControllerError::Other(anyhow::anyhow!("{}", message))
    }
}

/// Business operations behind the company endpoints
#[async_trait]
pub trait CompanyController: Send + Sync + 'static {
    /// Create a company owned by `account_id`
    async fn create(
        &self,
        account_id: Uuid,
        company: CompanyPayload,
    ) -> Result<Company, ControllerError>;

    async fn update(
        &self,
        company_id: Uuid,
        company: CompanyPayload,
    ) -> Result<Company, ControllerError>;

    /// Fetch a company; `account_id` is `None` for anonymous callers
    async fn get(
        &self,
        company_id: Uuid,
        account_id: Option<Uuid>,
    ) -> Result<CompanyResponse, ControllerError>;

    /// List the companies `account_id` belongs to
    async fn list(&self, account_id: Uuid) -> Result<Vec<CompanyResponse>, ControllerError>;

    async fn delete(&self, company_id: Uuid) -> Result<(), ControllerError>;

    /// Change the role of an existing member
    async fn update_account_company(
        &self,
        account_company: AccountCompanyRole,
    ) -> Result<(), ControllerError>;

    async fn invite_user(&self, invite: InviteUser) -> Result<(), ControllerError>;

    async fn get_accounts(&self, company_id: Uuid)
        -> Result<Vec<CompanyAccount>, ControllerError>;

    async fn remove_user(&self, remove: RemoveUser) -> Result<(), ControllerError>;
}
