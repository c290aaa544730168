pub mod account_company;
pub mod company;

pub use account_company::{AccountCompanyRole, AccountRole, CompanyAccount, InviteUser, RemoveUser};
pub use company::{Company, CompanyPayload, CompanyResponse};
