// Path parameter parsing for the company routes
use uuid::Uuid;

use crate::error::IdentifierError;

pub fn parse_company_id(raw: &str) -> Result<Uuid, IdentifierError> {
    Uuid::parse_str(raw.trim()).map_err(|_| IdentifierError::CompanyId)
}

pub fn parse_account_id(raw: &str) -> Result<Uuid, IdentifierError> {
    Uuid::parse_str(raw.trim()).map_err(|_| IdentifierError::AccountId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        let id = Uuid::new_v4();
        assert_eq!(parse_company_id(&id.to_string()), Ok(id));
        assert_eq!(parse_account_id(&id.simple().to_string()), Ok(id));
    }

    #[test]
    fn test_parse_ids_report_which_parameter_failed() {
        assert_eq!(parse_company_id(""), Err(IdentifierError::CompanyId));
        assert_eq!(parse_company_id("123"), Err(IdentifierError::CompanyId));
        assert_eq!(parse_account_id("not-a-uuid"), Err(IdentifierError::AccountId));
    }
}
