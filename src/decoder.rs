use serde::de::DeserializeOwned;
use validator::Validate;

use crate::models::{AccountCompanyRole, CompanyPayload, InviteUser};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Request body is empty")]
    Empty,
    #[error("Invalid request body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Turns raw request bodies into the entities the handlers work with
pub trait PayloadDecoder: Send + Sync + 'static {
    fn decode_company(&self, body: &[u8]) -> Result<CompanyPayload, DecodeError>;

    fn decode_account_company(&self, body: &[u8]) -> Result<AccountCompanyRole, DecodeError>;

    fn decode_invite_user(&self, body: &[u8]) -> Result<InviteUser, DecodeError>;
}

/// JSON decoder that applies the `validator` rules of each payload
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPayloadDecoder;

impl JsonPayloadDecoder {
    pub fn new() -> Self {
        Self
    }
}

fn decode_validated<T>(body: &[u8]) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Validate,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::Empty);
    }

    let value: T = serde_json::from_slice(body)?;
    value.validate()?;
    Ok(value)
}

impl PayloadDecoder for JsonPayloadDecoder {
    fn decode_company(&self, body: &[u8]) -> Result<CompanyPayload, DecodeError> {
        decode_validated(body)
    }

    fn decode_account_company(&self, body: &[u8]) -> Result<AccountCompanyRole, DecodeError> {
        decode_validated(body)
    }

    fn decode_invite_user(&self, body: &[u8]) -> Result<InviteUser, DecodeError> {
        decode_validated(body)
    }
}
