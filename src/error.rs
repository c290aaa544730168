//! Error taxonomy of the company endpoints and its mapping to status codes.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{auth::AuthError, controller::ControllerError, decoder::DecodeError, response};

/// Message sent instead of the controller's own text on duplicate membership
pub const USER_ALREADY_IN_COMPANY: &str = "user is already a member of this company";

/// A path parameter that is not a well-formed identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("invalid company id")]
    CompanyId,
    #[error("invalid account id")]
    AccountId,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),
    #[error(transparent)]
    Unauthorized(#[from] AuthError),
    #[error("{0}")]
    NotFound(String),
    #[error("user is already a member of this company")]
    Conflict,
    #[error("{0}")]
    BadRequest(String),
    #[error("internal server error")]
    Internal(#[source] ControllerError),
}

impl ApiError {
    /// Controller failure reported to the client as a bad request
    pub fn bad_request(err: ControllerError) -> Self {
        ApiError::BadRequest(err.to_string())
    }

    /// Controller failure reported as an internal error
    pub fn internal(err: ControllerError) -> Self {
        ApiError::Internal(err)
    }

    /// Default classification for membership-mutating operations:
    /// not found is 404, already existing is 409, anything else is 500.
    pub fn from_default_check(err: ControllerError) -> Self {
        match err {
            ControllerError::NotFound => ApiError::NotFound(ControllerError::NotFound.to_string()),
            ControllerError::AlreadyExists => ApiError::Conflict,
            other => ApiError::Internal(other),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) | ApiError::InvalidIdentifier(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            tracing::error!("Company request failed: {:#}", cause);
        }

        response::respond(self.status_code(), self.to_string())
    }
}
