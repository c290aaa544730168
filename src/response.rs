// Response envelope shared by every company endpoint
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// `{"code": 200, "status": "OK", "content": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct HttpResponse<T> {
    pub code: u16,
    pub status: String,
    pub content: T,
}

impl<T: Serialize> HttpResponse<T> {
    pub fn new(status: StatusCode, content: T) -> Self {
        Self {
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or_default().to_string(),
            content,
        }
    }
}

pub fn respond<T: Serialize>(status: StatusCode, content: T) -> Response {
    (status, Json(HttpResponse::new(status, content))).into_response()
}

pub fn status_ok<T: Serialize>(content: T) -> Response {
    respond(StatusCode::OK, content)
}

pub fn status_created<T: Serialize>(content: T) -> Response {
    respond(StatusCode::CREATED, content)
}

pub fn status_no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}
