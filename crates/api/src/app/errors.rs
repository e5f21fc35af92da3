use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use categorydesk_core::{DomainError, ValidationErrors};

/// Handler error: a `DomainError` plus the message shown to clients if it
/// turns out to be internal.
#[derive(Debug)]
pub struct ApiError {
    error: DomainError,
    failure: &'static str,
}

impl ApiError {
    pub fn new(error: DomainError, failure: &'static str) -> Self {
        Self { error, failure }
    }

    pub fn domain(&self) -> &DomainError {
        &self.error
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::new(error, "Internal server error")
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        DomainError::validation("body", rejection.body_text()).into()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        DomainError::validation("query", rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        domain_error_to_response(self.error, self.failure)
    }
}

/// Attach the client-facing failure message to a store result.
pub trait ResultExt<T> {
    fn or_fail(self, failure: &'static str) -> Result<T, ApiError>;
}

impl<T> ResultExt<T> for Result<T, DomainError> {
    fn or_fail(self, failure: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(e, failure))
    }
}

pub fn domain_error_to_response(err: DomainError, failure: &'static str) -> Response {
    match err {
        DomainError::Validation(errors) => validation_error(errors),
        e @ DomainError::NotFound { .. } => json_error(StatusCode::NOT_FOUND, e.to_string()),
        DomainError::Internal(msg) => {
            tracing::error!(error = %msg, "{failure}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, failure)
        }
    }
}

pub fn validation_error(errors: ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "message": "Invalid input",
            "errors": errors,
        })),
    )
        .into_response()
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "message": message.into() }))).into_response()
}
