//! API error responses.
//!
//! 各ユースケースのエラーを HTTP ステータスと `{"error": "..."}` に変換する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    domain::ValueObjectError,
    infrastructure::dto::http::ErrorResponse,
    usecase::{GetGuestError, RegisterGuestError, UpdateGuestStatusError},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!("Request rejected with {}: {}", status, self);
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(error: ValueObjectError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<RegisterGuestError> for ApiError {
    fn from(error: RegisterGuestError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<GetGuestError> for ApiError {
    fn from(error: GetGuestError) -> Self {
        ApiError::NotFound(error.to_string())
    }
}

impl From<UpdateGuestStatusError> for ApiError {
    fn from(error: UpdateGuestStatusError) -> Self {
        match error {
            UpdateGuestStatusError::GuestNotFound(_) => ApiError::NotFound(error.to_string()),
            UpdateGuestStatusError::AlreadyDecided { .. } => ApiError::Conflict(error.to_string()),
        }
    }
}
