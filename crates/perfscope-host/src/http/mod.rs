//! JSON surface over the registry.
//!
//! Each handler forwards to exactly one registry operation; nothing here
//! keeps state of its own.

pub mod timers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use perfscope_core::error::{ErrorCode, ProfilerError};

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

/// Error response: `{"code": "...", "message": "..."}` with a status derived
/// from the error code.
#[derive(Debug)]
pub struct ApiError(pub ProfilerError);

impl From<ProfilerError> for ApiError {
    fn from(e: ProfilerError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.code();
        let status = match code {
            ErrorCode::UnknownLabel => StatusCode::NOT_FOUND,
            ErrorCode::BadRequest | ErrorCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            code: code.as_str(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
