//! Shared error type across perfscope crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Stop requested for a label with no pending start.
    UnknownLabel,
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnknownLabel => "UNKNOWN_LABEL",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ProfilerError>;

/// Unified error type used by core and host.
#[derive(Debug, Error)]
pub enum ProfilerError {
    #[error("no pending timer for label: {0}")]
    UnknownLabel(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl ProfilerError {
    /// Map internal error to a stable client-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProfilerError::UnknownLabel(_) => ErrorCode::UnknownLabel,
            ProfilerError::BadRequest(_) => ErrorCode::BadRequest,
            ProfilerError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            ProfilerError::Internal(_) => ErrorCode::Internal,
        }
    }
}
