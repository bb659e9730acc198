//! Error handling for the calculator API.
//!
//! Every typed failure from the arithmetic core maps to a `400 Bad Request`
//! with the core's human-readable message as a plain-text body, which is
//! the contract existing clients rely on.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use calc_core::CalcError;
use thiserror::Error;
use tracing::warn;

/// API-level error with automatic HTTP status code mapping.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Parsing or arithmetic failure from the core (400 Bad Request).
    #[error("{0}")]
    Calculation(#[from] CalcError),
}

impl ApiError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Calculation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code string for structured logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Calculation(err) => err.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(code = self.error_code(), status = %status, "request failed: {self}");
        (status, self.to_string()).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
