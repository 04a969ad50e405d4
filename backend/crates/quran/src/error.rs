//! Quran Service Error Types
//!
//! This module provides service-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Quran-specific result type alias
pub type QuranResult<T> = Result<T, QuranError>;

/// Quran-specific error variants
///
/// User errors (4xx) surface their message verbatim; infrastructure
/// errors (5xx) are logged and return a generic message only.
#[derive(Debug, Error)]
pub enum QuranError {
    /// Unrecognized combination of juz/hizb/quarter parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Parameter value is not an integer
    #[error("Parameter '{name}' must be an integer")]
    NonNumericParameter { name: &'static str },

    /// Parameter value is outside its valid range
    #[error("Parameter '{name}' must be between {min} and {max}")]
    OutOfRange { name: &'static str, min: u8, max: u8 },

    /// Hizb does not belong to the given juz under the canonical mapping
    #[error("Hizb {hizb} does not belong to juz {juz}")]
    JuzHizbMismatch { juz: u8, hizb: u8 },

    /// The requested juz/hizb/quarter holds no ayahs
    #[error("No ayahs found for the requested location")]
    LocationEmpty,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuranError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuranError::InvalidParameters(_) | QuranError::NonNumericParameter { .. } => {
                StatusCode::BAD_REQUEST
            }
            QuranError::OutOfRange { .. } | QuranError::JuzHizbMismatch { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            QuranError::LocationEmpty => StatusCode::NOT_FOUND,
            QuranError::Database(_) | QuranError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuranError::InvalidParameters(_) | QuranError::NonNumericParameter { .. } => {
                ErrorKind::BadRequest
            }
            QuranError::OutOfRange { .. } | QuranError::JuzHizbMismatch { .. } => {
                ErrorKind::UnprocessableEntity
            }
            QuranError::LocationEmpty => ErrorKind::NotFound,
            QuranError::Database(_) | QuranError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QuranError::Database(e) => {
                tracing::error!(error = %e, "Quran store error");
            }
            QuranError::Internal(msg) => {
                tracing::error!(message = %msg, "Quran internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Quran request rejected");
            }
        }
    }
}

impl From<QuranError> for AppError {
    fn from(err: QuranError) -> Self {
        let kind = err.kind();
        // Do not leak store details to the client
        let message = if kind.is_server_error() {
            "Internal server error".to_string()
        } else {
            err.to_string()
        };
        AppError::new(kind, message)
    }
}

impl IntoResponse for QuranError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
