//! Unified error handling for the JSON API.
//!
//! Provides a unified `AppError` type mapping each failure class to a
//! status code and a `{"detail": ...}` body. All route handlers return
//! `Result<T, AppError>`.
//!
//! # Taxonomy
//!
//! - Client faults: malformed input (422), unknown product id (400),
//!   missing record (404). Never logged as system failures.
//! - System faults: storage errors (500). Logged at error level with the
//!   internal detail redacted from the response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::quote::QuoteError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Quote computation rejected the cart.
    #[error("{0}")]
    Quote(#[from] QuoteError),

    /// Malformed client input (bad email, bad quantity, empty cart).
    #[error("{0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found")]
    NotFound,
}

/// JSON error body, matching what the front end expects.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Database(_)) {
            tracing::error!(error = %self, "Request failed");
        }

        let status = match &self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Quote(QuoteError::UnknownProduct(_)) => StatusCode::BAD_REQUEST,
            Self::Quote(QuoteError::EmptyCart) | Self::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients
        let detail = match &self {
            Self::Database(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
