//! Error types for the step API.
//!
//! [`ApiError`] converts into an Axum response carrying a small JSON body
//! so clients get the reason as well as the status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors a request to the step API can produce.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The body was not a square JSON matrix of booleans.
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] serde_json::Error),

    /// The grid is larger than this server is willing to step.
    #[error("grid is {size}x{size}, limit is {max}x{max}")]
    TooLarge {
        /// Dimension of the submitted grid.
        size: usize,
        /// Configured maximum dimension.
        max: usize,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidGrid(_) => StatusCode::BAD_REQUEST,
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
