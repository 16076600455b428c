//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Body text sent for every server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors a handler can return.
///
/// Storage failures become a 500 with a generic body; the cause is logged
/// and never reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The note store could not be read or written.
    #[error(transparent)]
    Storage(#[from] crate::Error),
}

impl ApiError {
    /// Check if the request failed because the store file does not exist.
    #[must_use]
    pub fn is_store_missing(&self) -> bool {
        match self {
            Self::Storage(err) => err.is_store_missing(),
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(error = %self, status = status.as_u16(), "request failed");
        if self.is_store_missing() {
            warn!("note store is missing; run `jotter init` to create it");
        }
        (status, Json(json!({ "error": INTERNAL_ERROR_MESSAGE }))).into_response()
    }
}
