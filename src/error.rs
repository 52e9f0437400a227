use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures a single shorten or redirect request can end in.
///
/// None of these outlive the request: each is rendered as a short plain-text
/// response by the `IntoResponse` impl below.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body could not be decoded as `{"destination": "..."}`.
    #[error("malformed request body: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    /// The destination failed validation.
    #[error("invalid destination URL: {0:?}")]
    InvalidUrl(String),

    /// No mapping exists for the requested short key.
    #[error("short key not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedRequest(_) | AppError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Plain-text body shown to the caller. Never includes request details.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MalformedRequest(_) => "Invalid request format",
            AppError::InvalidUrl(_) => "Not a valid URL",
            AppError::NotFound(_) => "404 page not found",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request rejected");
        (self.status(), self.public_message()).into_response()
    }
}
