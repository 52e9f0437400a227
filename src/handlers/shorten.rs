use crate::{error::AppError, shortener, AppState};
use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub destination: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

/// PUT /shortURL
///
/// The body is decoded by hand rather than through `Json<T>` so that a
/// missing or wrong `Content-Type` and every decoding failure all end in the
/// same 400 response.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let request: ShortenRequest = serde_json::from_slice(&body)?;

    let short_url = shortener::shorten(&state.store, &state.config, request.destination)?;

    Ok(Json(ShortenResponse { short_url }))
}
