use crate::{error::AppError, shortener, AppState};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// GET /:short_key
///
/// 1. Resolve the key against the in-memory store.
/// 2. Answer 301 with the stored destination in `Location`, or 404.
///
/// axum's `Redirect::permanent` emits 308, so the 301 is built by hand.
/// A key that does not decode to UTF-8 can never have been stored, so it is
/// answered like any other unknown key.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let short_key = match path {
        Ok(Path(key)) => key,
        Err(rejection) => {
            tracing::debug!("Undecodable short key: {}", rejection);
            return Err(AppError::NotFound(String::new()));
        }
    };

    let destination = shortener::resolve(&state.store, &short_key)?;

    // Only reachable with validation disabled: anything else was checked on the way in.
    let location = match HeaderValue::from_str(&destination) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(
                "Stored destination for '{}' is not a valid Location header: {:?}",
                short_key,
                e
            );
            return Ok((StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response());
        }
    };

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
