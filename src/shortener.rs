use crate::{
    config::AppConfig,
    error::AppError,
    keygen::{generate_short_key, SHORT_KEY_LEN},
    store::LinkStore,
};
use axum::http::HeaderValue;

// ── Shorten ────────────────────────────────────────────────────────────────

/// Store `destination` under a freshly generated key and return the composed
/// short URL (`<base_url>/<key>`).
///
/// Every call mints a new key, even for a destination that is already stored.
/// A key that happens to collide with an existing one replaces it.
pub fn shorten(
    store: &LinkStore,
    config: &AppConfig,
    destination: String,
) -> Result<String, AppError> {
    if config.validate_destination {
        validate_destination(&destination)?;
    }

    let short_key = generate_short_key(SHORT_KEY_LEN);

    if let Some(previous) = store.insert(&short_key, &destination) {
        tracing::warn!(
            short_key = %short_key,
            previous = %previous,
            "short key collision, previous mapping overwritten"
        );
    }

    tracing::debug!(short_key = %short_key, destination = %destination, "mapping created");

    Ok(format!("{}/{}", config.base_url, short_key))
}

/// Destinations must start with "http" and be usable verbatim as a
/// `Location` header value.
pub fn validate_destination(destination: &str) -> Result<(), AppError> {
    if !destination.starts_with("http") || HeaderValue::from_str(destination).is_err() {
        return Err(AppError::InvalidUrl(destination.to_owned()));
    }
    Ok(())
}

// ── Redirect ───────────────────────────────────────────────────────────────

/// Look up the destination stored under `short_key`.
pub fn resolve(store: &LinkStore, short_key: &str) -> Result<String, AppError> {
    store
        .get(short_key)
        .ok_or_else(|| AppError::NotFound(short_key.to_owned()))
}
