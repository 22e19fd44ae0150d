//! Axum extractors.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

/// Header carrying the caller's identity, set by the fronting gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the caller's user id. Returns 403 if absent or empty.
///
/// The value is trusted as-is; authentication happens before the request
/// reaches this service.
pub struct UserId(pub String);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                tracing::warn!("User ID is not specified");
                StatusCode::FORBIDDEN
            })?;

        Ok(UserId(user_id.to_string()))
    }
}
