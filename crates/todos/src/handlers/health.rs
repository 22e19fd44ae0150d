//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. The repository is initialized before the
/// listener is bound, so a live server is also a ready one.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
