use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use todos_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::models::{FieldError, MessageResponse};

/// Error returned by the API handlers.
///
/// Every variant renders as a JSON `MessageResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// Unparseable body, unknown route or similar client mistake.
    BadRequest(String),
    /// Body parsed but failed field validation.
    Validation(Vec<FieldError>),
    /// Repository call failed; `message` is what the client sees.
    Repository {
        message: &'static str,
        source: RepositoryError,
    },
}

impl ApiError {
    pub fn repository(message: &'static str, source: RepositoryError) -> Self {
        Self::Repository { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, validation_errors) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message, None),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "validation error".to_string(),
                Some(errors),
            ),
            ApiError::Repository { message, source } => {
                tracing::error!(error = %source, "{message}");
                let status = StatusCode::from_u16(repository_error_to_status_code(&source))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, message.to_string(), None)
            }
        };

        tracing::warn!(status = %status, message = %message, "API error");

        (
            status,
            Json(MessageResponse {
                message,
                validation_errors,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_bad_request_body() {
        let (status, body) = render(ApiError::BadRequest("error while parsing JSON body".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({"message": "error while parsing JSON body", "validationErrors": null})
        );
    }

    #[tokio::test]
    async fn test_repository_error_uses_status_mapping() {
        let (status, body) = render(ApiError::repository(
            "error while listing todos",
            RepositoryError::BackendUnavailable("connection refused".to_string()),
        ))
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["message"], "error while listing todos");
    }

    #[tokio::test]
    async fn test_repository_error_hides_details() {
        let (status, body) = render(ApiError::repository(
            "error while creating todo",
            RepositoryError::BackendRequestFailure("Table not found".to_string()),
        ))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.to_string().contains("Table not found"));
    }
}
