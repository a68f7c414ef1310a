use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Re-classify any failure other than `NotFound` as `Unprocessable`.
    pub fn or_unprocessable(self) -> Self {
        match self {
            AppError::NotFound(_) | AppError::Unprocessable(_) => self,
            other => AppError::Unprocessable(other.to_string()),
        }
    }

    /// Re-classify every failure as `NotFound`.
    pub fn into_not_found(self) -> Self {
        match self {
            AppError::NotFound(_) => self,
            other => AppError::NotFound(other.to_string()),
        }
    }
}

/// Fixed client-facing message for a status code. Internal detail never leaves the server.
pub fn public_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request",
        StatusCode::NOT_FOUND => "Resource NOT found",
        StatusCode::METHOD_NOT_ALLOWED => "Method NOT allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable",
        _ => "Internal server error",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(ref msg) => tracing::error!("Internal error: {}", msg),
            AppError::Unprocessable(ref msg) => tracing::warn!("Unprocessable request: {}", msg),
            ref other => tracing::debug!("Request failed: {}", other),
        }

        let body = Json(ErrorResponse::new(status.as_u16(), public_message(status)));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, body) = render(AppError::NotFound("question 7".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "Resource NOT found");
    }

    #[tokio::test]
    async fn test_internal_detail_is_not_exposed() {
        let (status, body) =
            render(AppError::Internal("connection refused on 10.0.0.3".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], 500);
        assert_eq!(body["message"], "Internal server error");
        assert!(!body.to_string().contains("10.0.0.3"));
    }

    #[tokio::test]
    async fn test_validation_renders_as_bad_request() {
        let (status, body) = render(AppError::Validation("question: blank".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Bad request");
    }

    #[test]
    fn test_or_unprocessable_keeps_not_found() {
        let err = AppError::NotFound("x".to_string()).or_unprocessable();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = AppError::Internal("x".to_string()).or_unprocessable();
        assert!(matches!(err, AppError::Unprocessable(_)));
    }

    #[test]
    fn test_into_not_found() {
        let err = AppError::Unprocessable("x".to_string()).into_not_found();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
