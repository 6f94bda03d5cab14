use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use murmur_core::domain::common::entities::app_errors::CoreError;

/// Categorized request failure returned by Murmur handlers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// JSON body sent for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        (
            status,
            Json(ApiErrorBody {
                status: status.as_u16(),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::BadRequest(message) => ApiError::BadRequest(message),
            CoreError::Unauthorized(message) => ApiError::Unauthorized(message),
            CoreError::NotFound(message) => ApiError::NotFound(message),
            CoreError::Conflict(message) => ApiError::Conflict(message),
            CoreError::Internal(message) => ApiError::InternalServerError(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("User not found".to_string())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("Email already in use".to_string())
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Unauthorized("Unauthorized".to_string())
                .into_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::BadRequest("Invalid password".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_from_core_error_maps_categories() {
        let api: ApiError = CoreError::NotFound("Post not found".to_string()).into();
        assert_eq!(api, ApiError::NotFound("Post not found".to_string()));

        let api: ApiError = CoreError::BadRequest("pagination limit must be at least 1".to_string()).into();
        assert!(matches!(api, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::NotFound("Post not found".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["status"], 404);
        assert_eq!(body["message"], "Post not found");
    }
}
