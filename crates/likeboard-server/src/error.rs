//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use likeboard_core::LikeboardError;
use serde_json::json;
use thiserror::Error;

/// Errors a handler or extractor can answer with.
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid repository ID.")]
    InvalidRepositoryId,

    #[error("Repository not found.")]
    RepositoryNotFound,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Internal server error.")]
    Internal(#[source] LikeboardError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRepositoryId
            | ApiError::RepositoryNotFound
            | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LikeboardError> for ApiError {
    fn from(e: LikeboardError) -> Self {
        match e {
            LikeboardError::RepositoryNotFound(_) => ApiError::RepositoryNotFound,
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref e) = self {
            tracing::error!("Request failed: {}", e);
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let not_found: ApiError = LikeboardError::RepositoryNotFound("x".to_string()).into();
        assert!(matches!(not_found, ApiError::RepositoryNotFound));
        assert_eq!(not_found.status(), StatusCode::BAD_REQUEST);

        let storage: ApiError = LikeboardError::Storage("poisoned".to_string()).into();
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(storage.to_string(), "Internal server error.");

        let body = ApiError::InvalidBody("EOF while parsing".to_string());
        assert_eq!(body.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body.to_string(), "Invalid request body: EOF while parsing");
    }
}
