//! Repository id extractor for `:id` routes

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use likeboard_core::parse_repository_id;
use uuid::Uuid;

/// A syntactically valid repository id taken from the `:id` path segment.
///
/// Rejects with [`ApiError::InvalidRepositoryId`] before the handler runs, so
/// handlers taking this extractor never see a malformed id. Existence is not
/// checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for RepositoryId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidRepositoryId)?;

        match parse_repository_id(&raw) {
            Some(id) => Ok(RepositoryId(id)),
            None => {
                tracing::debug!("Rejecting invalid repository id: {}", raw);
                Err(ApiError::InvalidRepositoryId)
            }
        }
    }
}
