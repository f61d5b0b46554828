//! Repository handlers

use crate::{
    error::ApiError,
    extractors::{JsonBody, RepositoryId},
    AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use likeboard_core::{NewRepository, Repository, RepositoryChanges};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Repository>>, ApiError> {
    let repositories = state.catalog.list().await?;
    Ok(Json(repositories))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewRepository>,
) -> Result<Json<Repository>, ApiError> {
    let repository = state.catalog.create(req).await?;
    Ok(Json(repository))
}

pub async fn update(
    State(state): State<AppState>,
    RepositoryId(id): RepositoryId,
    JsonBody(changes): JsonBody<RepositoryChanges>,
) -> Result<Json<Repository>, ApiError> {
    let repository = state.catalog.update(&id, changes).await?;
    Ok(Json(repository))
}

pub async fn delete(
    State(state): State<AppState>,
    RepositoryId(id): RepositoryId,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn like(
    State(state): State<AppState>,
    RepositoryId(id): RepositoryId,
) -> Result<Json<Repository>, ApiError> {
    let repository = state.catalog.like(&id).await?;
    Ok(Json(repository))
}
