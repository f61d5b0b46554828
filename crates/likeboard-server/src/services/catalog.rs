//! Repository catalog service

use likeboard_core::ports::RepositoryStore;
use likeboard_core::{LikeboardError, NewRepository, Repository, RepositoryChanges, Result};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub struct RepositoryCatalog {
    store: Arc<dyn RepositoryStore>,
}

impl RepositoryCatalog {
    pub fn new(store: Arc<dyn RepositoryStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Repository>> {
        self.store.list_repositories().await
    }

    pub async fn create(&self, request: NewRepository) -> Result<Repository> {
        let repository = Repository::new(request);
        info!(
            "Creating repository: id={}, title={}",
            repository.id, repository.title
        );

        self.store.create_repository(&repository).await?;
        Ok(repository)
    }

    pub async fn update(&self, id: &Uuid, changes: RepositoryChanges) -> Result<Repository> {
        if changes.is_empty() {
            debug!("Update for repository {} carries no changes", id);
        }

        let repository = self
            .store
            .update_repository(id, changes)
            .await?
            .ok_or_else(|| LikeboardError::RepositoryNotFound(id.to_string()))?;

        info!("Updated repository {}", id);
        Ok(repository)
    }

    pub async fn delete(&self, id: &Uuid) -> Result<()> {
        self.store
            .delete_repository(id)
            .await?
            .ok_or_else(|| LikeboardError::RepositoryNotFound(id.to_string()))?;

        info!("Deleted repository {}", id);
        Ok(())
    }

    pub async fn like(&self, id: &Uuid) -> Result<Repository> {
        let repository = self
            .store
            .like_repository(id)
            .await?
            .ok_or_else(|| LikeboardError::RepositoryNotFound(id.to_string()))?;

        debug!("Repository {} now has {} likes", id, repository.likes);
        Ok(repository)
    }
}
