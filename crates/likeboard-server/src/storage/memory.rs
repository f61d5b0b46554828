//! In-memory repository store

use async_trait::async_trait;
use likeboard_core::ports::RepositoryStore;
use likeboard_core::{Repository, RepositoryChanges, Result};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Ordered collection of repositories guarded by a single lock.
///
/// Every lookup-then-mutate runs under one write guard so concurrent requests
/// cannot interleave between finding a record and changing it.
pub struct MemoryRepositoryStore {
    repositories: RwLock<Vec<Repository>>,
}

impl MemoryRepositoryStore {
    pub fn new() -> Self {
        Self {
            repositories: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryRepositoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn position(repositories: &[Repository], id: &Uuid) -> Option<usize> {
    repositories.iter().position(|repo| repo.id == *id)
}

#[async_trait]
impl RepositoryStore for MemoryRepositoryStore {
    async fn list_repositories(&self) -> Result<Vec<Repository>> {
        Ok(self.repositories.read().await.clone())
    }

    async fn create_repository(&self, repository: &Repository) -> Result<()> {
        self.repositories.write().await.push(repository.clone());
        Ok(())
    }

    async fn update_repository(
        &self,
        id: &Uuid,
        changes: RepositoryChanges,
    ) -> Result<Option<Repository>> {
        let mut repositories = self.repositories.write().await;
        let Some(index) = position(&repositories, id) else {
            return Ok(None);
        };
        let repo = &mut repositories[index];
        repo.apply(changes);
        Ok(Some(repo.clone()))
    }

    async fn delete_repository(&self, id: &Uuid) -> Result<Option<Repository>> {
        let mut repositories = self.repositories.write().await;
        Ok(position(&repositories, id).map(|index| repositories.remove(index)))
    }

    async fn like_repository(&self, id: &Uuid) -> Result<Option<Repository>> {
        let mut repositories = self.repositories.write().await;
        let Some(index) = position(&repositories, id) else {
            return Ok(None);
        };
        let repo = &mut repositories[index];
        repo.like();
        Ok(Some(repo.clone()))
    }
}
