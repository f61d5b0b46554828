//! Storage traits for repository records

use crate::Result;
use async_trait::async_trait;
use likeboard_types::{Repository, RepositoryChanges};
use uuid::Uuid;

/// Repository store
///
/// Lookups by id return `None` when the id is unknown; implementations must not
/// touch any other record in that case. Each method is atomic with respect to
/// the others.
#[async_trait]
pub trait RepositoryStore: Send + Sync {
    /// All records in insertion order.
    async fn list_repositories(&self) -> Result<Vec<Repository>>;
    /// Append a record at the end of the collection.
    async fn create_repository(&self, repository: &Repository) -> Result<()>;
    async fn update_repository(
        &self,
        id: &Uuid,
        changes: RepositoryChanges,
    ) -> Result<Option<Repository>>;
    /// Remove a record, shifting later records down by one.
    async fn delete_repository(&self, id: &Uuid) -> Result<Option<Repository>>;
    /// Increment `likes` by one and return the updated record.
    async fn like_repository(&self, id: &Uuid) -> Result<Option<Repository>>;
}
