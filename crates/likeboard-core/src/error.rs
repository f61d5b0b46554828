//! Error types for Likeboard

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LikeboardError>;

#[derive(Error, Debug)]
pub enum LikeboardError {
    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
