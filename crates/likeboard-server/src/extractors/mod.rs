//! Request extractors

pub mod json_body;
pub mod repository_id;

pub use json_body::JsonBody;
pub use repository_id::RepositoryId;
