//! Repository record types

use serde::{Deserialize, Serialize};
use uuid::{Uuid, Variant};

/// Length of the canonical hyphenated UUID form
const HYPHENATED_LEN: usize = 36;

/// A tracked source repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub techs: Vec<String>,
    pub likes: u64,
}

impl Repository {
    /// Build a fresh record with a new v4 id and zero likes.
    ///
    /// Missing fields fall back to an empty title, an empty url and no techs.
    pub fn new(request: NewRepository) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: request.title.unwrap_or_default(),
            url: request.url.unwrap_or_default(),
            techs: request.techs.unwrap_or_default(),
            likes: 0,
        }
    }

    /// Apply a partial update. `id` and `likes` are never touched.
    pub fn apply(&mut self, changes: RepositoryChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(url) = changes.url {
            self.url = url;
        }
        if let Some(techs) = changes.techs {
            self.techs = techs;
        }
    }

    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}

/// Create request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRepository {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub techs: Option<Vec<String>>,
}

/// Update request body. `None` (absent or `null`) keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub techs: Option<Vec<String>>,
}

impl RepositoryChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.techs.is_none()
    }
}

/// Parse a repository id from a path segment.
///
/// Only the canonical hyphenated form is accepted (any case), with an RFC 4122
/// variant and a version between 1 and 5. The nil UUID is also accepted.
pub fn parse_repository_id(raw: &str) -> Option<Uuid> {
    if raw.len() != HYPHENATED_LEN {
        return None;
    }
    let id = Uuid::try_parse(raw).ok()?;
    if id.is_nil() {
        return Some(id);
    }
    let version_ok = (1..=5).contains(&id.get_version_num());
    if version_ok && id.get_variant() == Variant::RFC4122 {
        Some(id)
    } else {
        None
    }
}
