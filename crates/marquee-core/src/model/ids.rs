use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a movie record.
///
/// The value is assigned by the remote catalog: either a numeric episode
/// identifier rendered in decimal, or an opaque storage key. No uniqueness
/// is enforced locally beyond what the backend provides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(String);

impl MovieId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for MovieId {
    fn from(episode: u64) -> Self {
        Self(episode.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for MovieId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
