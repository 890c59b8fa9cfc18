use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Backend-assigned snippet identifier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SnippetId(pub i64);

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnippetId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(SnippetId)
    }
}

/// A saved, named code fragment as the backend returns it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub id: SnippetId,
    pub title: String,
    pub body: String,
    /// Set by the backend; not every deployment sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Request body for creating (`id` absent) or updating (`id` present) a snippet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SnippetDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SnippetId>,
    pub title: String,
    pub body: String,
}
