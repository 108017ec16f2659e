//! Tag entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,

    pub name: String,

    /// URL-safe identifier, unique across all tags.
    pub slug: String,

    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Insert shape for a tag; the store assigns the ID.
#[derive(Clone, Debug)]
pub struct NewTag {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
