//! Category entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post category. Categories form a shallow hierarchy via
/// `parent_category_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,

    pub name: String,

    /// URL-safe identifier, unique across all categories.
    pub slug: String,

    pub description: Option<String>,

    /// Parent category ID; the referenced category must already exist,
    /// so a chain can never loop back on itself.
    pub parent_category_id: Option<i64>,

    /// Position in navigation listings.
    pub display_order: i32,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert shape for a category; the store assigns the ID.
#[derive(Clone, Debug)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_category_id: Option<i64>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
