//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    /// Login name, unique across all users.
    pub username: String,

    /// Contact address, unique across all users.
    pub email: String,

    pub full_name: Option<String>,

    pub bio: Option<String>,

    pub avatar_url: Option<String>,

    pub website_url: Option<String>,

    pub is_active: bool,

    pub is_admin: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert shape for a user; the store assigns the ID.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub website_url: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}
