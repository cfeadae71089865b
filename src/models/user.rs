//! User model for the admin console.

use serde::{Deserialize, Serialize};

/// A stored user row. Deliberately not serializable: `hashed_password`
/// must never leave the process. API responses use [`UserRead`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub hashed_password: String,
    pub is_active: bool,
    /// Grants permission to perform mutating operations.
    pub is_superuser: bool,
}

/// Public projection of a user returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRead {
    pub id: i64,
    pub username: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

impl From<User> for UserRead {
    fn from(user: User) -> Self {
        UserRead {
            id: user.id,
            username: user.username,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
        }
    }
}

/// Request body for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

fn default_active() -> bool {
    true
}

/// Request body for updating an existing user.
///
/// Absent fields keep their current value. An empty `password` string is a
/// no-op; a non-empty one is re-hashed before storage.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_superuser: Option<bool>,
}
