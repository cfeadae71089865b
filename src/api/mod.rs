//! REST API module.
//!
//! Contains all API routes and handlers. Entity endpoints return the bare
//! row JSON; deletes return `{"ok": true}`.

mod auth;
mod cards;
mod categories;
mod configs;
mod navigation;
mod status;
mod users;

pub use auth::*;
pub use cards::*;
pub use categories::*;
pub use configs::*;
pub use navigation::*;
pub use status::*;
pub use users::*;

use serde::{Deserialize, Serialize};

/// Pagination query parameters shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

pub(crate) fn default_limit() -> i64 {
    100
}

/// Body returned by the delete endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
