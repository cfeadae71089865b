//! Data models for the NavHub navigation site.
//!
//! Entity JSON uses snake_case field names; the public navigation document
//! (`navigation.rs`) uses the camelCase names the front end renders.

mod card;
mod category;
mod navigation;
mod site_config;
mod user;

pub use card::*;
pub use category::*;
pub use navigation::*;
pub use site_config::*;
pub use user::*;
