//! Password hashing, bearer-token issuance, and request guards.

pub mod guard;
pub mod password;
pub mod token;
