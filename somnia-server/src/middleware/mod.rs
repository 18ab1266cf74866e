//! Request middleware

mod auth;

pub use auth::{CurrentUser, require_auth};
