//! Service layer shared by the HTTP handlers.

pub mod auth;
pub mod cookies;
