//! # tinylink_core
//!
//! Core domain logic for Tinylink: the user directory, session tokens,
//! and the short-link registry with its access-control policy.

pub mod auth;
pub mod links;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
