//! Short-link registry and access-control policy.

pub mod code;
pub mod policy;
pub mod registry;

use thiserror::Error;

/// Link operation errors.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("No link with that code")]
    NotFound,

    #[error("You do not own this link")]
    Forbidden,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Could not allocate a unique code")]
    CodeSpaceExhausted,
}
