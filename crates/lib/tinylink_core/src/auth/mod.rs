//! Authentication logic.
//!
//! Provides password hashing, session token management, and the in-memory
//! user directory shared by the API layer.

pub mod directory;
pub mod password;
pub mod session;

use thiserror::Error;

/// Authentication errors.
///
/// `UnknownEmail` and `WrongPassword` are deliberately distinct variants so
/// callers can log which half of the credential pair failed; the HTTP layer
/// collapses both into one generic message.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("No account with that email")]
    UnknownEmail,

    #[error("Incorrect password")]
    WrongPassword,

    #[error("Token error: {0}")]
    Token(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
