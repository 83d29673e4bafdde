//! In-memory user directory.
//!
//! Owns the `id → user` and `email → id` maps. Email uniqueness is enforced
//! by claiming the email index entry atomically, so two concurrent
//! registrations with the same address cannot both win. Accounts are never
//! updated or deleted.

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use super::{AuthError, password};
use crate::models::auth::{StoredUser, User};

/// In-memory credential store, shared across request tasks.
#[derive(Default)]
pub struct UserDirectory {
    users: DashMap<String, StoredUser>,
    by_email: DashMap<String, String>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            by_email: DashMap::new(),
        }
    }

    /// Register a new account.
    ///
    /// Email comparison is exact and case-sensitive. The plaintext password
    /// is hashed before any map entry is taken, so bcrypt work never holds
    /// a shard lock.
    pub fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let password_hash = password::hash_password(password)?;
        match self.by_email.entry(email.to_string()) {
            Entry::Occupied(_) => Err(AuthError::DuplicateEmail),
            Entry::Vacant(slot) => {
                let user = User {
                    id: Uuid::new_v4().to_string(),
                    email: email.to_string(),
                    created_at: Utc::now(),
                };
                // Insert the record before publishing the email mapping:
                // anyone who can see the email can see the user.
                self.users.insert(
                    user.id.clone(),
                    StoredUser {
                        user: user.clone(),
                        password_hash,
                    },
                );
                slot.insert(user.id.clone());
                debug!(user_id = %user.id, "registered user");
                Ok(user)
            }
        }
    }

    /// Verify an email + password pair, returning the user on success.
    pub fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let user_id = match self.by_email.get(email) {
            Some(id) => id.value().clone(),
            None => return Err(AuthError::UnknownEmail),
        };
        let stored = self
            .users
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .ok_or(AuthError::UnknownEmail)?;
        if !password::verify_password(password, &stored.password_hash)? {
            return Err(AuthError::WrongPassword);
        }
        Ok(stored.user)
    }

    /// Fetch a user by id.
    pub fn get(&self, user_id: &str) -> Option<User> {
        self.users
            .get(user_id)
            .map(|entry| entry.value().user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_verify_succeeds() {
        let directory = UserDirectory::new();
        let user = directory.register("alice@example.com", "pw1").unwrap();
        let verified = directory
            .verify_credentials("alice@example.com", "pw1")
            .unwrap();
        assert_eq!(verified.id, user.id);
        assert_eq!(verified.email, "alice@example.com");
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let directory = UserDirectory::new();
        directory.register("alice@example.com", "pw1").unwrap();
        let err = directory.register("alice@example.com", "pw2").unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
    }

    #[test]
    fn email_comparison_is_case_sensitive() {
        let directory = UserDirectory::new();
        directory.register("alice@example.com", "pw1").unwrap();
        // A different casing is a different login key, not a duplicate.
        directory.register("Alice@example.com", "pw1").unwrap();
        let err = directory
            .verify_credentials("ALICE@example.com", "pw1")
            .unwrap_err();
        assert!(matches!(err, AuthError::UnknownEmail));
    }

    #[test]
    fn empty_fields_are_rejected() {
        let directory = UserDirectory::new();
        assert!(matches!(
            directory.register("", "pw1").unwrap_err(),
            AuthError::MissingCredentials
        ));
        assert!(matches!(
            directory.register("alice@example.com", "").unwrap_err(),
            AuthError::MissingCredentials
        ));
    }

    #[test]
    fn unknown_email_and_wrong_password_stay_distinct() {
        let directory = UserDirectory::new();
        directory.register("alice@example.com", "pw1").unwrap();
        assert!(matches!(
            directory
                .verify_credentials("nobody@example.com", "pw1")
                .unwrap_err(),
            AuthError::UnknownEmail
        ));
        assert!(matches!(
            directory
                .verify_credentials("alice@example.com", "wrong")
                .unwrap_err(),
            AuthError::WrongPassword
        ));
    }

    #[test]
    fn get_returns_registered_user() {
        let directory = UserDirectory::new();
        let user = directory.register("alice@example.com", "pw1").unwrap();
        assert_eq!(directory.get(&user.id).unwrap().email, "alice@example.com");
        assert!(directory.get("missing-id").is_none());
    }

    #[test]
    fn plaintext_is_never_stored() {
        let directory = UserDirectory::new();
        let user = directory.register("alice@example.com", "pw1").unwrap();
        let stored = directory.users.get(&user.id).unwrap();
        assert_ne!(stored.password_hash, "pw1");
        assert!(stored.password_hash.starts_with("$2"));
    }
}
