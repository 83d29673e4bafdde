//! In-memory short-link registry.
//!
//! Owns the `code → link` map. Code allocation and owner-checked mutation
//! go through the map entry API so concurrent requests cannot lose updates
//! or overwrite each other's codes.

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use super::LinkError;
use super::code::generate_code;
use super::policy::{self, LinkAction};
use crate::models::auth::User;
use crate::models::links::ShortLink;

/// Attempts to find an unclaimed code before giving up.
const MAX_CODE_ATTEMPTS: usize = 16;

/// In-memory link store, shared across request tasks.
#[derive(Default)]
pub struct LinkRegistry {
    links: DashMap<String, ShortLink>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }

    /// Create a link owned by `owner`, allocating a fresh code.
    ///
    /// Codes are claimed atomically; a collision with an existing code
    /// triggers regeneration rather than an overwrite.
    pub fn create(&self, target_url: &str, owner: &User) -> Result<ShortLink, LinkError> {
        if target_url.is_empty() {
            return Err(LinkError::Validation("Target URL is required".into()));
        }
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code();
            match self.links.entry(code.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    let link = ShortLink {
                        code,
                        target_url: target_url.to_string(),
                        owner_id: owner.id.clone(),
                        created_at: Utc::now(),
                    };
                    slot.insert(link.clone());
                    debug!(code = %link.code, owner_id = %link.owner_id, "created link");
                    return Ok(link);
                }
            }
        }
        Err(LinkError::CodeSpaceExhausted)
    }

    /// Fetch a link by code, with no ownership check. Callers showing the
    /// result to a user gate it with [`policy::authorize`] first.
    pub fn get(&self, code: &str) -> Result<ShortLink, LinkError> {
        self.links
            .get(code)
            .map(|entry| entry.value().clone())
            .ok_or(LinkError::NotFound)
    }

    /// All links owned by `owner_id`, oldest first.
    ///
    /// Never an error: a caller with no links gets an empty list.
    pub fn list_by_owner(&self, owner_id: &str) -> Vec<ShortLink> {
        let mut links: Vec<ShortLink> = self
            .links
            .iter()
            .filter(|entry| entry.value().owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();
        links.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        links
    }

    /// Point an existing link at a new target. Owner only.
    pub fn update_target(
        &self,
        code: &str,
        caller: &User,
        new_target: &str,
    ) -> Result<ShortLink, LinkError> {
        if new_target.is_empty() {
            return Err(LinkError::Validation("Target URL is required".into()));
        }
        match self.links.entry(code.to_string()) {
            Entry::Vacant(_) => Err(LinkError::NotFound),
            Entry::Occupied(mut slot) => {
                policy::authorize(Some(caller), slot.get(), LinkAction::Update)?;
                slot.get_mut().target_url = new_target.to_string();
                Ok(slot.get().clone())
            }
        }
    }

    /// Delete an existing link. Owner only.
    pub fn delete(&self, code: &str, caller: &User) -> Result<(), LinkError> {
        match self.links.entry(code.to_string()) {
            Entry::Vacant(_) => Err(LinkError::NotFound),
            Entry::Occupied(slot) => {
                policy::authorize(Some(caller), slot.get(), LinkAction::Delete)?;
                slot.remove();
                debug!(code, "deleted link");
                Ok(())
            }
        }
    }

    /// Resolve a code to its target URL — the public redirect path.
    pub fn resolve(&self, code: &str) -> Result<String, LinkError> {
        let link = self.get(code)?;
        policy::authorize(None, &link, LinkAction::Resolve)?;
        Ok(link.target_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::code::CODE_LEN;

    fn user(id: &str) -> User {
        User {
            id: id.into(),
            email: format!("{id}@example.com"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn create_assigns_a_fresh_code() {
        let registry = LinkRegistry::new();
        let alice = user("alice");
        let link = registry.create("http://example.com", &alice).unwrap();
        assert_eq!(link.code.len(), CODE_LEN);
        assert!(link.code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(link.owner_id, "alice");
        assert_eq!(link.target_url, "http://example.com");
    }

    #[test]
    fn create_rejects_empty_target() {
        let registry = LinkRegistry::new();
        let err = registry.create("", &user("alice")).unwrap_err();
        assert!(matches!(err, LinkError::Validation(_)));
    }

    #[test]
    fn resolve_returns_current_target_without_identity() {
        let registry = LinkRegistry::new();
        let alice = user("alice");
        let link = registry.create("http://example.com", &alice).unwrap();
        assert_eq!(registry.resolve(&link.code).unwrap(), "http://example.com");

        registry
            .update_target(&link.code, &alice, "http://example.org")
            .unwrap();
        assert_eq!(registry.resolve(&link.code).unwrap(), "http://example.org");
    }

    #[test]
    fn resolve_unknown_code_is_not_found() {
        let registry = LinkRegistry::new();
        assert!(matches!(
            registry.resolve("zzzzz1").unwrap_err(),
            LinkError::NotFound
        ));
    }

    #[test]
    fn only_the_owner_may_update() {
        let registry = LinkRegistry::new();
        let alice = user("alice");
        let bob = user("bob");
        let link = registry.create("http://example.com", &alice).unwrap();

        let err = registry
            .update_target(&link.code, &bob, "http://evil.example")
            .unwrap_err();
        assert!(matches!(err, LinkError::Forbidden));
        // Target unchanged after the denied update.
        assert_eq!(registry.resolve(&link.code).unwrap(), "http://example.com");

        let updated = registry
            .update_target(&link.code, &alice, "http://example.org")
            .unwrap();
        assert_eq!(updated.target_url, "http://example.org");
    }

    #[test]
    fn only_the_owner_may_delete() {
        let registry = LinkRegistry::new();
        let alice = user("alice");
        let bob = user("bob");
        let link = registry.create("http://example.com", &alice).unwrap();

        assert!(matches!(
            registry.delete(&link.code, &bob).unwrap_err(),
            LinkError::Forbidden
        ));
        registry.delete(&link.code, &alice).unwrap();
        assert!(matches!(
            registry.delete(&link.code, &alice).unwrap_err(),
            LinkError::NotFound
        ));
    }

    #[test]
    fn update_unknown_code_is_not_found() {
        let registry = LinkRegistry::new();
        let err = registry
            .update_target("zzzzz1", &user("alice"), "http://example.com")
            .unwrap_err();
        assert!(matches!(err, LinkError::NotFound));
    }

    #[test]
    fn list_by_owner_filters_to_the_caller() {
        let registry = LinkRegistry::new();
        let alice = user("alice");
        let bob = user("bob");
        let a1 = registry.create("http://example.com/1", &alice).unwrap();
        let a2 = registry.create("http://example.com/2", &alice).unwrap();
        let b1 = registry.create("http://example.com/3", &bob).unwrap();

        let alices: Vec<String> = registry
            .list_by_owner("alice")
            .into_iter()
            .map(|l| l.code)
            .collect();
        assert_eq!(alices.len(), 2);
        assert!(alices.contains(&a1.code));
        assert!(alices.contains(&a2.code));
        assert!(!alices.contains(&b1.code));

        assert_eq!(registry.list_by_owner("bob").len(), 1);
        assert!(registry.list_by_owner("nobody").is_empty());
    }
}
