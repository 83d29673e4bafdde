//! Access-control policy for link operations.
//!
//! A pure decision function applied before any read or mutation of a
//! specific link. Redirect resolution is deliberately ownerless; every
//! other action requires the caller to be the link's owner.

use crate::models::auth::User;
use crate::models::links::ShortLink;

use super::LinkError;

/// Action requested against a specific link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// Follow the public redirect.
    Resolve,
    /// View the link's detail.
    Read,
    /// Change the target URL.
    Update,
    /// Remove the link.
    Delete,
}

/// Decide whether `caller` may perform `action` on `link`.
pub fn authorize(
    caller: Option<&User>,
    link: &ShortLink,
    action: LinkAction,
) -> Result<(), LinkError> {
    if action == LinkAction::Resolve {
        return Ok(());
    }
    let user = caller.ok_or(LinkError::Unauthenticated)?;
    if user.id != link.owner_id {
        return Err(LinkError::Forbidden);
    }
    Ok(())
}
