//! Short-link domain model.

use serde::{Deserialize, Serialize};

/// A short code mapped to a long target URL.
///
/// `owner_id` is set at creation and never changes; the registry enforces
/// that only the owner mutates or deletes the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortLink {
    pub code: String,
    pub target_url: String,
    pub owner_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
