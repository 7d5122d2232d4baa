use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum post body length, in characters.
pub const MAX_BODY_LEN: usize = 140;

/// Post entity - a single microblog entry.
///
/// Posts are append-only: once created they are never edited, so there is
/// no `updated_at` here. `created_at` is the feed sort key; `id` breaks
/// timestamp ties so pagination stays deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(author_id: Uuid, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            body,
            created_at: Utc::now(),
        }
    }
}
