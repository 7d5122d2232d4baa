use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// User repository - identity lookups and profile persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Insert a new user.
    async fn insert(&self, user: User) -> Result<User, RepoError>;

    /// Persist profile changes to an existing user.
    async fn update(&self, user: User) -> Result<User, RepoError>;

    /// Record when the user was last seen.
    async fn touch_last_seen(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), RepoError>;
}

/// Post repository - the append-only post log.
///
/// The paged queries order by `created_at DESC, id DESC` so that ties on
/// the timestamp resolve the same way on every query.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Append a post to the log.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Count posts written by any of `author_ids`.
    async fn count_by_authors(&self, author_ids: &[Uuid]) -> Result<u64, RepoError>;

    /// One window of posts by any of `author_ids`, newest first.
    async fn page_by_authors(
        &self,
        author_ids: &[Uuid],
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Post>, RepoError>;

    /// Count all posts in the system.
    async fn count_all(&self) -> Result<u64, RepoError>;

    /// One window over all posts, newest first.
    async fn page_all(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError>;
}

/// Follow repository - the directed follow edges.
///
/// Uniqueness of the `(follower, followed)` pair is enforced by storage,
/// not just by the callers, so concurrent follow calls cannot produce a
/// duplicate edge.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert the edge if absent. Returns `true` if a new edge was created.
    async fn insert(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool, RepoError>;

    /// Remove the edge if present. Returns `true` if an edge was removed.
    async fn remove(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool, RepoError>;

    /// Whether the edge `(follower, followed)` exists.
    async fn exists(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool, RepoError>;

    /// Ids of every user that `follower_id` follows. Never contains
    /// `follower_id` itself.
    async fn followed_ids(&self, follower_id: Uuid) -> Result<Vec<Uuid>, RepoError>;

    /// Number of users following `user_id`.
    async fn follower_count(&self, user_id: Uuid) -> Result<u64, RepoError>;

    /// Number of users that `user_id` follows.
    async fn following_count(&self, user_id: Uuid) -> Result<u64, RepoError>;
}
