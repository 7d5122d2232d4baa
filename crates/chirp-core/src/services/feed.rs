//! Feed service - paginated, time-ordered post listings.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::pagination::{self, Page};
use crate::ports::{FollowRepository, PostRepository};

/// Computes paginated post feeds from the post log and the follow graph.
///
/// Every listing runs exactly two queries: one count (for the boundary
/// flags) and one window. Callers must clamp `page >= 1`; an offset past
/// the end simply yields an empty window.
#[derive(Clone)]
pub struct FeedService {
    posts: Arc<dyn PostRepository>,
    follows: Arc<dyn FollowRepository>,
}

impl FeedService {
    pub fn new(posts: Arc<dyn PostRepository>, follows: Arc<dyn FollowRepository>) -> Self {
        Self { posts, follows }
    }

    /// Append a post to the viewer's log.
    pub async fn create_post(&self, author_id: Uuid, body: &str) -> Result<Post, DomainError> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("post body must not be empty".into()));
        }
        if trimmed.chars().count() > crate::domain::MAX_BODY_LEN {
            return Err(DomainError::Validation(format!(
                "post body must be at most {} characters",
                crate::domain::MAX_BODY_LEN
            )));
        }

        let post = self
            .posts
            .insert(Post::new(author_id, trimmed.to_string()))
            .await?;
        tracing::debug!(post_id = %post.id, author_id = %post.author_id, "post created");
        Ok(post)
    }

    /// The viewer's home timeline: their own posts plus posts of everyone
    /// they follow, newest first.
    pub async fn home_timeline(
        &self,
        viewer_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Post>, DomainError> {
        // Explicit union of the viewer with the followed set; the graph
        // itself never contains a self-loop.
        let mut author_ids = self.follows.followed_ids(viewer_id).await?;
        author_ids.push(viewer_id);

        self.page_by_authors(&author_ids, page, per_page).await
    }

    /// All posts in the system, newest first.
    pub async fn explore(&self, page: u64, per_page: u64) -> Result<Page<Post>, DomainError> {
        let total = self.posts.count_all().await?;
        let items = self
            .posts
            .page_all(pagination::offset(page, per_page), per_page)
            .await?;
        Ok(Page::new(items, page, per_page, total))
    }

    /// A single user's posts, newest first.
    pub async fn user_posts(
        &self,
        author_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Post>, DomainError> {
        self.page_by_authors(&[author_id], page, per_page).await
    }

    async fn page_by_authors(
        &self,
        author_ids: &[Uuid],
        page: u64,
        per_page: u64,
    ) -> Result<Page<Post>, DomainError> {
        let total = self.posts.count_by_authors(author_ids).await?;
        let items = self
            .posts
            .page_by_authors(author_ids, pagination::offset(page, per_page), per_page)
            .await?;
        Ok(Page::new(items, page, per_page, total))
    }
}
