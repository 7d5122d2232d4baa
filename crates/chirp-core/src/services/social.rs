//! Social service - the follow/unfollow relationship graph.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::DomainError;
use crate::ports::FollowRepository;

/// Mutations and lookups over the directed follow graph.
///
/// Self-follows are rejected here rather than stored: the feed layer
/// unions the viewer's own posts in explicitly, so the graph never holds
/// a self-loop.
#[derive(Clone)]
pub struct SocialService {
    follows: Arc<dyn FollowRepository>,
}

impl SocialService {
    pub fn new(follows: Arc<dyn FollowRepository>) -> Self {
        Self { follows }
    }

    /// Make `follower` follow `followed`. Idempotent: a repeat call is a
    /// successful no-op, never a duplicate edge.
    pub async fn follow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), DomainError> {
        if follower_id == followed_id {
            return Err(DomainError::InvalidOperation(
                "cannot follow yourself".into(),
            ));
        }

        let created = self.follows.insert(follower_id, followed_id).await?;
        if created {
            tracing::debug!(%follower_id, %followed_id, "follow edge created");
        }
        Ok(())
    }

    /// Remove the edge if present; absent edges are a no-op.
    pub async fn unfollow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), DomainError> {
        let removed = self.follows.remove(follower_id, followed_id).await?;
        if removed {
            tracing::debug!(%follower_id, %followed_id, "follow edge removed");
        }
        Ok(())
    }

    pub async fn is_following(
        &self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<bool, DomainError> {
        Ok(self.follows.exists(follower_id, followed_id).await?)
    }

    /// Everyone `follower_id` follows, excluding themselves.
    pub async fn followed_ids(&self, follower_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        Ok(self.follows.followed_ids(follower_id).await?)
    }

    pub async fn follower_count(&self, user_id: Uuid) -> Result<u64, DomainError> {
        Ok(self.follows.follower_count(user_id).await?)
    }

    pub async fn following_count(&self, user_id: Uuid) -> Result<u64, DomainError> {
        Ok(self.follows.following_count(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryFollows;

    fn service() -> (SocialService, Arc<InMemoryFollows>) {
        let follows = Arc::new(InMemoryFollows::default());
        (SocialService::new(follows.clone()), follows)
    }

    #[tokio::test]
    async fn follow_then_unfollow_round_trip() {
        let (svc, _) = service();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        svc.follow(a, b).await.unwrap();
        assert!(svc.is_following(a, b).await.unwrap());
        // Directed: the reverse edge does not exist.
        assert!(!svc.is_following(b, a).await.unwrap());

        svc.unfollow(a, b).await.unwrap();
        assert!(!svc.is_following(a, b).await.unwrap());
    }

    #[tokio::test]
    async fn self_follow_rejected_and_store_unchanged() {
        let (svc, follows) = service();
        let a = Uuid::new_v4();

        let err = svc.follow(a, a).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperation(_)));
        assert_eq!(follows.edge_count(), 0);
    }

    #[tokio::test]
    async fn double_follow_leaves_one_edge() {
        let (svc, follows) = service();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        svc.follow(a, b).await.unwrap();
        svc.follow(a, b).await.unwrap();

        assert_eq!(follows.edge_count(), 1);
        assert_eq!(svc.followed_ids(a).await.unwrap(), vec![b]);
    }

    #[tokio::test]
    async fn unfollow_absent_edge_is_noop() {
        let (svc, follows) = service();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        svc.unfollow(a, b).await.unwrap();
        assert_eq!(follows.edge_count(), 0);
    }

    #[tokio::test]
    async fn counts_follow_edge_direction() {
        let (svc, _) = service();
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        svc.follow(a, c).await.unwrap();
        svc.follow(b, c).await.unwrap();
        svc.follow(c, a).await.unwrap();

        assert_eq!(svc.follower_count(c).await.unwrap(), 2);
        assert_eq!(svc.following_count(c).await.unwrap(), 1);
    }
}
