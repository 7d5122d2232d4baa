//! In-memory port implementations for service tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;
use crate::ports::{AuthError, FollowRepository, PasswordService, PostRepository, UserRepository};

/// Reversible stand-in for Argon2 so tests stay fast.
pub struct PlainPasswords;

impl PasswordService for PlainPasswords {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("hashed:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username || u.email == user.email) {
            return Err(RepoError::Constraint("user already exists".into()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *slot = user.clone();
        Ok(user)
    }

    async fn touch_last_seen(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), RepoError> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            user.last_seen = Some(at);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPosts {
    posts: Mutex<Vec<Post>>,
}

impl InMemoryPosts {
    pub fn push(&self, post: Post) {
        self.posts.lock().unwrap().push(post);
    }

    /// Posts by the given authors in repository order:
    /// `created_at DESC, id DESC`.
    fn sorted_by_authors(&self, author_ids: &[Uuid]) -> Vec<Post> {
        let mut matching: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| author_ids.contains(&p.author_id))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        matching
    }

    fn all_author_ids(&self) -> Vec<Uuid> {
        self.posts.lock().unwrap().iter().map(|p| p.author_id).collect()
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        self.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn count_by_authors(&self, author_ids: &[Uuid]) -> Result<u64, RepoError> {
        Ok(self.sorted_by_authors(author_ids).len() as u64)
    }

    async fn page_by_authors(
        &self,
        author_ids: &[Uuid],
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Post>, RepoError> {
        Ok(self
            .sorted_by_authors(author_ids)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_all(&self) -> Result<u64, RepoError> {
        Ok(self.posts.lock().unwrap().len() as u64)
    }

    async fn page_all(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let authors = self.all_author_ids();
        self.page_by_authors(&authors, offset, limit).await
    }
}

#[derive(Default)]
pub struct InMemoryFollows {
    edges: Mutex<HashSet<(Uuid, Uuid)>>,
}

impl InMemoryFollows {
    pub fn seed(&self, follower_id: Uuid, followed_id: Uuid) {
        self.edges.lock().unwrap().insert((follower_id, followed_id));
    }

    pub fn edge_count(&self) -> usize {
        self.edges.lock().unwrap().len()
    }
}

#[async_trait]
impl FollowRepository for InMemoryFollows {
    async fn insert(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool, RepoError> {
        Ok(self.edges.lock().unwrap().insert((follower_id, followed_id)))
    }

    async fn remove(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool, RepoError> {
        Ok(self.edges.lock().unwrap().remove(&(follower_id, followed_id)))
    }

    async fn exists(&self, follower_id: Uuid, followed_id: Uuid) -> Result<bool, RepoError> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .contains(&(follower_id, followed_id)))
    }

    async fn followed_ids(&self, follower_id: Uuid) -> Result<Vec<Uuid>, RepoError> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(f, _)| *f == follower_id)
            .map(|(_, followed)| *followed)
            .collect())
    }

    async fn follower_count(&self, user_id: Uuid) -> Result<u64, RepoError> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, followed)| *followed == user_id)
            .count() as u64)
    }

    async fn following_count(&self, user_id: Uuid) -> Result<u64, RepoError> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(f, _)| *f == user_id)
            .count() as u64)
    }
}
