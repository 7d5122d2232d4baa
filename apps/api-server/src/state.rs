//! Application state - shared across all handlers.

use std::sync::Arc;

use chirp_core::ports::{FollowRepository, PasswordService, PostRepository, UserRepository};
use chirp_core::services::{AccountService, FeedService, SocialService};
use chirp_infra::Argon2PasswordService;
use chirp_infra::database::{
    DatabaseConfig, PostgresFollowRepository, PostgresPostRepository, PostgresUserRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub social: SocialService,
    pub feed: FeedService,
}

impl AppState {
    /// Connect to the database and wire the services to its repositories.
    pub async fn new(db_config: &DatabaseConfig) -> std::io::Result<Self> {
        let db = chirp_infra::connect(db_config)
            .await
            .map_err(std::io::Error::other)?;

        let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(db.clone()));
        let posts: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(db.clone()));
        let follows: Arc<dyn FollowRepository> = Arc::new(PostgresFollowRepository::new(db));
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        tracing::info!("Application state initialized");

        Ok(Self {
            accounts: AccountService::new(users, passwords),
            social: SocialService::new(follows.clone()),
            feed: FeedService::new(posts, follows),
        })
    }
}
