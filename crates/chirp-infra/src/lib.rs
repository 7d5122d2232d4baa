//! # Chirp Infrastructure
//!
//! Concrete implementations of the ports defined in `chirp-core`.
//! This crate contains the PostgreSQL repositories and the auth services.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `auth` - JWT + Argon2 authentication

#[cfg(feature = "postgres")]
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

#[cfg(feature = "postgres")]
pub use database::{
    DatabaseConfig, PostgresFollowRepository, PostgresPostRepository, PostgresUserRepository,
    connect,
};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
