//! Domain entities - the core business objects.
//!
//! Follow edges are plain `(follower_id, followed_id)` pairs and live
//! entirely behind the follow repository port; they carry no attributes
//! worth an entity of their own.

mod post;

mod user;

pub use post::{MAX_BODY_LEN, Post};
pub use user::User;
