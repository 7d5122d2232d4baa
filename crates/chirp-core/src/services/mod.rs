//! Application services built on the ports.

mod accounts;
mod feed;
mod social;

pub use accounts::AccountService;
pub use feed::FeedService;
pub use social::SocialService;
