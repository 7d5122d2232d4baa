//! Authentication extractor and error mapping.

pub mod auth;
pub mod error;
