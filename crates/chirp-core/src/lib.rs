//! # Chirp Core
//!
//! The domain layer of the Chirp microblog.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod services;

pub use error::DomainError;

#[cfg(test)]
pub(crate) mod test_support;
