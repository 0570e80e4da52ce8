//! `ventaspro-core`: shared identifiers, errors and field validation.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod error;
pub mod id;
pub mod validate;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
