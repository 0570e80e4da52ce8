//! Per-feature API services. Each wraps the shared [`ApiClient`](crate::ApiClient)
//! and mirrors the collection it manages into a local snapshot after every
//! fetch or mutation.

pub mod auth;
pub mod products;
pub mod sales;
pub mod suppliers;
