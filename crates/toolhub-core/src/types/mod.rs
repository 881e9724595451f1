//! Shared value types used across crate boundaries.

pub mod auth;
pub mod pagination;

pub use auth::{AuthContext, ForwardedCredentials};
pub use pagination::PageRequest;
