//! # toolhub-core
//!
//! Core crate for the CMP tool hub. Contains the remote gateway traits,
//! configuration schemas, pagination and auth context types, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other toolhub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
