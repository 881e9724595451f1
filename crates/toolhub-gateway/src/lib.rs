//! # toolhub-gateway
//!
//! HTTP implementations of the core gateway traits:
//!
//! - [`providers::cmp::HttpCmpGateway`] talks to the CMP REST API with either
//!   forwarded caller credentials or a cached client-credentials token.
//! - [`providers::public::HttpAssetFetcher`] probes and downloads public asset URLs.

pub mod auth;
pub mod error;
pub mod providers;

pub use auth::token::TokenCache;
pub use providers::cmp::HttpCmpGateway;
pub use providers::public::HttpAssetFetcher;
