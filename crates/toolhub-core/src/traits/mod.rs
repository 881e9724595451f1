//! Core traits defined in `toolhub-core` and implemented by other crates.

pub mod fetcher;
pub mod gateway;

pub use fetcher::{AssetFetcher, AssetProbe};
pub use gateway::CmpGateway;
