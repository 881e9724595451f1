//! # toolhub-entity
//!
//! Domain models exchanged with the DAM platform and returned by the tools.
//! Remote records keep every attribute they arrive with: the typed fields
//! are the ones the services read, the rest travel in a flattened side map.

pub mod asset;
pub mod field;
pub mod folder;
