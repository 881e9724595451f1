//! # toolhub-service
//!
//! Business logic behind the tools: paginated collection, folder tree
//! assembly, asset validation, and the thin field/task/asset passthroughs.

pub mod asset;
pub mod collector;
pub mod context;
pub mod endpoints;
pub mod field;
pub mod folder;
pub mod task;

#[cfg(test)]
pub(crate) mod testing;
