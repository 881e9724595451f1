//! Folder listing and tree services.

pub mod service;
pub mod tree;

pub use service::FolderService;
pub use tree::{FlatTree, LinkFollower, assemble_flat};
