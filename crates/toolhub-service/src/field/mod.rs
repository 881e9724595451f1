//! Metadata field services.

pub mod service;

pub use service::FieldService;
