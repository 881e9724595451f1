//! Task services.

pub mod service;

pub use service::TaskService;
