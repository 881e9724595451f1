//! Asset services: folder moves, spreadsheet reading, and URL validation.

pub mod service;
pub mod spreadsheet;
pub mod validator;

pub use service::AssetService;
pub use validator::AssetValidator;
