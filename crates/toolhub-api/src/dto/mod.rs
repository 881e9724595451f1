//! Data transfer objects for tool requests and responses.

pub mod request;
pub mod response;
