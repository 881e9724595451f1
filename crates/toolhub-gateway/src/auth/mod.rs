//! Credential handling for outgoing CMP requests.

pub mod headers;
pub mod token;
