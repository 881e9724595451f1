//! HTTP request handlers.

pub mod discovery;
pub mod health;
pub mod tools;
