//! # toolhub-api
//!
//! Tool dispatch shell for the CMP tool server, built on Axum.
//!
//! Serves the discovery document, routes `POST /tools/{name}` invocations to
//! the services, resolves the caller's credentials, and maps errors onto HTTP
//! responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod tools;

pub use app::build_app;
pub use state::AppState;
