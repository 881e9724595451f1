//! Custom Axum extractors.

pub mod tool_call;

pub use tool_call::ToolCall;
