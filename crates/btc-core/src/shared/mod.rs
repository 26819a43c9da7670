//! Shared types and helpers used by both the CLI and the MCP server.
//!
//! # Modules
//!
//! - [`response`] - Unified tool response envelope
//! - [`format`] - Number and timestamp formatting for reports

pub mod format;
pub mod response;

pub use response::{extract_input, ToolMeta, ToolResponse};
