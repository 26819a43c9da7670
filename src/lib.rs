//! Convenience re-exports for integration tests and downstream users.

pub use btc_core::{analysis, clients, model, Settings};
pub use btc_mcp::{ToolDispatcher, ToolResponse};
