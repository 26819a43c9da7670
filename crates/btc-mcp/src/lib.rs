pub mod logging;
pub mod paths;
pub mod state;
pub mod tools;

pub use paths::BtcDataPaths;
pub use state::{ToolDispatcher, ToolResponse};
