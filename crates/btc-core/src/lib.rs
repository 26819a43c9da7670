//! btc-core
//!
//! Everything between the HTTP layer and the tool surface: typed clients for
//! the five upstream APIs, immutable response models, and the pure derivation
//! functions that turn parsed payloads into reports.
//!
//! # Core Modules
//!
//! - [`clients`]: one thin client per upstream, each owning its Fetcher
//! - [`model`]: serde structs for the consumed slice of each payload
//! - [`analysis`]: supply math, market signals, fee/mining/address reports
//! - [`settings`]: environment-resolved configuration for all five upstreams
//! - [`shared`]: the `ToolResponse` envelope used by both CLI and MCP
//!
//! # Example
//!
//! ```ignore
//! use btc_core::clients::MempoolClient;
//! use btc_core::Settings;
//! use btc_transport::Fetcher;
//!
//! let settings = Settings::from_env();
//! let mempool = MempoolClient::new(Fetcher::new(settings.mempool.clone()));
//! if let Some(height) = mempool.tip_height() {
//!     println!("tip: {height}");
//! }
//! ```

pub mod analysis;
pub mod clients;
pub mod model;
pub mod settings;
pub mod shared;

pub use clients::{
    AlternativeClient, BlockchainInfoClient, CoinGeckoClient, HiroClient, MempoolClient,
};
pub use settings::Settings;
