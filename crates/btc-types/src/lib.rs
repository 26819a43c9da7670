//! Shared foundation for the btc-data workspace.
//!
//! This crate holds the pieces every other crate needs without pulling in
//! their dependencies:
//!
//! - [`env_utils`]: typed environment variable parsing with defaults
//! - [`upstreams`]: the five upstream API base URLs and chain constants

pub mod env_utils;
pub mod upstreams;

pub use upstreams::{
    alternative_url, blockchain_url, coingecko_url, hiro_url, mempool_url, SATOSHI,
};
