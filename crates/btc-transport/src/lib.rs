//! HTTP fetch layer for the btc-data workspace.
//!
//! One upstream API = one [`Fetcher`]. A `Fetcher` wraps a base URL and
//! exposes a single blocking operation, [`Fetcher::fetch`], which composes:
//!
//! - [`transport`]: the actual HTTP GET ([`UreqTransport`]) behind the
//!   [`HttpTransport`] trait so tests can script responses
//! - [`cache`]: a [`FreshnessCache`] that answers repeat requests within a
//!   time-to-live window without touching the network
//! - [`retry`]: a [`RetryPolicy`] that re-attempts transient failures with
//!   full-jitter exponential backoff
//!
//! All upstream failures collapse to `None` at the `fetch` boundary; the
//! classification (client error, server error, timeout, network) is logged
//! there and nowhere else.
//!
//! # Example
//!
//! ```ignore
//! use btc_transport::{Fetcher, FetcherConfig};
//!
//! let fetcher = Fetcher::new(FetcherConfig::new("https://mempool.space/api"));
//! if let Some(height) = fetcher.fetch("/blocks/tip/height") {
//!     println!("tip: {height}");
//! }
//! ```

pub mod cache;
pub mod config;
pub mod fetcher;
pub mod retry;
pub mod transport;

// Re-export main types for convenience
pub use cache::FreshnessCache;
pub use config::FetcherConfig;
pub use fetcher::{FetchError, Fetcher};
pub use retry::RetryPolicy;
pub use transport::{
    HttpResponse, HttpTransport, Sleeper, ThreadSleeper, TransportError, UreqTransport,
};
