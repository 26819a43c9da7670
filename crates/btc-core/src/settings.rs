//! Workspace settings: one fetcher configuration per upstream.

use btc_transport::FetcherConfig;
use btc_types::upstreams;

/// Fetcher configuration for the five upstreams, resolved once at startup
/// and handed to whoever constructs the clients.
#[derive(Debug, Clone)]
pub struct Settings {
    pub mempool: FetcherConfig,
    pub coingecko: FetcherConfig,
    pub blockchain: FetcherConfig,
    pub alternative: FetcherConfig,
    pub hiro: FetcherConfig,
}

impl Settings {
    /// Base URLs from their `BTC_DATA_*_URL` overrides; shared knobs
    /// (timeouts, ttl, retry budget) from the rest of the `BTC_DATA_*`
    /// environment.
    pub fn from_env() -> Self {
        Self {
            mempool: FetcherConfig::from_env(upstreams::mempool_url()),
            coingecko: FetcherConfig::from_env(upstreams::coingecko_url()),
            blockchain: FetcherConfig::from_env(upstreams::blockchain_url()),
            alternative: FetcherConfig::from_env(upstreams::alternative_url()),
            hiro: FetcherConfig::from_env(upstreams::hiro_url()),
        }
    }
}
