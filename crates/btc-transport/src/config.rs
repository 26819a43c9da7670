//! Per-fetcher configuration.

use std::time::Duration;

use btc_types::env_utils::{env_bool_or, env_duration_secs_or, env_var_or};

/// Immutable configuration for one [`Fetcher`](crate::Fetcher) instance.
///
/// Each of the five upstream APIs gets its own config (and thus its own
/// isolated cache). Timeouts are four independent knobs rather than one
/// blanket value: waiting on a slow-but-healthy body download and waiting on
/// a hung connection attempt deserve different bounds.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Upstream base URL; request paths are appended verbatim.
    pub base_url: String,
    /// DNS + TCP handshake bound.
    pub connect_timeout: Duration,
    /// Bound on waiting for response bytes.
    pub read_timeout: Duration,
    /// Bound on sending the request.
    pub write_timeout: Duration,
    /// Connection-pool acquisition bound. ureq's pool hands out connections
    /// without blocking, so this knob is inert with the default transport;
    /// it stays here for config parity and for transports that do block.
    pub pool_timeout: Duration,
    /// Default freshness window for cached responses.
    pub ttl: Duration,
    /// Retries after the initial attempt (total attempts = max_retries + 1).
    pub max_retries: u32,
    /// When false, every fetch goes to the network and nothing is stored.
    pub cache_enabled: bool,
    /// When false, the first failure is final.
    pub retry_enabled: bool,
}

impl FetcherConfig {
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
    pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;
    pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_POOL_TIMEOUT_SECS: u64 = 5;
    pub const DEFAULT_TTL_SECS: u64 = 60;
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    /// Config with built-in defaults for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(Self::DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(Self::DEFAULT_READ_TIMEOUT_SECS),
            write_timeout: Duration::from_secs(Self::DEFAULT_WRITE_TIMEOUT_SECS),
            pool_timeout: Duration::from_secs(Self::DEFAULT_POOL_TIMEOUT_SECS),
            ttl: Duration::from_secs(Self::DEFAULT_TTL_SECS),
            max_retries: Self::DEFAULT_MAX_RETRIES,
            cache_enabled: true,
            retry_enabled: true,
        }
    }

    /// Config resolved from `BTC_DATA_*` environment variables, falling back
    /// to the built-in defaults.
    pub fn from_env(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: env_duration_secs_or(
                "BTC_DATA_CONNECT_TIMEOUT_SECS",
                Self::DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
            read_timeout: env_duration_secs_or(
                "BTC_DATA_READ_TIMEOUT_SECS",
                Self::DEFAULT_READ_TIMEOUT_SECS,
            ),
            write_timeout: env_duration_secs_or(
                "BTC_DATA_WRITE_TIMEOUT_SECS",
                Self::DEFAULT_WRITE_TIMEOUT_SECS,
            ),
            pool_timeout: env_duration_secs_or(
                "BTC_DATA_POOL_TIMEOUT_SECS",
                Self::DEFAULT_POOL_TIMEOUT_SECS,
            ),
            ttl: env_duration_secs_or("BTC_DATA_CACHE_TTL_SECS", Self::DEFAULT_TTL_SECS),
            max_retries: env_var_or("BTC_DATA_MAX_RETRIES", Self::DEFAULT_MAX_RETRIES),
            cache_enabled: env_bool_or("BTC_DATA_ENABLE_CACHE", true),
            retry_enabled: env_bool_or("BTC_DATA_ENABLE_RETRY", true),
        }
    }

    /// Override the default freshness window.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Turn the cache on or off.
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Turn retries on or off.
    pub fn with_retry_enabled(mut self, enabled: bool) -> Self {
        self.retry_enabled = enabled;
        self
    }
}
