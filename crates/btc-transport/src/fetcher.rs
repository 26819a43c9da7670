//! The Fetcher: one upstream, one cache, one retry budget.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::cache::FreshnessCache;
use crate::config::FetcherConfig;
use crate::retry::RetryPolicy;
use crate::transport::{HttpTransport, Sleeper, ThreadSleeper, TransportError, UreqTransport};

/// How a single fetch attempt failed. Internal to the fetch loop; callers
/// of [`Fetcher::fetch`] only ever see `None`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("upstream returned client error {status}")]
    ClientError { status: u16 },

    #[error("upstream returned server error {status}")]
    ServerError { status: u16 },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FetchError {
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::ClientError { .. } => false,
            FetchError::ServerError { .. } => true,
            FetchError::Transport(e) => e.is_retryable(),
        }
    }

    /// Stable label for log fields.
    pub fn class(&self) -> &'static str {
        match self {
            FetchError::ClientError { .. } => "client_error",
            FetchError::ServerError { .. } => "server_error",
            FetchError::Transport(TransportError::Timeout(_)) => "timeout",
            FetchError::Transport(TransportError::Network(_)) => "network",
            FetchError::Transport(TransportError::InvalidUrl(_)) => "invalid_url",
        }
    }

    fn is_caller_bug(&self) -> bool {
        matches!(self, FetchError::Transport(TransportError::InvalidUrl(_)))
    }
}

/// Blocking HTTP GET client for one upstream base URL, with TTL caching and
/// jittered retry on transient failure.
///
/// Safe to call from multiple threads; the cache is the only shared mutable
/// state and is internally locked. There is no coordination beyond that;
/// concurrent misses on the same path each go upstream (last write wins).
///
/// A single `fetch` can block for roughly
/// `(max_retries + 1) * read_timeout` plus the backoff sleeps in the worst
/// case; callers sit on whatever thread invoked them until then.
pub struct Fetcher {
    config: FetcherConfig,
    transport: Arc<dyn HttpTransport>,
    cache: FreshnessCache,
    retry: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
    rng: Mutex<StdRng>,
}

impl Fetcher {
    /// Production fetcher: ureq transport, thread sleeper, entropy-seeded
    /// jitter.
    pub fn new(config: FetcherConfig) -> Self {
        let transport = Arc::new(UreqTransport::new(&config));
        Self::with_transport(config, transport)
    }

    /// Custom transport, default sleeper and RNG.
    pub fn with_transport(config: FetcherConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_parts(
            config,
            transport,
            Arc::new(ThreadSleeper),
            StdRng::from_entropy(),
        )
    }

    /// Full injection: tests script the transport, record sleeps, and seed
    /// the jitter.
    pub fn with_parts(
        config: FetcherConfig,
        transport: Arc<dyn HttpTransport>,
        sleeper: Arc<dyn Sleeper>,
        rng: StdRng,
    ) -> Self {
        let retry = RetryPolicy::new(config.max_retries, config.retry_enabled);
        Self {
            config,
            transport,
            cache: FreshnessCache::new(),
            retry,
            sleeper,
            rng: Mutex::new(rng),
        }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch `base_url + path` with the instance-default ttl.
    pub fn fetch(&self, path: &str) -> Option<Value> {
        self.fetch_with_ttl(path, self.config.ttl)
    }

    /// Fetch `base_url + path`, serving a cached value younger than `ttl`
    /// when the cache is enabled.
    ///
    /// All upstream failures (4xx, 5xx after exhausted retries, timeouts,
    /// network errors) come back as `None`; the classification is logged
    /// here and only here.
    pub fn fetch_with_ttl(&self, path: &str, ttl: Duration) -> Option<Value> {
        let url = format!("{}{}", self.config.base_url, path);

        if self.config.cache_enabled {
            if let Some(value) = self.cache.lookup(&url, ttl) {
                debug!(url = %url, "cache hit");
                return Some(value);
            }
        }

        match self.execute(&url) {
            Ok(value) => {
                if self.config.cache_enabled {
                    self.cache.store(&url, value.clone());
                }
                Some(value)
            }
            Err(err) if err.is_caller_bug() => {
                error!(url = %url, error = %err, "refusing to fetch malformed url");
                None
            }
            Err(err) => {
                warn!(url = %url, class = err.class(), error = %err, "fetch failed");
                None
            }
        }
    }

    /// The attempt loop: up to `max_retries + 1` calls, sleeping with full
    /// jitter between retryable failures. Success and non-retryable
    /// failures short-circuit.
    fn execute(&self, url: &str) -> Result<Value, FetchError> {
        let budget = self.retry.budget();
        let mut attempt: u32 = 0;
        loop {
            let err = match self.transport.get(url) {
                Ok(response) if response.is_success() => return Ok(decode_body(response.body)),
                Ok(response) if response.is_server_error() => FetchError::ServerError {
                    status: response.status,
                },
                Ok(response) => {
                    return Err(FetchError::ClientError {
                        status: response.status,
                    })
                }
                Err(e) if e.is_retryable() => FetchError::Transport(e),
                Err(e) => return Err(FetchError::Transport(e)),
            };

            if attempt >= budget {
                return Err(err);
            }

            let delay = self.retry.backoff_delay(attempt, &mut *self.rng.lock());
            debug!(
                url,
                attempt,
                delay_secs = delay.as_secs(),
                class = err.class(),
                "transient failure, backing off"
            );
            self.sleeper.sleep(delay);
            attempt += 1;
        }
    }
}

/// Decode a 2xx body: JSON when it parses (objects, arrays, and the bare
/// numbers the legacy `/q/*` endpoints return), raw text otherwise.
fn decode_body(body: String) -> Value {
    match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => Value::String(body),
    }
}
