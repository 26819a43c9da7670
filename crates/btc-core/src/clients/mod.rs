//! One thin client per upstream API.
//!
//! A client owns its [`Fetcher`](btc_transport::Fetcher) and exposes typed
//! methods, each naming its path and freshness window. Payloads that fail to
//! deserialize degrade to `None` exactly like a failed fetch, with the
//! mismatch logged at debug level.

pub mod alternative;
pub mod blockchain_info;
pub mod coingecko;
pub mod hiro;
pub mod mempool;

pub use alternative::AlternativeClient;
pub use blockchain_info::BlockchainInfoClient;
pub use coingecko::CoinGeckoClient;
pub use hiro::HiroClient;
pub use mempool::MempoolClient;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Deserialize a fetched payload into its model type, `None` on mismatch.
fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(what, error = %err, "payload did not match the expected shape");
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use btc_transport::{Fetcher, FetcherConfig, HttpResponse, HttpTransport, TransportError};

    /// Transport that replays scripted bodies as 200s and records urls.
    pub struct ScriptedTransport {
        bodies: Mutex<VecDeque<String>>,
        urls: Mutex<Vec<String>>,
    }

    impl ScriptedTransport {
        pub fn new(bodies: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                bodies: Mutex::new(bodies.iter().map(|b| b.to_string()).collect()),
                urls: Mutex::new(Vec::new()),
            })
        }

        pub fn urls(&self) -> Vec<String> {
            self.urls.lock().unwrap().clone()
        }
    }

    impl HttpTransport for ScriptedTransport {
        fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            self.urls.lock().unwrap().push(url.to_string());
            match self.bodies.lock().unwrap().pop_front() {
                Some(body) => Ok(HttpResponse { status: 200, body }),
                None => Err(TransportError::Network("script exhausted".into())),
            }
        }
    }

    /// Fetcher against `https://api.test` backed by the scripted transport.
    pub fn scripted_fetcher(transport: Arc<ScriptedTransport>) -> Fetcher {
        Fetcher::with_transport(FetcherConfig::new("https://api.test"), transport)
    }
}
