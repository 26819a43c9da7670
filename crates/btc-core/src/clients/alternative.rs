//! Client for the alternative.me API (Fear & Greed index and global stats).

use std::time::Duration;

use btc_transport::Fetcher;

use super::decode;
use crate::model::{AlternativeGlobal, FearGreed};

const DEFAULT_TTL: Duration = Duration::from_secs(30);

pub struct AlternativeClient {
    fetcher: Fetcher,
}

impl AlternativeClient {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Cross-exchange market totals.
    pub fn global_overview(&self) -> Option<AlternativeGlobal> {
        self.fetcher
            .fetch_with_ttl("/v2/global", DEFAULT_TTL)
            .and_then(|v| decode(v, "alternative global"))
    }

    /// Last week of Fear & Greed readings, newest first.
    pub fn fear_greed(&self) -> Option<FearGreed> {
        self.fetcher
            .fetch_with_ttl("/fng/?limit=7", DEFAULT_TTL)
            .and_then(|v| decode(v, "fear and greed"))
    }
}
