//! Client for the blockchain.info API.
//!
//! The legacy `/q/*` endpoints return bare numbers in the response body;
//! the fetch layer already parses those into JSON numbers.

use std::time::Duration;

use btc_transport::Fetcher;

use super::decode;
use crate::model::{AddressOverview, ChainStats, LatestBlock};

const DEFAULT_TTL: Duration = Duration::from_secs(30);
const ADDRESS_TTL: Duration = Duration::from_secs(60);

pub struct BlockchainInfoClient {
    fetcher: Fetcher,
}

impl BlockchainInfoClient {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Estimated network hashrate in GH/s.
    pub fn hashrate(&self) -> Option<f64> {
        self.fetcher
            .fetch_with_ttl("/q/hashrate", DEFAULT_TTL)
            .and_then(|v| decode(v, "hashrate"))
    }

    /// Current difficulty target.
    pub fn difficulty(&self) -> Option<f64> {
        self.fetcher
            .fetch_with_ttl("/q/getdifficulty", DEFAULT_TTL)
            .and_then(|v| decode(v, "difficulty"))
    }

    /// Rolled-up chain statistics; used when the dedicated endpoints above
    /// are unavailable.
    pub fn stats(&self) -> Option<ChainStats> {
        self.fetcher
            .fetch_with_ttl("/stats?format=json", DEFAULT_TTL)
            .and_then(|v| decode(v, "chain stats"))
    }

    /// Lifetime totals for an address.
    pub fn address_overview(&self, address: &str) -> Option<AddressOverview> {
        self.fetcher
            .fetch_with_ttl(&format!("/address/{address}"), ADDRESS_TTL)
            .and_then(|v| decode(v, "address overview"))
    }

    pub fn latest_block(&self) -> Option<LatestBlock> {
        self.fetcher
            .fetch_with_ttl("/latestblock", DEFAULT_TTL)
            .and_then(|v| decode(v, "latest block"))
    }
}
