//! Client for the mempool.space REST API.

use std::time::Duration;

use btc_transport::Fetcher;

use super::decode;
use crate::model::{
    AddressInfo, BlockSummary, FeeEstimates, MempoolInfo, MiningPools, PoolDetail, PoolHashrate,
    Transaction,
};

/// The tip moves every few minutes; keep it fresher than the rest.
const TIP_TTL: Duration = Duration::from_secs(10);
const DEFAULT_TTL: Duration = Duration::from_secs(30);
/// Address lookups are heavy upstream and change slowly.
const ADDRESS_TTL: Duration = Duration::from_secs(60);
/// A mined block's hash never changes.
const BLOCK_HASH_TTL: Duration = Duration::from_secs(60);

pub struct MempoolClient {
    fetcher: Fetcher,
}

impl MempoolClient {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Height of the chain tip.
    pub fn tip_height(&self) -> Option<u64> {
        self.fetcher
            .fetch_with_ttl("/blocks/tip/height", TIP_TTL)
            .and_then(|v| decode(v, "tip height"))
    }

    /// Hash of the block at the given height.
    pub fn block_hash(&self, height: u64) -> Option<String> {
        self.fetcher
            .fetch_with_ttl(&format!("/block-height/{height}"), BLOCK_HASH_TTL)
            .and_then(|v| decode(v, "block hash"))
    }

    /// Recommended fee rates per confirmation target.
    pub fn recommended_fees(&self) -> Option<FeeEstimates> {
        self.fetcher
            .fetch_with_ttl("/v1/fees/recommended", DEFAULT_TTL)
            .and_then(|v| decode(v, "recommended fees"))
    }

    /// Aggregate size and fee totals of the mempool.
    pub fn mempool_info(&self) -> Option<MempoolInfo> {
        self.fetcher
            .fetch_with_ttl("/mempool", DEFAULT_TTL)
            .and_then(|v| decode(v, "mempool info"))
    }

    /// Confirmed and pending totals for an address.
    pub fn address_info(&self, address: &str) -> Option<AddressInfo> {
        self.fetcher
            .fetch_with_ttl(&format!("/address/{address}"), ADDRESS_TTL)
            .and_then(|v| decode(v, "address info"))
    }

    /// Most recent transactions touching an address.
    pub fn address_transactions(&self, address: &str) -> Option<Vec<Transaction>> {
        self.fetcher
            .fetch_with_ttl(&format!("/address/{address}/txs"), DEFAULT_TTL)
            .and_then(|v| decode(v, "address transactions"))
    }

    pub fn transaction(&self, txid: &str) -> Option<Transaction> {
        self.fetcher
            .fetch_with_ttl(&format!("/tx/{txid}"), DEFAULT_TTL)
            .and_then(|v| decode(v, "transaction"))
    }

    /// The ten most recent blocks, newest first.
    pub fn recent_blocks(&self) -> Option<Vec<BlockSummary>> {
        self.fetcher
            .fetch_with_ttl("/v1/blocks", DEFAULT_TTL)
            .and_then(|v| decode(v, "recent blocks"))
    }

    /// Pool ranking over a period such as `"1w"` or `"3m"`.
    pub fn mining_pools(&self, period: &str) -> Option<MiningPools> {
        self.fetcher
            .fetch_with_ttl(&format!("/v1/mining/pools/{period}"), DEFAULT_TTL)
            .and_then(|v| decode(v, "mining pools"))
    }

    /// Average hashrate per pool over a period.
    pub fn pool_hashrates(&self, period: &str) -> Option<Vec<PoolHashrate>> {
        self.fetcher
            .fetch_with_ttl(&format!("/v1/mining/hashrate/pools/{period}"), DEFAULT_TTL)
            .and_then(|v| decode(v, "pool hashrates"))
    }

    pub fn pool_by_slug(&self, slug: &str) -> Option<PoolDetail> {
        self.fetcher
            .fetch_with_ttl(&format!("/v1/mining/pool/{slug}"), DEFAULT_TTL)
            .and_then(|v| decode(v, "pool detail"))
    }
}
