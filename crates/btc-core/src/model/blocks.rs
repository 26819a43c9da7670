//! Block payloads from blockchain.info and mempool.space.

use serde::Deserialize;

/// blockchain.info `/latestblock`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LatestBlock {
    pub hash: String,
    pub time: u64,
    pub block_index: u64,
    pub height: u64,
}

/// One entry of mempool.space `/v1/blocks`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlockSummary {
    pub id: String,
    pub height: u64,
    pub timestamp: u64,
    pub tx_count: u64,
    pub size: u64,
    pub weight: u64,
    pub extras: BlockExtras,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockExtras {
    /// Coinbase reward in satoshis.
    pub reward: u64,
    pub total_fees: u64,
    pub avg_fee_rate: f64,
    pub pool: PoolRef,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PoolRef {
    pub slug: String,
}

impl BlockSummary {
    pub fn pool_slug(&self) -> &str {
        if self.extras.pool.slug.is_empty() {
            "Unknown"
        } else {
            &self.extras.pool.slug
        }
    }
}
