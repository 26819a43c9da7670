//! Mining pool payloads from mempool.space.

use serde::Deserialize;

/// Response of `/v1/mining/pools/{period}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MiningPools {
    pub pools: Vec<PoolStat>,
    pub block_count: u64,
}

impl MiningPools {
    /// Blocks mined over the window. Some responses omit the top-level
    /// count, in which case the per-pool counts are summed.
    pub fn total_blocks(&self) -> u64 {
        if self.block_count > 0 {
            self.block_count
        } else {
            self.pools.iter().map(|p| p.block_count).sum()
        }
    }

    /// Leading pool over the window, if any blocks were mined.
    pub fn top(&self) -> Option<&PoolStat> {
        self.pools.first()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolStat {
    pub name: String,
    pub link: String,
    pub block_count: u64,
    pub rank: u64,
    pub slug: String,
}

/// Entry of `/v1/mining/hashrate/pools/{period}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolHashrate {
    pub pool_name: String,
    pub avg_hashrate: f64,
    pub share: f64,
}

impl PoolHashrate {
    /// Average hashrate in EH/s (the API reports H/s).
    pub fn avg_ehs(&self) -> f64 {
        self.avg_hashrate / 1e18
    }

    /// Share of the network as a percentage.
    pub fn share_pct(&self) -> f64 {
        self.share * 100.0
    }
}

/// Response of `/v1/mining/pool/{slug}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolDetail {
    pub pool: PoolInfo,
    pub block_count: PoolWindow,
    pub block_share: PoolShareWindow,
    pub reported_hashrate: Option<f64>,
    pub estimated_hashrate: Option<f64>,
}

impl PoolDetail {
    /// Reported hashrate when the pool publishes one, estimated otherwise.
    pub fn hashrate(&self) -> f64 {
        self.reported_hashrate
            .filter(|&h| h > 0.0)
            .or(self.estimated_hashrate)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PoolInfo {
    pub name: String,
    pub link: String,
    pub addresses: Vec<String>,
    pub slug: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PoolWindow {
    pub all: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PoolShareWindow {
    pub all: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_blocks_sums_when_count_missing() {
        let pools: MiningPools = serde_json::from_str(
            r#"{"pools": [
                {"name": "Foundry USA", "blockCount": 320, "rank": 1, "slug": "foundryusa"},
                {"name": "AntPool", "blockCount": 180, "rank": 2, "slug": "antpool"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(pools.total_blocks(), 500);
        assert_eq!(pools.top().unwrap().name, "Foundry USA");
    }

    #[test]
    fn test_total_blocks_prefers_payload_count() {
        let pools: MiningPools = serde_json::from_str(
            r#"{"blockCount": 1008, "pools": [{"name": "Foundry USA", "blockCount": 320}]}"#,
        )
        .unwrap();
        assert_eq!(pools.total_blocks(), 1008);
    }

    #[test]
    fn test_pool_hashrate_units() {
        let hr = PoolHashrate {
            pool_name: "Foundry USA".into(),
            avg_hashrate: 2.5e20,
            share: 0.3125,
        };
        assert!((hr.avg_ehs() - 250.0).abs() < 1e-9);
        assert!((hr.share_pct() - 31.25).abs() < 1e-9);
    }

    #[test]
    fn test_pool_detail_hashrate_fallback() {
        let detail: PoolDetail = serde_json::from_str(
            r#"{"pool": {"name": "AntPool", "slug": "antpool"},
                "reportedHashrate": 0.0,
                "estimatedHashrate": 1.7e20}"#,
        )
        .unwrap();
        assert_eq!(detail.hashrate(), 1.7e20);
    }
}
