//! Fee, mempool, and chain-stat payloads.

use serde::Deserialize;

/// mempool.space `/v1/fees/recommended`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeeEstimates {
    pub fastest_fee: u64,
    pub half_hour_fee: u64,
    pub hour_fee: u64,
    pub economy_fee: u64,
    pub minimum_fee: u64,
}

impl FeeEstimates {
    /// Priority tiers in display order with their sat/vB rates.
    pub fn tiers(&self) -> [(&'static str, u64); 5] {
        [
            ("Fastest", self.fastest_fee),
            ("Half hour", self.half_hour_fee),
            ("Hour", self.hour_fee),
            ("Economy", self.economy_fee),
            ("Minimum", self.minimum_fee),
        ]
    }
}

/// mempool.space `/mempool`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MempoolInfo {
    pub count: u64,
    pub vsize: u64,
    pub total_fee: u64,
}

impl MempoolInfo {
    pub fn size_mb(&self) -> f64 {
        self.vsize as f64 / 1_000_000.0
    }
}

/// blockchain.info `/stats?format=json`, the slice used as a secondary
/// source when the dedicated endpoints are unavailable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChainStats {
    /// Network hashrate in GH/s.
    pub hash_rate: f64,
    pub difficulty: f64,
    pub market_price_usd: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_estimates_parse() {
        let body = r#"{"fastestFee":31,"halfHourFee":25,"hourFee":18,"economyFee":12,"minimumFee":6}"#;
        let fees: FeeEstimates = serde_json::from_str(body).unwrap();
        assert_eq!(fees.fastest_fee, 31);
        assert_eq!(fees.minimum_fee, 6);
        assert_eq!(fees.tiers()[1], ("Half hour", 25));
    }

    #[test]
    fn test_mempool_info_size_mb() {
        let body = r#"{"count":41234,"vsize":63401235,"total_fee":812345678,"fee_histogram":[]}"#;
        let info: MempoolInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.count, 41234);
        assert!((info.size_mb() - 63.401235).abs() < 1e-9);
    }

    #[test]
    fn test_chain_stats_tolerates_missing_fields() {
        let stats: ChainStats = serde_json::from_str(r#"{"hash_rate":714559063281.97}"#).unwrap();
        assert!(stats.hash_rate > 0.0);
        assert_eq!(stats.difficulty, 0.0);
    }
}
