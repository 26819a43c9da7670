//! Supply schedule and the network overview object.

use serde::Serialize;

const TOTAL_SUPPLY_BTC: f64 = 21_000_000.0;
const BLOCKS_PER_ERA: u64 = 210_000;

/// Circulating supply in BTC implied by a block height: full eras at their
/// reward, halving each era from 50 BTC, plus the partial current era.
pub fn circulating_supply(height: u64) -> f64 {
    let completed_eras = height / BLOCKS_PER_ERA;
    let mut supply = 0.0;
    let mut reward = 50.0;
    for _ in 0..completed_eras {
        supply += BLOCKS_PER_ERA as f64 * reward;
        reward /= 2.0;
    }
    supply + (height % BLOCKS_PER_ERA) as f64 * reward
}

/// Aggregated network state; the overview tool returns this serialized.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkOverview {
    pub block_height: u64,
    /// EH/s, absent when no hashrate source answered.
    pub hashrate_eh: Option<f64>,
    /// Trillions, absent when no difficulty source answered.
    pub difficulty_t: Option<f64>,
    pub circulating_supply: f64,
    pub remaining_supply: f64,
    pub percent_mined: f64,
}

/// Build the overview from the tip height plus optional hashrate (GH/s)
/// and difficulty readings.
pub fn build_overview(
    height: u64,
    hashrate_gh: Option<f64>,
    difficulty: Option<f64>,
) -> NetworkOverview {
    let supply = circulating_supply(height);
    NetworkOverview {
        block_height: height,
        hashrate_eh: hashrate_gh.map(|h| h / 1e6),
        difficulty_t: difficulty.map(|d| d / 1e12),
        circulating_supply: supply,
        remaining_supply: TOTAL_SUPPLY_BTC - supply,
        percent_mined: supply / TOTAL_SUPPLY_BTC * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supply_at_era_boundaries() {
        assert_eq!(circulating_supply(0), 0.0);
        assert_eq!(circulating_supply(210_000), 10_500_000.0);
        assert_eq!(circulating_supply(420_000), 15_750_000.0);
        // Four full eras: 10.5M + 5.25M + 2.625M + 1.3125M.
        assert_eq!(circulating_supply(840_000), 19_687_500.0);
    }

    #[test]
    fn test_supply_mid_era() {
        // One block into the second era mints 25 BTC.
        assert_eq!(circulating_supply(210_001), 10_500_025.0);
    }

    #[test]
    fn test_overview_units() {
        let overview = build_overview(840_000, Some(750_000_000.0), Some(1.29e14));
        assert_eq!(overview.hashrate_eh, Some(750.0));
        assert_eq!(overview.difficulty_t, Some(129.0));
        assert!((overview.percent_mined - 93.75).abs() < 1e-9);
        assert_eq!(overview.remaining_supply, 1_312_500.0);
    }

    #[test]
    fn test_overview_without_secondary_sources() {
        let overview = build_overview(900_000, None, None);
        assert!(overview.hashrate_eh.is_none());
        assert!(overview.difficulty_t.is_none());
        assert!(overview.circulating_supply > 19_687_500.0);
    }
}
