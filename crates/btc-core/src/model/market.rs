//! Market payloads from CoinGecko and alternative.me.

use std::collections::HashMap;

use serde::Deserialize;

/// CoinGecko wraps `/global` in a `data` envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GlobalMarketEnvelope {
    pub data: GlobalMarket,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GlobalMarket {
    pub active_cryptocurrencies: u64,
    pub upcoming_icos: u64,
    pub ongoing_icos: u64,
    pub ended_icos: u64,
    pub markets: u64,
    pub total_market_cap: HashMap<String, f64>,
    pub total_volume: HashMap<String, f64>,
    pub market_cap_percentage: HashMap<String, f64>,
    pub market_cap_change_percentage_24h_usd: f64,
}

impl GlobalMarket {
    pub fn btc_dominance(&self) -> f64 {
        self.market_cap_percentage.get("btc").copied().unwrap_or(0.0)
    }

    pub fn eth_dominance(&self) -> f64 {
        self.market_cap_percentage.get("eth").copied().unwrap_or(0.0)
    }

    pub fn total_cap_usd(&self) -> f64 {
        self.total_market_cap.get("usd").copied().unwrap_or(0.0)
    }

    pub fn total_volume_usd(&self) -> f64 {
        self.total_volume.get("usd").copied().unwrap_or(0.0)
    }
}

/// Response of `/simple/price?ids=bitcoin&vs_currencies=usd`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimplePrice {
    pub bitcoin: PriceQuote,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PriceQuote {
    pub usd: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UsdValue {
    pub usd: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UsdText {
    pub usd: String,
}

/// Response of `/coins/bitcoin`, restricted to the fields the reports use.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CoinMarket {
    pub market_cap_rank: u64,
    pub block_time_in_minutes: f64,
    pub hashing_algorithm: Option<String>,
    pub genesis_date: Option<String>,
    pub sentiment_votes_up_percentage: f64,
    pub sentiment_votes_down_percentage: f64,
    pub links: CoinLinks,
    pub market_data: MarketData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CoinLinks {
    pub whitepaper: Option<String>,
    pub repos_url: ReposUrl,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReposUrl {
    pub github: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarketData {
    pub current_price: UsdValue,
    pub market_cap: UsdValue,
    pub total_volume: UsdValue,
    pub high_24h: UsdValue,
    pub low_24h: UsdValue,
    pub ath: UsdValue,
    pub ath_change_percentage: UsdValue,
    pub ath_date: UsdText,
    pub atl: UsdValue,
    pub atl_change_percentage: UsdValue,
    pub atl_date: UsdText,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub price_change_percentage_1h_in_currency: UsdValue,
    pub price_change_percentage_24h_in_currency: UsdValue,
    pub price_change_percentage_7d_in_currency: UsdValue,
    pub price_change_percentage_14d_in_currency: UsdValue,
    pub price_change_percentage_30d_in_currency: UsdValue,
    pub price_change_percentage_60d_in_currency: UsdValue,
    pub price_change_percentage_200d_in_currency: UsdValue,
    pub price_change_percentage_1y_in_currency: UsdValue,
}

impl CoinMarket {
    pub fn price_usd(&self) -> f64 {
        self.market_data.current_price.usd
    }

    pub fn change_24h(&self) -> f64 {
        self.market_data.price_change_percentage_24h_in_currency.usd
    }

    /// Price implied before a percentage move, `None` for a -100% move.
    pub fn price_before(&self, pct_change: f64) -> Option<f64> {
        let denom = 1.0 + pct_change / 100.0;
        if denom.abs() < 1e-9 {
            None
        } else {
            Some(self.price_usd() / denom)
        }
    }

    /// Percentage change over each tracked horizon.
    pub fn change_horizons(&self) -> [(&'static str, f64); 8] {
        let d = &self.market_data;
        [
            ("1h", d.price_change_percentage_1h_in_currency.usd),
            ("24h", d.price_change_percentage_24h_in_currency.usd),
            ("7d", d.price_change_percentage_7d_in_currency.usd),
            ("14d", d.price_change_percentage_14d_in_currency.usd),
            ("30d", d.price_change_percentage_30d_in_currency.usd),
            ("60d", d.price_change_percentage_60d_in_currency.usd),
            ("200d", d.price_change_percentage_200d_in_currency.usd),
            ("1y", d.price_change_percentage_1y_in_currency.usd),
        ]
    }
}

/// Response of alternative.me `/fng/?limit=7`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FearGreed {
    pub data: Vec<FngEntry>,
}

impl FearGreed {
    /// Most recent reading; the API returns newest first.
    pub fn latest(&self) -> Option<&FngEntry> {
        self.data.first()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FngEntry {
    pub value: String,
    pub value_classification: String,
    pub timestamp: String,
}

impl FngEntry {
    /// Index value, zero when the string is not a number.
    pub fn value_u32(&self) -> u32 {
        self.value.parse().unwrap_or(0)
    }
}

/// Response of alternative.me `/v2/global`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlternativeGlobal {
    pub data: AltGlobalData,
}

impl AlternativeGlobal {
    pub fn usd_volume_24h(&self) -> f64 {
        self.data
            .quotes
            .get("USD")
            .map(|q| q.total_volume_24h)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AltGlobalData {
    pub active_cryptocurrencies: u64,
    pub active_markets: u64,
    pub quotes: HashMap<String, AltQuote>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AltQuote {
    pub total_market_cap: f64,
    pub total_volume_24h: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_market_lookups() {
        let global: GlobalMarketEnvelope = serde_json::from_str(
            r#"{"data": {
                "active_cryptocurrencies": 17500,
                "markets": 1300,
                "total_market_cap": {"usd": 4.1e12, "eur": 3.5e12},
                "total_volume": {"usd": 1.8e11},
                "market_cap_percentage": {"btc": 57.3, "eth": 11.8},
                "market_cap_change_percentage_24h_usd": -1.4
            }}"#,
        )
        .unwrap();
        let data = global.data;
        assert!((data.btc_dominance() - 57.3).abs() < 1e-9);
        assert!((data.eth_dominance() - 11.8).abs() < 1e-9);
        assert_eq!(data.total_cap_usd(), 4.1e12);
        assert_eq!(data.total_volume_usd(), 1.8e11);
    }

    #[test]
    fn test_price_before_guards_total_loss() {
        let market = CoinMarket {
            market_data: MarketData {
                current_price: UsdValue { usd: 110_000.0 },
                ..MarketData::default()
            },
            ..CoinMarket::default()
        };
        let before = market.price_before(10.0).unwrap();
        assert!((before - 100_000.0).abs() < 1e-6);
        assert!(market.price_before(-100.0).is_none());
    }

    #[test]
    fn test_change_horizons_order() {
        let horizons = CoinMarket::default().change_horizons();
        assert_eq!(horizons[0].0, "1h");
        assert_eq!(horizons[7].0, "1y");
    }

    #[test]
    fn test_fng_latest_and_parse() {
        let fng: FearGreed = serde_json::from_str(
            r#"{"data": [
                {"value": "72", "value_classification": "Greed", "timestamp": "1755732000"},
                {"value": "68", "value_classification": "Greed", "timestamp": "1755645600"}
            ]}"#,
        )
        .unwrap();
        let latest = fng.latest().unwrap();
        assert_eq!(latest.value_u32(), 72);
        assert_eq!(latest.value_classification, "Greed");
    }

    #[test]
    fn test_alternative_usd_volume() {
        let global: AlternativeGlobal = serde_json::from_str(
            r#"{"data": {
                "active_cryptocurrencies": 9000,
                "active_markets": 800,
                "quotes": {"USD": {"total_market_cap": 4.0e12, "total_volume_24h": 2.1e11}}
            }}"#,
        )
        .unwrap();
        assert_eq!(global.usd_volume_24h(), 2.1e11);
    }
}
