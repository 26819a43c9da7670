//! Client for the CoinGecko v3 API.

use std::time::Duration;

use btc_transport::Fetcher;

use super::decode;
use crate::model::market::GlobalMarketEnvelope;
use crate::model::{CoinMarket, GlobalMarket, SimplePrice};

const DEFAULT_TTL: Duration = Duration::from_secs(30);
/// The full coin document is large; let it ride a little longer.
const COIN_TTL: Duration = Duration::from_secs(45);

const COIN_PATH: &str = "/coins/bitcoin?localization=false&tickers=false&market_data=true&community_data=false&developer_data=false&sparkline=false";

pub struct CoinGeckoClient {
    fetcher: Fetcher,
}

impl CoinGeckoClient {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Market totals across all tracked coins. CoinGecko wraps the payload
    /// in a `data` envelope; callers get the unwrapped body.
    pub fn global_market(&self) -> Option<GlobalMarket> {
        self.fetcher
            .fetch_with_ttl("/global", DEFAULT_TTL)
            .and_then(|v| decode::<GlobalMarketEnvelope>(v, "global market"))
            .map(|envelope| envelope.data)
    }

    /// Spot BTC/USD price.
    pub fn bitcoin_price(&self) -> Option<SimplePrice> {
        self.fetcher
            .fetch_with_ttl("/simple/price?ids=bitcoin&vs_currencies=usd", DEFAULT_TTL)
            .and_then(|v| decode(v, "simple price"))
    }

    /// The full bitcoin coin document, market data included.
    pub fn bitcoin_market(&self) -> Option<CoinMarket> {
        self.fetcher
            .fetch_with_ttl(COIN_PATH, COIN_TTL)
            .and_then(|v| decode(v, "coin market"))
    }
}
