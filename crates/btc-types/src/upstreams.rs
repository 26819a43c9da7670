//! Upstream API endpoints and chain constants.
//!
//! The five third-party REST APIs this workspace reads from. Every base URL
//! can be overridden through an environment variable, which the tests and
//! self-hosted mirrors (e.g. a local mempool.space instance) rely on.

const MEMPOOL_API_URL: &str = "https://mempool.space/api";
const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";
const BLOCKCHAIN_INFO_API_URL: &str = "https://blockchain.info";
const HIRO_API_URL: &str = "https://api.hiro.so";
const ALTERNATIVE_API_URL: &str = "https://api.alternative.me";

/// Satoshis per bitcoin.
pub const SATOSHI: u64 = 100_000_000;

fn resolve(env_key: &str, default: &str) -> String {
    if let Ok(value) = std::env::var(env_key) {
        if !value.trim().is_empty() {
            return value;
        }
    }
    default.to_string()
}

/// mempool.space REST base URL (`BTC_DATA_MEMPOOL_URL` override).
pub fn mempool_url() -> String {
    resolve("BTC_DATA_MEMPOOL_URL", MEMPOOL_API_URL)
}

/// CoinGecko v3 base URL (`BTC_DATA_COINGECKO_URL` override).
pub fn coingecko_url() -> String {
    resolve("BTC_DATA_COINGECKO_URL", COINGECKO_API_URL)
}

/// blockchain.info base URL (`BTC_DATA_BLOCKCHAIN_URL` override).
pub fn blockchain_url() -> String {
    resolve("BTC_DATA_BLOCKCHAIN_URL", BLOCKCHAIN_INFO_API_URL)
}

/// Hiro (ordinals) base URL (`BTC_DATA_HIRO_URL` override).
pub fn hiro_url() -> String {
    resolve("BTC_DATA_HIRO_URL", HIRO_API_URL)
}

/// Alternative.me base URL (`BTC_DATA_ALTERNATIVE_URL` override).
pub fn alternative_url() -> String {
    resolve("BTC_DATA_ALTERNATIVE_URL", ALTERNATIVE_API_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        std::env::remove_var("BTC_DATA_MEMPOOL_URL");
        assert_eq!(mempool_url(), "https://mempool.space/api");
        assert_eq!(coingecko_url(), "https://api.coingecko.com/api/v3");
        assert_eq!(blockchain_url(), "https://blockchain.info");
    }

    #[test]
    fn test_env_override_and_blank_ignored() {
        std::env::set_var("BTC_DATA_HIRO_URL", "http://localhost:3999");
        assert_eq!(hiro_url(), "http://localhost:3999");
        std::env::set_var("BTC_DATA_HIRO_URL", "   ");
        assert_eq!(hiro_url(), "https://api.hiro.so");
        std::env::remove_var("BTC_DATA_HIRO_URL");
    }
}
