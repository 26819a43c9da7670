//! Dispatcher state shared by the MCP server and the CLI.
//!
//! `ToolDispatcher` owns one client per upstream API plus the call logger.
//! Dispatch is synchronous: every handler blocks on its HTTP calls, and the
//! async MCP layer wraps `dispatch` in a blocking task.

use chrono::Utc;
use serde_json::Value;
use std::time::Instant;
use uuid::Uuid;

use btc_core::{
    AlternativeClient, BlockchainInfoClient, CoinGeckoClient, HiroClient, MempoolClient, Settings,
};
use btc_transport::Fetcher;

use crate::logging::{redact_sensitive, LogConfig, LogRecord, McpLogger};

pub use btc_core::shared::{ToolMeta, ToolResponse};

pub struct ToolDispatcher {
    pub(crate) mempool: MempoolClient,
    pub(crate) coingecko: CoinGeckoClient,
    pub(crate) blockchain: BlockchainInfoClient,
    pub(crate) alternative: AlternativeClient,
    pub(crate) hiro: HiroClient,
    logger: McpLogger,
    settings: Settings,
}

impl ToolDispatcher {
    /// Dispatcher with configuration resolved from the environment.
    pub fn new() -> Self {
        Self::with_settings(Settings::from_env())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            mempool: MempoolClient::new(Fetcher::new(settings.mempool.clone())),
            coingecko: CoinGeckoClient::new(Fetcher::new(settings.coingecko.clone())),
            blockchain: BlockchainInfoClient::new(Fetcher::new(settings.blockchain.clone())),
            alternative: AlternativeClient::new(Fetcher::new(settings.alternative.clone())),
            hiro: HiroClient::new(Fetcher::new(settings.hiro.clone())),
            logger: McpLogger::new(LogConfig::default()),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn logger(&self) -> &McpLogger {
        &self.logger
    }

    /// Run one tool call end to end: strip host metadata, route to the
    /// handler, stamp the duration, and append to the call log.
    pub fn dispatch(&self, tool: &str, input: Value) -> ToolResponse {
        let (meta, clean_input) = extract_meta(&input);
        let request_id = meta
            .request_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let start = Instant::now();

        let result = self.dispatch_inner(tool, clean_input.clone());

        let duration_ms = start.elapsed().as_millis();
        let result = result.with_duration(duration_ms as u64);
        let record = LogRecord {
            ts: Utc::now().to_rfc3339(),
            request_id,
            tool: tool.to_string(),
            input: redact_sensitive(&clean_input),
            output: redact_sensitive(&serde_json::to_value(&result).unwrap_or(Value::Null)),
            duration_ms,
            success: result.success,
            error: result.error.clone(),
            cache_hit: result.cache_hit,
            llm_reason: meta.reason.clone(),
            tags: meta.tags.clone(),
        };
        let _ = self.logger.log_tool_call(&record);

        result
    }

    fn dispatch_inner(&self, tool: &str, input: Value) -> ToolResponse {
        match tool {
            "get_bitcoin_network_overview" => self.network_overview(input),
            "get_bitcoin_fee_analysis" => self.fee_analysis(input),
            "get_bitcoin_price_usd" => self.bitcoin_price(input),
            "get_bitcoin_market_data" => self.bitcoin_market_data(input),
            "get_cryptomarket_overview" => self.cryptomarket_overview(input),
            "get_info_about_address" => self.info_about_address(input),
            "get_address_overview" => self.address_overview(input),
            "get_transactions_of_address" => self.transactions_of_address(input),
            "get_bitcoin_transaction_infos" => self.transaction_infos(input),
            "get_transaction_input_output" => self.transaction_input_output(input),
            "get_summary_of_latest_block" => self.latest_block_summary(input),
            "get_block_hash_with_height" => self.block_hash_with_height(input),
            "get_10_latest_blocks_informations" => self.latest_blocks(input),
            "get_top_10_mining_pools_rank" => self.top_mining_pools(input),
            "get_mining_pools_hashrates_3month" => self.pool_hashrates(input),
            "get_top1_mining_pool" => self.top_mining_pool(input),
            "get_mining_pool_by_slug" => self.mining_pool_by_slug(input),
            "get_bitcoin_network_mining_pools_statistics" => self.mining_statistics(input),
            "get_ordinals_of_address" => self.ordinals_of_address(input),
            _ => ToolResponse::error(format!("Unknown tool: {}", tool)),
        }
    }
}

fn extract_meta(input: &Value) -> (ToolMeta, Value) {
    let mut meta = ToolMeta::default();
    if let Value::Object(map) = input {
        if let Some(Value::Object(meta_map)) = map.get("_meta") {
            if let Some(Value::String(reason)) = meta_map.get("reason") {
                meta.reason = Some(reason.clone());
            }
            if let Some(Value::String(req)) = meta_map.get("request_id") {
                meta.request_id = Some(req.clone());
            }
            if let Some(Value::Array(tags)) = meta_map.get("tags") {
                let parsed: Vec<String> = tags
                    .iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect();
                if !parsed.is_empty() {
                    meta.tags = Some(parsed);
                }
            }
        }

        let mut cleaned = map.clone();
        cleaned.remove("_meta");
        return (meta, Value::Object(cleaned));
    }
    (meta, input.clone())
}
