//! Tool handler implementations.
//!
//! Each handler parses its arguments, calls the upstream client(s), and
//! renders a report. An upstream that returns nothing yields a successful
//! "no data" response; only caller mistakes produce errors.

use serde_json::Value;

use btc_core::analysis::{addresses, blocks, market, mining, network, ordinals, transactions};
use btc_core::shared::extract_input;

use super::inputs::{AddressInput, HeightInput, SlugInput, TxidInput};
use crate::state::{ToolDispatcher, ToolResponse};

fn no_data(what: &str) -> ToolResponse {
    ToolResponse::ok(Value::String(format!(
        "No data available for {what} right now"
    )))
}

fn report(text: String) -> ToolResponse {
    ToolResponse::ok(Value::String(text))
}

fn require(field: &str, value: &str) -> Result<String, ToolResponse> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolResponse::error(format!(
            "Field '{field}' must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

impl ToolDispatcher {
    pub(crate) fn network_overview(&self, _input: Value) -> ToolResponse {
        let Some(height) = self.mempool.tip_height() else {
            return no_data("the network overview");
        };
        let mut hashrate = self.blockchain.hashrate();
        let mut difficulty = self.blockchain.difficulty();
        if hashrate.is_none() || difficulty.is_none() {
            // /stats carries both figures and works when the /q endpoints
            // are flaky. Zeroes there mean the field was absent.
            if let Some(stats) = self.blockchain.stats() {
                hashrate = hashrate.or(Some(stats.hash_rate).filter(|h| *h > 0.0));
                difficulty = difficulty.or(Some(stats.difficulty).filter(|d| *d > 0.0));
            }
        }
        let overview = network::build_overview(height, hashrate, difficulty);
        ToolResponse::ok(serde_json::to_value(&overview).unwrap_or(Value::Null))
    }

    pub(crate) fn fee_analysis(&self, _input: Value) -> ToolResponse {
        let Some(fees) = self.mempool.recommended_fees() else {
            return no_data("fee estimates");
        };
        let mempool_info = self.mempool.mempool_info();
        let btc_price = self
            .coingecko
            .bitcoin_price()
            .map(|price| price.bitcoin.usd)
            .or_else(|| self.blockchain.stats().map(|stats| stats.market_price_usd))
            .filter(|usd| *usd > 0.0);
        report(transactions::fee_report(
            &fees,
            mempool_info.as_ref(),
            btc_price,
        ))
    }

    pub(crate) fn bitcoin_price(&self, _input: Value) -> ToolResponse {
        match self.coingecko.bitcoin_price() {
            Some(price) => report(market::price_report(&price)),
            None => no_data("the bitcoin price"),
        }
    }

    pub(crate) fn bitcoin_market_data(&self, _input: Value) -> ToolResponse {
        let Some(coin) = self.coingecko.bitcoin_market() else {
            return no_data("bitcoin market data");
        };
        let fng = self.alternative.fear_greed();
        report(market::market_report(&coin, fng.as_ref()))
    }

    pub(crate) fn cryptomarket_overview(&self, _input: Value) -> ToolResponse {
        let global = self.coingecko.global_market();
        let alt = self.alternative.global_overview();
        let fng = self.alternative.fear_greed();
        if global.is_none() && alt.is_none() && fng.is_none() {
            return no_data("the crypto market overview");
        }
        report(market::cryptomarket_report(
            global.as_ref(),
            alt.as_ref(),
            fng.as_ref(),
        ))
    }

    pub(crate) fn info_about_address(&self, input: Value) -> ToolResponse {
        let parsed: AddressInput = match extract_input(input) {
            Ok(v) => v,
            Err(e) => return e,
        };
        let address = match require("address", &parsed.address) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match self.mempool.address_info(&address) {
            Some(info) => report(addresses::address_report(&info)),
            None => no_data("this address"),
        }
    }

    pub(crate) fn address_overview(&self, input: Value) -> ToolResponse {
        let parsed: AddressInput = match extract_input(input) {
            Ok(v) => v,
            Err(e) => return e,
        };
        let address = match require("address", &parsed.address) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match self.blockchain.address_overview(&address) {
            Some(overview) => report(addresses::overview_report(&address, &overview)),
            None => no_data("this address"),
        }
    }

    pub(crate) fn transactions_of_address(&self, input: Value) -> ToolResponse {
        let parsed: AddressInput = match extract_input(input) {
            Ok(v) => v,
            Err(e) => return e,
        };
        let address = match require("address", &parsed.address) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match self.mempool.address_transactions(&address) {
            Some(txs) => report(transactions::address_txs_report(&address, &txs)),
            None => no_data("transactions of this address"),
        }
    }

    pub(crate) fn transaction_infos(&self, input: Value) -> ToolResponse {
        let parsed: TxidInput = match extract_input(input) {
            Ok(v) => v,
            Err(e) => return e,
        };
        let txid = match require("txid", &parsed.txid) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match self.mempool.transaction(&txid) {
            Some(tx) => {
                let tip = self.mempool.tip_height();
                report(transactions::tx_report(&tx, tip))
            }
            None => no_data("this transaction"),
        }
    }

    pub(crate) fn transaction_input_output(&self, input: Value) -> ToolResponse {
        let parsed: TxidInput = match extract_input(input) {
            Ok(v) => v,
            Err(e) => return e,
        };
        let txid = match require("txid", &parsed.txid) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match self.mempool.transaction(&txid) {
            Some(tx) => report(transactions::tx_in_out_report(&tx)),
            None => no_data("this transaction"),
        }
    }

    pub(crate) fn latest_block_summary(&self, _input: Value) -> ToolResponse {
        match self.blockchain.latest_block() {
            Some(block) => report(blocks::latest_block_report(&block)),
            None => no_data("the latest block"),
        }
    }

    pub(crate) fn block_hash_with_height(&self, input: Value) -> ToolResponse {
        let parsed: HeightInput = match extract_input(input) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match self.mempool.block_hash(parsed.height) {
            Some(hash) => report(blocks::block_hash_report(parsed.height, &hash)),
            None => no_data("this block"),
        }
    }

    pub(crate) fn latest_blocks(&self, _input: Value) -> ToolResponse {
        match self.mempool.recent_blocks() {
            Some(list) if !list.is_empty() => report(blocks::latest_blocks_report(&list)),
            _ => no_data("recent blocks"),
        }
    }

    pub(crate) fn top_mining_pools(&self, _input: Value) -> ToolResponse {
        match self.mempool.mining_pools("1w") {
            Some(pools) if !pools.pools.is_empty() => report(mining::pool_ranking_report(&pools)),
            _ => no_data("mining pool rankings"),
        }
    }

    pub(crate) fn pool_hashrates(&self, _input: Value) -> ToolResponse {
        match self.mempool.pool_hashrates("3m") {
            Some(rates) if !rates.is_empty() => report(mining::pool_hashrates_report(&rates)),
            _ => no_data("pool hashrates"),
        }
    }

    pub(crate) fn top_mining_pool(&self, _input: Value) -> ToolResponse {
        match self.mempool.mining_pools("3m") {
            Some(pools) if !pools.pools.is_empty() => report(mining::top_pool_report(&pools)),
            _ => no_data("the leading mining pool"),
        }
    }

    pub(crate) fn mining_pool_by_slug(&self, input: Value) -> ToolResponse {
        let parsed: SlugInput = match extract_input(input) {
            Ok(v) => v,
            Err(e) => return e,
        };
        let slug = match require("slug", &parsed.slug) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match self.mempool.pool_by_slug(&slug) {
            Some(detail) => report(mining::pool_detail_report(&detail)),
            None => no_data("this mining pool"),
        }
    }

    pub(crate) fn mining_statistics(&self, _input: Value) -> ToolResponse {
        let pools = self.mempool.mining_pools("1w");
        let hashrate = self.blockchain.hashrate();
        let difficulty = self.blockchain.difficulty();
        let tip = self.mempool.tip_height();
        let recent = self.mempool.recent_blocks();
        if pools.is_none() && hashrate.is_none() && tip.is_none() {
            return no_data("mining statistics");
        }
        report(mining::mining_statistics_report(
            pools.as_ref(),
            hashrate,
            difficulty,
            tip,
            recent.as_deref(),
        ))
    }

    pub(crate) fn ordinals_of_address(&self, input: Value) -> ToolResponse {
        let parsed: AddressInput = match extract_input(input) {
            Ok(v) => v,
            Err(e) => return e,
        };
        let address = match require("address", &parsed.address) {
            Ok(v) => v,
            Err(e) => return e,
        };
        match self.hiro.inscriptions(&address) {
            Some(page) => report(ordinals::inscriptions_report(&address, &page)),
            None => no_data("ordinals of this address"),
        }
    }
}
