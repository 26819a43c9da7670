//! Address payloads from mempool.space and blockchain.info.

use btc_types::SATOSHI;
use serde::Deserialize;

/// Funded/spent output tallies as mempool.space reports them per address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TxoStats {
    pub funded_txo_count: u64,
    pub funded_txo_sum: u64,
    pub spent_txo_count: u64,
    pub spent_txo_sum: u64,
    pub tx_count: u64,
}

impl TxoStats {
    /// Net balance in satoshis; pending spends can drive this negative.
    pub fn balance_sats(&self) -> i64 {
        self.funded_txo_sum as i64 - self.spent_txo_sum as i64
    }
}

/// mempool.space `/address/{addr}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressInfo {
    pub address: String,
    pub chain_stats: TxoStats,
    pub mempool_stats: TxoStats,
}

impl AddressInfo {
    pub fn confirmed_balance_btc(&self) -> f64 {
        self.chain_stats.balance_sats() as f64 / SATOSHI as f64
    }

    pub fn pending_sats(&self) -> i64 {
        self.mempool_stats.balance_sats()
    }

    pub fn activity_status(&self) -> &'static str {
        if self.mempool_stats.tx_count > 0 {
            "Active (pending)"
        } else if self.chain_stats.tx_count > 0 {
            "Active"
        } else {
            "Unused"
        }
    }
}

/// blockchain.info `/address/{addr}`; all amounts in satoshis.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressOverview {
    pub final_balance: u64,
    pub total_received: u64,
    pub total_sent: u64,
    pub n_tx: u64,
}
