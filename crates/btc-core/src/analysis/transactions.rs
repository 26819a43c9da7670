//! Fee, congestion, and transaction reports.

use btc_types::SATOSHI;

use crate::model::{FeeEstimates, MempoolInfo, Transaction};
use crate::shared::format::{btc_from_sats, group_int, utc_datetime};

/// vbyte size used to turn a sat/vB rate into a per-transaction cost.
const TYPICAL_TX_VBYTES: u64 = 250;

/// Listing cap for the per-address transaction report.
const MAX_LISTED_TXS: usize = 10;

/// Congestion bands over the mempool's virtual size.
pub fn congestion_level(mempool_vsize: u64) -> &'static str {
    if mempool_vsize > 100_000_000 {
        "SEVERE"
    } else if mempool_vsize > 50_000_000 {
        "MODERATE"
    } else {
        "NORMAL"
    }
}

/// Fee tiers with the USD cost of a typical transaction, plus mempool
/// congestion when available.
pub fn fee_report(
    fees: &FeeEstimates,
    mempool: Option<&MempoolInfo>,
    btc_price: Option<f64>,
) -> String {
    let mut out = String::new();
    out.push_str("=== Bitcoin Fee Analysis ===\n");
    for (label, rate) in fees.tiers() {
        match btc_price {
            Some(price) => {
                let usd = rate as f64 * TYPICAL_TX_VBYTES as f64 / SATOSHI as f64 * price;
                out.push_str(&format!("{label}: {rate} sat/vB (~${usd:.2})\n"));
            }
            None => out.push_str(&format!("{label}: {rate} sat/vB\n")),
        }
    }
    if btc_price.is_some() {
        out.push_str(&format!(
            "USD costs assume a {TYPICAL_TX_VBYTES} vB transaction\n"
        ));
    } else {
        out.push_str("USD costs unavailable (no price source)\n");
    }

    if let Some(info) = mempool {
        out.push_str(&format!(
            "\nMempool: {} pending transactions, {:.1} MB\n",
            group_int(info.count),
            info.size_mb()
        ));
        out.push_str(&format!("Congestion: {}\n", congestion_level(info.vsize)));
    }
    out
}

/// Status, size, fee, and RBF summary of one transaction.
pub fn tx_report(tx: &Transaction, tip_height: Option<u64>) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Transaction {} ===\n", tx.txid));
    if tx.status.confirmed {
        let confirmations = tx.confirmations(tip_height);
        match (tx.status.block_height, tx.status.block_time) {
            (Some(height), Some(time)) => out.push_str(&format!(
                "Status: confirmed ({} confirmations), block {} at {}\n",
                group_int(confirmations),
                group_int(height),
                utc_datetime(time as i64)
            )),
            _ => out.push_str(&format!(
                "Status: confirmed ({} confirmations)\n",
                group_int(confirmations)
            )),
        }
    } else {
        out.push_str("Status: unconfirmed\n");
    }
    out.push_str(&format!(
        "Size: {} B, virtual {} vB, weight {} WU\n",
        group_int(tx.size),
        group_int(tx.vsize_vb()),
        group_int(tx.weight)
    ));
    out.push_str(&format!(
        "Fee: {} sats ({:.2} sat/vB)\n",
        group_int(tx.fee),
        tx.fee_rate()
    ));
    out.push_str(&format!(
        "Inputs: {}, outputs: {}\n",
        tx.vin.len(),
        tx.vout.len()
    ));
    out.push_str(&format!(
        "RBF: {}\n",
        if tx.signals_rbf() {
            "signaled"
        } else {
            "not signaled"
        }
    ));
    out
}

/// Every input's previous output and every output, in sats and BTC.
pub fn tx_in_out_report(tx: &Transaction) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Inputs and Outputs of {} ===\n", tx.txid));

    out.push_str(&format!("\n--- Inputs ({}) ---\n", tx.vin.len()));
    for (i, input) in tx.vin.iter().enumerate() {
        match &input.prevout {
            Some(prev) => {
                let addr = prev.scriptpubkey_address.as_deref().unwrap_or("(no address)");
                out.push_str(&format!(
                    "{}. {} - {} sats ({:.8} BTC)\n",
                    i + 1,
                    addr,
                    group_int(prev.value),
                    btc_from_sats(prev.value)
                ));
            }
            None => out.push_str(&format!("{}. (coinbase)\n", i + 1)),
        }
    }

    out.push_str(&format!("\n--- Outputs ({}) ---\n", tx.vout.len()));
    for (i, output) in tx.vout.iter().enumerate() {
        let addr = output
            .scriptpubkey_address
            .as_deref()
            .unwrap_or("(no address)");
        out.push_str(&format!(
            "{}. {} - {} sats ({:.8} BTC)\n",
            i + 1,
            addr,
            group_int(output.value),
            btc_from_sats(output.value)
        ));
    }
    out
}

/// The most recent transactions touching an address, capped at ten.
pub fn address_txs_report(address: &str, txs: &[Transaction]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Recent Transactions of {address} ===\n"));
    if txs.is_empty() {
        out.push_str("No transactions found\n");
        return out;
    }

    out.push_str(&format!(
        "Showing {} of {}\n\n",
        txs.len().min(MAX_LISTED_TXS),
        txs.len()
    ));
    for (i, tx) in txs.iter().take(MAX_LISTED_TXS).enumerate() {
        let status = if tx.status.confirmed {
            match tx.status.block_height {
                Some(height) => format!("confirmed in block {}", group_int(height)),
                None => "confirmed".to_string(),
            }
        } else {
            "pending".to_string()
        };
        out.push_str(&format!(
            "{}. {} - {}, fee {} sats, {} vB\n",
            i + 1,
            tx.txid,
            status,
            group_int(tx.fee),
            group_int(tx.vsize_vb())
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TxStatus;

    #[test]
    fn test_congestion_bands() {
        assert_eq!(congestion_level(10_000_000), "NORMAL");
        assert_eq!(congestion_level(50_000_000), "NORMAL");
        assert_eq!(congestion_level(50_000_001), "MODERATE");
        assert_eq!(congestion_level(100_000_000), "MODERATE");
        assert_eq!(congestion_level(100_000_001), "SEVERE");
    }

    #[test]
    fn test_fee_report_with_price() {
        let fees: FeeEstimates = serde_json::from_str(
            r#"{"fastestFee": 12, "halfHourFee": 9, "hourFee": 7, "economyFee": 4, "minimumFee": 1}"#,
        )
        .unwrap();
        let mempool: MempoolInfo =
            serde_json::from_str(r#"{"count": 42000, "vsize": 62000000, "total_fee": 1}"#).unwrap();

        let report = fee_report(&fees, Some(&mempool), Some(112_000.0));
        // 12 sat/vB * 250 vB = 3000 sats = $3.36 at 112k.
        assert!(report.contains("Fastest: 12 sat/vB (~$3.36)\n"));
        assert!(report.contains("Mempool: 42,000 pending transactions, 62.0 MB\n"));
        assert!(report.contains("Congestion: MODERATE\n"));
    }

    #[test]
    fn test_fee_report_without_price() {
        let fees = FeeEstimates::default();
        let report = fee_report(&fees, None, None);
        assert!(!report.contains('$'));
        assert!(report.contains("USD costs unavailable"));
        assert!(!report.contains("Mempool:"));
    }

    fn sample_tx() -> Transaction {
        serde_json::from_str(
            r#"{
                "txid": "ab12",
                "size": 280,
                "weight": 1120,
                "fee": 5600,
                "vin": [
                    {"txid": "cd34", "vout": 0, "sequence": 4294967295,
                     "prevout": {"scriptpubkey_address": "bc1qsource", "value": 2000000}}
                ],
                "vout": [
                    {"scriptpubkey_address": "bc1qdest", "value": 1994400}
                ],
                "status": {"confirmed": true, "block_height": 900000, "block_time": 1755000000}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_tx_report_confirmed() {
        let report = tx_report(&sample_tx(), Some(900_004));
        assert!(report.contains("Status: confirmed (5 confirmations), block 900,000 at "));
        assert!(report.contains("Size: 280 B, virtual 280 vB, weight 1,120 WU\n"));
        assert!(report.contains("Fee: 5,600 sats (20.00 sat/vB)\n"));
        assert!(report.contains("RBF: not signaled\n"));
    }

    #[test]
    fn test_tx_in_out_report() {
        let report = tx_in_out_report(&sample_tx());
        assert!(report.contains("--- Inputs (1) ---"));
        assert!(report.contains("1. bc1qsource - 2,000,000 sats (0.02000000 BTC)\n"));
        assert!(report.contains("--- Outputs (1) ---"));
        assert!(report.contains("1. bc1qdest - 1,994,400 sats (0.01994400 BTC)\n"));
    }

    #[test]
    fn test_address_txs_report_caps_at_ten() {
        let mut txs = Vec::new();
        for i in 0..12 {
            txs.push(Transaction {
                txid: format!("tx{i}"),
                fee: 100,
                size: 140,
                status: TxStatus {
                    confirmed: false,
                    ..TxStatus::default()
                },
                ..Transaction::default()
            });
        }
        let report = address_txs_report("bc1qexample", &txs);
        assert!(report.contains("Showing 10 of 12\n"));
        assert!(report.contains("10. tx9 - pending"));
        assert!(!report.contains("11. tx10"));
    }

    #[test]
    fn test_address_txs_report_empty() {
        let report = address_txs_report("bc1qexample", &[]);
        assert!(report.contains("No transactions found\n"));
    }
}
