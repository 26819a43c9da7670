//! Address classification and reports.

use crate::model::{AddressInfo, AddressOverview};
use crate::shared::format::{btc_from_sats, group_int, group_signed};

/// Script family implied by the address prefix.
pub fn address_category(address: &str) -> &'static str {
    if address.starts_with("bc1p") {
        "Taproot"
    } else if address.starts_with("bc1q") {
        "SegWit"
    } else if address.starts_with('1') {
        "Legacy (P2PKH)"
    } else if address.starts_with('3') {
        "P2SH"
    } else {
        "Unknown"
    }
}

/// Balance and activity report from the mempool.space view of an address.
pub fn address_report(info: &AddressInfo) -> String {
    let mut out = String::new();
    out.push_str("=== Bitcoin Address ===\n");
    out.push_str(&format!("Address: {}\n", info.address));
    out.push_str(&format!(
        "Category: {}\n",
        address_category(&info.address)
    ));

    out.push_str("\n--- Balance ---\n");
    out.push_str(&format!(
        "Confirmed: {:.8} BTC\n",
        info.confirmed_balance_btc()
    ));
    out.push_str(&format!(
        "Pending: {} sats\n",
        group_signed(info.pending_sats())
    ));

    out.push_str("\n--- Activity ---\n");
    out.push_str(&format!("Status: {}\n", info.activity_status()));
    out.push_str(&format!(
        "Confirmed transactions: {}\n",
        group_int(info.chain_stats.tx_count)
    ));
    out.push_str(&format!(
        "Mempool transactions: {}\n",
        group_int(info.mempool_stats.tx_count)
    ));
    out.push_str(&format!(
        "Received: {} outputs ({:.8} BTC)\n",
        group_int(info.chain_stats.funded_txo_count),
        btc_from_sats(info.chain_stats.funded_txo_sum)
    ));
    out.push_str(&format!(
        "Spent: {} outputs ({:.8} BTC)\n",
        group_int(info.chain_stats.spent_txo_count),
        btc_from_sats(info.chain_stats.spent_txo_sum)
    ));
    out
}

/// Lifetime totals from the blockchain.info view of an address.
pub fn overview_report(address: &str, overview: &AddressOverview) -> String {
    let mut out = String::new();
    out.push_str("=== Bitcoin Address Overview ===\n");
    out.push_str(&format!("Address: {address}\n"));
    out.push_str(&format!(
        "Balance: {:.8} BTC\n",
        btc_from_sats(overview.final_balance)
    ));

    out.push_str("\n--- History ---\n");
    out.push_str(&format!(
        "Total received: {:.8} BTC\n",
        btc_from_sats(overview.total_received)
    ));
    out.push_str(&format!(
        "Total sent: {:.8} BTC\n",
        btc_from_sats(overview.total_sent)
    ));
    out.push_str(&format!("Transactions: {}\n", group_int(overview.n_tx)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_categories() {
        assert_eq!(address_category("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"), "Legacy (P2PKH)");
        assert_eq!(address_category("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy"), "P2SH");
        assert_eq!(address_category("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq"), "SegWit");
        assert_eq!(
            address_category("bc1p5d7rjq7g6rdk2yhzks9smlaqtedr4dekq08ge8ztwac72sfr9rusxg3297"),
            "Taproot"
        );
        assert_eq!(address_category("tb1qtestnet"), "Unknown");
    }

    #[test]
    fn test_address_report() {
        let info: AddressInfo = serde_json::from_str(
            r#"{
                "address": "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq",
                "chain_stats": {
                    "funded_txo_count": 4, "funded_txo_sum": 300000000,
                    "spent_txo_count": 1, "spent_txo_sum": 50000000,
                    "tx_count": 5
                },
                "mempool_stats": {
                    "funded_txo_count": 0, "funded_txo_sum": 0,
                    "spent_txo_count": 0, "spent_txo_sum": 0,
                    "tx_count": 0
                }
            }"#,
        )
        .unwrap();

        let report = address_report(&info);
        assert!(report.contains("Category: SegWit\n"));
        assert!(report.contains("Confirmed: 2.50000000 BTC\n"));
        assert!(report.contains("Pending: 0 sats\n"));
        assert!(report.contains("Status: Active\n"));
        assert!(report.contains("Received: 4 outputs (3.00000000 BTC)\n"));
        assert!(report.contains("Spent: 1 outputs (0.50000000 BTC)\n"));
    }

    #[test]
    fn test_overview_report() {
        let overview: AddressOverview = serde_json::from_str(
            r#"{"final_balance": 150000000, "total_received": 500000000,
                "total_sent": 350000000, "n_tx": 42}"#,
        )
        .unwrap();

        let report = overview_report("1BitcoinEaterAddressDontSendf59kuE", &overview);
        assert!(report.contains("Balance: 1.50000000 BTC\n"));
        assert!(report.contains("Total received: 5.00000000 BTC\n"));
        assert!(report.contains("Total sent: 3.50000000 BTC\n"));
        assert!(report.contains("Transactions: 42\n"));
    }
}
