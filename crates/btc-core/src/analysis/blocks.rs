//! Block reports.

use crate::model::{BlockSummary, LatestBlock};
use crate::shared::format::{btc_from_sats, group_int, utc_datetime};

/// Tip summary as blockchain.info sees it.
pub fn latest_block_report(block: &LatestBlock) -> String {
    let mut out = String::new();
    out.push_str("=== Latest Block ===\n");
    out.push_str(&format!("Height: {}\n", group_int(block.height)));
    out.push_str(&format!("Hash: {}\n", block.hash));
    out.push_str(&format!("Time: {}\n", utc_datetime(block.time as i64)));
    out.push_str(&format!("Block index: {}\n", group_int(block.block_index)));
    out
}

pub fn block_hash_report(height: u64, hash: &str) -> String {
    format!("=== Block {} ===\nHash: {hash}\n", group_int(height))
}

/// The most recent blocks (newest first) with their economics.
pub fn latest_blocks_report(blocks: &[BlockSummary]) -> String {
    let mut out = String::new();
    out.push_str("=== Latest Blocks ===\n");
    for block in blocks.iter().take(10) {
        out.push_str(&format!(
            "\nBlock {} ({})\n",
            group_int(block.height),
            utc_datetime(block.timestamp as i64)
        ));
        out.push_str(&format!("Hash: {}\n", block.id));
        out.push_str(&format!(
            "Transactions: {}, size {} B, weight {} WU\n",
            group_int(block.tx_count),
            group_int(block.size),
            group_int(block.weight)
        ));
        out.push_str(&format!(
            "Reward: {:.8} BTC (fees {:.8} BTC, avg {:.1} sat/vB)\n",
            btc_from_sats(block.extras.reward),
            btc_from_sats(block.extras.total_fees),
            block.extras.avg_fee_rate
        ));
        out.push_str(&format!("Mined by: {}\n", block.pool_slug()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_block_report() {
        let block: LatestBlock = serde_json::from_str(
            r#"{"hash": "0000000000000000000a1b2c", "time": 1700000000,
                "block_index": 900001, "height": 900001}"#,
        )
        .unwrap();
        let report = latest_block_report(&block);
        assert!(report.contains("Height: 900,001\n"));
        assert!(report.contains("Hash: 0000000000000000000a1b2c\n"));
        assert!(report.contains("Time: 2023-11-14 22:13:20 UTC\n"));
    }

    #[test]
    fn test_block_hash_report() {
        let report = block_hash_report(900_000, "0000000000000000000deadbeef");
        assert_eq!(
            report,
            "=== Block 900,000 ===\nHash: 0000000000000000000deadbeef\n"
        );
    }

    #[test]
    fn test_latest_blocks_report() {
        let blocks: Vec<BlockSummary> = serde_json::from_str(
            r#"[{
                "id": "00000000000000000001c0c1",
                "height": 901234,
                "timestamp": 1700000000,
                "tx_count": 3121,
                "size": 1570000,
                "weight": 3993000,
                "extras": {
                    "reward": 318750000,
                    "totalFees": 6250000,
                    "avgFeeRate": 4.0,
                    "pool": {"slug": "foundryusa"}
                }
            }]"#,
        )
        .unwrap();
        let report = latest_blocks_report(&blocks);
        assert!(report.contains("Block 901,234 (2023-11-14 22:13:20 UTC)\n"));
        assert!(report.contains("Transactions: 3,121, size 1,570,000 B, weight 3,993,000 WU\n"));
        assert!(report.contains("Reward: 3.18750000 BTC (fees 0.06250000 BTC, avg 4.0 sat/vB)\n"));
        assert!(report.contains("Mined by: foundryusa\n"));
    }
}
