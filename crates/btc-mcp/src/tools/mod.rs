//! Tool surface of the server.
//!
//! - `inputs`: deserializable argument structs
//! - `handlers`: one method per tool on `ToolDispatcher`

pub(crate) mod handlers;
pub mod inputs;

/// Registry of every tool the server exposes: name and description, shared
/// by the MCP listing and the CLI `tools` command.
pub const TOOLS: &[(&str, &str)] = &[
    (
        "get_bitcoin_network_overview",
        "Network status: block height, hashrate, difficulty, and mined supply",
    ),
    (
        "get_bitcoin_fee_analysis",
        "Recommended fee rates per priority tier with USD cost and mempool congestion",
    ),
    (
        "get_bitcoin_price_usd",
        "Current bitcoin price in USD",
    ),
    (
        "get_bitcoin_market_data",
        "Full bitcoin market report: price history, records, supply, sentiment, signals",
    ),
    (
        "get_cryptomarket_overview",
        "Global crypto market: total capitalization, BTC dominance, fear and greed index",
    ),
    (
        "get_info_about_address",
        "Balance and activity of a bitcoin address (mempool.space view)",
    ),
    (
        "get_address_overview",
        "Compact balance and history of a bitcoin address (blockchain.info view)",
    ),
    (
        "get_transactions_of_address",
        "Recent transactions of a bitcoin address",
    ),
    (
        "get_bitcoin_transaction_infos",
        "Status, fees, and shape of a transaction by txid",
    ),
    (
        "get_transaction_input_output",
        "Inputs and outputs of a transaction with addresses and amounts",
    ),
    (
        "get_summary_of_latest_block",
        "Height, hash, and timestamp of the most recent block",
    ),
    (
        "get_block_hash_with_height",
        "Block hash for a given block height",
    ),
    (
        "get_10_latest_blocks_informations",
        "Details of the ten most recent blocks: size, transactions, rewards, miner",
    ),
    (
        "get_top_10_mining_pools_rank",
        "Top mining pools of the last week ranked by blocks mined",
    ),
    (
        "get_mining_pools_hashrates_3month",
        "Mining pool hashrates and network share over the last three months",
    ),
    (
        "get_top1_mining_pool",
        "The dominant mining pool of the last three months",
    ),
    (
        "get_mining_pool_by_slug",
        "Profile of one mining pool by its slug (e.g. foundryusa)",
    ),
    (
        "get_bitcoin_network_mining_pools_statistics",
        "Mining macro view: network conditions, halving countdown, pool distribution",
    ),
    (
        "get_ordinals_of_address",
        "Ordinal inscriptions held by a bitcoin address",
    ),
];

#[cfg(test)]
mod tests {
    use super::TOOLS;

    #[test]
    fn test_registry_names_are_unique() {
        let mut names: Vec<&str> = TOOLS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TOOLS.len());
    }

    #[test]
    fn test_registry_covers_nineteen_tools() {
        assert_eq!(TOOLS.len(), 19);
    }
}
