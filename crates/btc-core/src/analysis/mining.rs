//! Halving math, block timing, and the mining pool reports.

use crate::model::{BlockSummary, MiningPools, PoolDetail, PoolHashrate};
use crate::shared::format::group_int;

const HALVING_INTERVAL: u64 = 210_000;
/// The fourth halving; the reward dropped to 3.125 BTC at this height.
const FOURTH_HALVING_HEIGHT: u64 = 840_000;
const TIMING_WINDOW: usize = 10;
const TOP_POOLS: usize = 10;

pub fn next_halving_block(tip_height: u64) -> u64 {
    HALVING_INTERVAL * (tip_height / HALVING_INTERVAL + 1)
}

pub fn blocks_to_halving(tip_height: u64) -> u64 {
    next_halving_block(tip_height) - tip_height
}

/// Whole days to the next halving at the ten-minute target.
pub fn days_to_halving(tip_height: u64) -> u64 {
    blocks_to_halving(tip_height) * 10 / (60 * 24)
}

pub fn current_reward(tip_height: u64) -> f64 {
    if tip_height < FOURTH_HALVING_HEIGHT {
        6.25
    } else {
        3.125
    }
}

/// Average minutes between the ten most recent blocks (newest first);
/// `None` with fewer than ten. Timestamps are miner-reported and can run
/// backwards, hence the signed math.
pub fn avg_block_time(blocks: &[BlockSummary]) -> Option<f64> {
    if blocks.len() < TIMING_WINDOW {
        return None;
    }
    let deltas: Vec<f64> = blocks[..TIMING_WINDOW]
        .windows(2)
        .map(|pair| (pair[0].timestamp as i64 - pair[1].timestamp as i64) as f64 / 60.0)
        .collect();
    Some(deltas.iter().sum::<f64>() / deltas.len() as f64)
}

/// Label for an average block interval against the ten-minute target.
pub fn timing_status(avg_minutes: f64) -> &'static str {
    if (9.0..=11.0).contains(&avg_minutes) {
        "ON TARGET"
    } else if avg_minutes > 11.0 {
        "SLOWER"
    } else {
        "FASTER"
    }
}

/// Top ten pools by blocks mined over the week, with each pool's share.
pub fn pool_ranking_report(pools: &MiningPools) -> String {
    let total = pools.total_blocks();
    let mut out = String::new();
    out.push_str("=== Top 10 Mining Pools (1 week) ===\n");
    for (i, pool) in pools.pools.iter().take(TOP_POOLS).enumerate() {
        let share = if total > 0 {
            pool.block_count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        out.push_str(&format!(
            "{}. {} - {} blocks ({share:.2}%)\n",
            i + 1,
            pool.name,
            group_int(pool.block_count)
        ));
    }
    out.push_str(&format!("\nTotal blocks mined: {}\n", group_int(total)));
    out
}

/// Top ten pools by average hashrate over three months.
pub fn pool_hashrates_report(hashrates: &[PoolHashrate]) -> String {
    let mut out = String::new();
    out.push_str("=== Mining Pool Hashrates (3 months) ===\n");
    for (i, pool) in hashrates.iter().take(TOP_POOLS).enumerate() {
        out.push_str(&format!(
            "{}. {} - {:.2} EH/s ({:.2}% of network)\n",
            i + 1,
            pool.pool_name,
            pool.avg_ehs(),
            pool.share_pct()
        ));
    }
    out
}

/// The leading pool over three months.
pub fn top_pool_report(pools: &MiningPools) -> String {
    let mut out = String::new();
    out.push_str("=== Leading Mining Pool (3 months) ===\n");
    let total = pools.total_blocks();
    match pools.top() {
        Some(leader) => {
            let dominance = if total > 0 {
                leader.block_count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            out.push_str(&format!("Name: {}\n", leader.name));
            out.push_str(&format!("Slug: {}\n", leader.slug));
            out.push_str(&format!(
                "Blocks mined: {}\n",
                group_int(leader.block_count)
            ));
            out.push_str(&format!("Dominance: {dominance:.2}%\n"));
            if !leader.link.is_empty() {
                out.push_str(&format!("Link: {}\n", leader.link));
            }
        }
        None => out.push_str("No pool data\n"),
    }
    out
}

/// Everything known about one pool: hashrate, lifetime blocks, share,
/// payout addresses.
pub fn pool_detail_report(detail: &PoolDetail) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Mining Pool: {} ===\n", detail.pool.name));
    if !detail.pool.link.is_empty() {
        out.push_str(&format!("Link: {}\n", detail.pool.link));
    }
    out.push_str(&format!("Hashrate: {:.2} EH/s\n", detail.hashrate() / 1e18));
    out.push_str(&format!(
        "Blocks mined (all time): {}\n",
        group_int(detail.block_count.all)
    ));
    out.push_str(&format!(
        "Block share (all time): {:.4}%\n",
        detail.block_share.all * 100.0
    ));
    if detail.pool.addresses.is_empty() {
        out.push_str("Payout addresses: none listed\n");
    } else {
        out.push_str("Payout addresses:\n");
        for addr in &detail.pool.addresses {
            out.push_str(&format!("- {addr}\n"));
        }
    }
    out
}

/// Macro view of mining: network conditions (hashrate, difficulty, halving
/// countdown, block timing) and the pool ecosystem over the last week.
pub fn mining_statistics_report(
    pools: Option<&MiningPools>,
    hashrate_gh: Option<f64>,
    difficulty: Option<f64>,
    tip_height: Option<u64>,
    recent_blocks: Option<&[BlockSummary]>,
) -> String {
    let mut out = String::new();
    out.push_str("=== Bitcoin Mining Statistics ===\n");

    out.push_str("\n--- Network ---\n");
    match hashrate_gh {
        Some(gh) => out.push_str(&format!("Hashrate: {:.2} EH/s\n", gh / 1e6)),
        None => out.push_str("Hashrate: unavailable\n"),
    }
    match difficulty {
        Some(d) => out.push_str(&format!("Difficulty: {:.2} T\n", d / 1e12)),
        None => out.push_str("Difficulty: unavailable\n"),
    }
    if let Some(tip) = tip_height {
        out.push_str(&format!("Block height: {}\n", group_int(tip)));
        out.push_str(&format!("Block reward: {} BTC\n", current_reward(tip)));
        out.push_str(&format!(
            "Next halving: block {} ({} blocks, ~{} days)\n",
            group_int(next_halving_block(tip)),
            group_int(blocks_to_halving(tip)),
            group_int(days_to_halving(tip))
        ));
    }
    match recent_blocks.and_then(avg_block_time) {
        Some(avg) => out.push_str(&format!(
            "Average block time: {avg:.1} min (target 10.0) - {}\n",
            timing_status(avg)
        )),
        None => out.push_str("Average block time: Unknown\n"),
    }

    out.push_str("\n--- Pools (1 week) ---\n");
    match pools {
        Some(pools) if !pools.pools.is_empty() => {
            let total = pools.total_blocks();
            let count = pools.pools.len();
            let average = total as f64 / count as f64;
            out.push_str(&format!("Active pools: {count}\n"));
            out.push_str(&format!("Total blocks: {}\n", group_int(total)));
            out.push_str(&format!("Average per pool: {average:.1} blocks\n"));
            if let Some(leader) = pools.top() {
                let dominance = if total > 0 {
                    leader.block_count as f64 / total as f64 * 100.0
                } else {
                    0.0
                };
                out.push_str(&format!(
                    "Leader: {} with {} blocks ({dominance:.2}%)\n",
                    leader.name,
                    group_int(leader.block_count)
                ));
                if average > 0.0 {
                    out.push_str(&format!(
                        "Leader-to-average ratio: {:.1}x\n",
                        leader.block_count as f64 / average
                    ));
                }
            }
            if let Some(smallest) = pools.pools.iter().map(|p| p.block_count).min() {
                out.push_str(&format!("Smallest pool: {} blocks\n", group_int(smallest)));
            }
        }
        _ => out.push_str("No pool data\n"),
    }
    out
}
