//! Market sentiment derivations and the market reports.

use crate::model::{AlternativeGlobal, CoinMarket, FearGreed, GlobalMarket, SimplePrice};
use crate::shared::format::{group_f64, group_int};

/// 24h price trend, neutral inside the +/-2% band.
pub fn trend_label(change_24h: f64) -> &'static str {
    if change_24h > 2.0 {
        "BULLISH"
    } else if change_24h < -2.0 {
        "BEARISH"
    } else {
        "NEUTRAL"
    }
}

/// Reading of the Fear & Greed index value.
pub fn interpret_fear_greed(value: u32) -> &'static str {
    if value >= 75 {
        "Extreme Greed - Consider taking profits"
    } else if value >= 55 {
        "Greed - Bullish sentiment dominates"
    } else if value >= 45 {
        "Neutral - Market indecision"
    } else if value >= 25 {
        "Fear - Bearish sentiment present"
    } else {
        "Extreme Fear - Potential buying opportunity"
    }
}

/// Market phase from BTC dominance: above 55% capital sits in BTC, below
/// 45% it has rotated out.
pub fn dominance_phase(btc_dominance: f64) -> &'static str {
    if btc_dominance > 55.0 {
        "BTC SEASON"
    } else if btc_dominance < 45.0 {
        "ALTCOIN SEASON"
    } else {
        "BALANCED"
    }
}

/// Heuristic signals from momentum, sentiment, and relative volume.
pub fn trading_signals(change_24h: f64, fng: u32, volume: f64, market_cap: f64) -> Vec<String> {
    let mut signals = Vec::new();

    if change_24h > 5.0 {
        signals.push(format!("Strong upward momentum (+{change_24h:.1}%)"));
    } else if change_24h < -5.0 {
        signals.push(format!("Strong downward pressure ({change_24h:.1}%)"));
    } else {
        signals.push(format!("Consolidation phase ({change_24h:+.1}%)"));
    }

    if fng > 75 && change_24h > 3.0 {
        signals.push("Overheated - Risk of correction".to_string());
    } else if fng < 25 && change_24h < -3.0 {
        signals.push("Oversold - Potential reversal zone".to_string());
    }

    if market_cap > 0.0 {
        let volume_ratio = volume / market_cap * 100.0;
        if volume_ratio > 5.0 {
            signals.push(format!(
                "High trading activity ({volume_ratio:.1}% of market cap)"
            ));
        } else {
            signals.push(format!(
                "Low trading activity ({volume_ratio:.1}% of market cap)"
            ));
        }
    }

    signals
}

pub fn price_report(price: &SimplePrice) -> String {
    format!(
        "=== Bitcoin Price ===\n1 BTC = ${} USD\n",
        group_f64(price.bitcoin.usd, 2)
    )
}

/// The full bitcoin market report: price, change horizons with the implied
/// earlier price, records, supply, coin profile, and sentiment.
pub fn market_report(market: &CoinMarket, fng: Option<&FearGreed>) -> String {
    let data = &market.market_data;
    let mut out = String::new();

    out.push_str("=== Bitcoin Market Data ===\n");
    out.push_str(&format!(
        "Price: ${} (rank #{})\n",
        group_f64(market.price_usd(), 2),
        market.market_cap_rank
    ));
    out.push_str(&format!(
        "Market cap: ${}\n",
        group_f64(data.market_cap.usd, 0)
    ));
    out.push_str(&format!(
        "24h volume: ${}\n",
        group_f64(data.total_volume.usd, 0)
    ));
    out.push_str(&format!(
        "24h range: ${} - ${}\n",
        group_f64(data.low_24h.usd, 2),
        group_f64(data.high_24h.usd, 2)
    ));
    out.push_str(&format!("Trend: {}\n", trend_label(market.change_24h())));

    out.push_str("\n--- Price changes ---\n");
    for (label, pct) in market.change_horizons() {
        match market.price_before(pct) {
            Some(before) => out.push_str(&format!(
                "{label}: {pct:+.2}% (from ${})\n",
                group_f64(before, 2)
            )),
            None => out.push_str(&format!("{label}: {pct:+.2}%\n")),
        }
    }

    out.push_str("\n--- Records ---\n");
    out.push_str(&format!(
        "ATH: ${} ({:+.2}%) on {}\n",
        group_f64(data.ath.usd, 2),
        data.ath_change_percentage.usd,
        data.ath_date.usd
    ));
    out.push_str(&format!(
        "ATL: ${} ({:+.2}%) on {}\n",
        group_f64(data.atl.usd, 2),
        data.atl_change_percentage.usd,
        data.atl_date.usd
    ));

    out.push_str("\n--- Supply ---\n");
    if let Some(total) = data.total_supply {
        out.push_str(&format!("Total supply: {} BTC\n", group_f64(total, 0)));
    }
    if let Some(max) = data.max_supply {
        out.push_str(&format!("Max supply: {} BTC\n", group_f64(max, 0)));
    }

    out.push_str("\n--- Profile ---\n");
    out.push_str(&format!(
        "Block time: {} minutes\n",
        market.block_time_in_minutes
    ));
    if let Some(algo) = &market.hashing_algorithm {
        out.push_str(&format!("Algorithm: {algo}\n"));
    }
    if let Some(genesis) = &market.genesis_date {
        out.push_str(&format!("Genesis date: {genesis}\n"));
    }
    if let Some(paper) = &market.links.whitepaper {
        out.push_str(&format!("Whitepaper: {paper}\n"));
    }
    if let Some(repo) = market.links.repos_url.github.first() {
        out.push_str(&format!("Source: {repo}\n"));
    }

    out.push_str("\n--- Sentiment ---\n");
    out.push_str(&format!(
        "Community votes: {:.1}% up / {:.1}% down\n",
        market.sentiment_votes_up_percentage, market.sentiment_votes_down_percentage
    ));
    let latest = fng.and_then(|f| f.latest());
    if let Some(entry) = latest {
        out.push_str(&format!(
            "Fear & Greed: {} ({})\n",
            entry.value, entry.value_classification
        ));
        out.push_str(&format!("{}\n", interpret_fear_greed(entry.value_u32())));
    }

    // A missing index reads as neutral for signalling.
    let fng_value = latest.map(|e| e.value_u32()).unwrap_or(50);
    out.push_str("\n--- Signals ---\n");
    for signal in trading_signals(
        market.change_24h(),
        fng_value,
        data.total_volume.usd,
        data.market_cap.usd,
    ) {
        out.push_str(&format!("- {signal}\n"));
    }

    out
}

/// Whole-market report across all tracked coins.
pub fn cryptomarket_report(
    global: Option<&GlobalMarket>,
    alt: Option<&AlternativeGlobal>,
    fng: Option<&FearGreed>,
) -> String {
    let mut out = String::new();
    out.push_str("=== Crypto Market Overview ===\n");

    if let Some(global) = global {
        out.push_str(&format!(
            "Active cryptocurrencies: {}\n",
            group_int(global.active_cryptocurrencies)
        ));
        out.push_str(&format!("Markets: {}\n", group_int(global.markets)));
        out.push_str(&format!(
            "ICOs: {} upcoming, {} ongoing, {} ended\n",
            global.upcoming_icos, global.ongoing_icos, global.ended_icos
        ));
        out.push_str(&format!(
            "Total market cap: ${}\n",
            group_f64(global.total_cap_usd(), 0)
        ));
        out.push_str(&format!(
            "24h cap change: {:+.2}%\n",
            global.market_cap_change_percentage_24h_usd
        ));
        out.push_str(&format!(
            "Dominance: BTC {:.2}% / ETH {:.2}%\n",
            global.btc_dominance(),
            global.eth_dominance()
        ));
        out.push_str(&format!(
            "Market phase: {}\n",
            dominance_phase(global.btc_dominance())
        ));
    }

    if let Some(alt) = alt {
        out.push_str("\n--- Exchange activity ---\n");
        out.push_str(&format!(
            "Tracked currencies: {}\n",
            group_int(alt.data.active_cryptocurrencies)
        ));
        out.push_str(&format!(
            "Active markets: {}\n",
            group_int(alt.data.active_markets)
        ));
        out.push_str(&format!(
            "24h volume: ${}\n",
            group_f64(alt.usd_volume_24h(), 0)
        ));
    }

    if let Some(entry) = fng.and_then(|f| f.latest()) {
        out.push_str("\n--- Sentiment ---\n");
        out.push_str(&format!(
            "Fear & Greed: {} ({})\n",
            entry.value, entry.value_classification
        ));
        out.push_str(&format!("{}\n", interpret_fear_greed(entry.value_u32())));
    }

    out
}
