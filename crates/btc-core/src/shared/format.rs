//! Number and timestamp formatting for report strings.

use btc_types::SATOSHI;

/// Group an integer with thousands separators: `1234567` -> `"1,234,567"`.
pub fn group_int(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Like [`group_int`] for signed values (pending balances can be negative).
pub fn group_signed(n: i64) -> String {
    if n < 0 {
        format!("-{}", group_int(n.unsigned_abs()))
    } else {
        group_int(n as u64)
    }
}

/// Fixed-decimal float with a grouped integer part: `1234567.891` with two
/// decimals -> `"1,234,567.89"`.
pub fn group_f64(x: f64, decimals: usize) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let formatted = format!("{:.*}", decimals, x.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };
    let grouped = match int_part.parse::<u64>() {
        Ok(n) => group_int(n),
        Err(_) => int_part,
    };
    let sign = if x < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Satoshis to BTC.
pub fn btc_from_sats(sats: u64) -> f64 {
    sats as f64 / SATOSHI as f64
}

/// Unix seconds to a `YYYY-MM-DD HH:MM:SS UTC` string.
pub fn utc_datetime(ts_secs: i64) -> String {
    match chrono::DateTime::from_timestamp(ts_secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("timestamp {ts_secs}"),
    }
}
