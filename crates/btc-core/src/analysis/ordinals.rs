//! Ordinals inscription report.

use crate::model::Inscriptions;
use crate::shared::format::{group_int, group_signed, utc_datetime};

/// Inscriptions held by an address, newest first.
pub fn inscriptions_report(address: &str, page: &Inscriptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Ordinals of {address} ===\n"));
    out.push_str(&format!("Total inscriptions: {}\n", group_int(page.total)));
    if page.results.is_empty() {
        out.push_str("No inscriptions found\n");
        return out;
    }
    out.push('\n');
    for (i, inscription) in page.results.iter().enumerate() {
        out.push_str(&format!(
            "{}. #{} {} ({})\n   id: {}\n",
            i + 1,
            group_signed(inscription.number),
            inscription.content_type,
            utc_datetime(inscription.genesis_secs()),
            inscription.id
        ));
    }
    out
}
