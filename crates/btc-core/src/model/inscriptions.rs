//! Ordinals inscription payloads from the Hiro API.

use serde::Deserialize;

/// Response of `/ordinals/v1/inscriptions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Inscriptions {
    pub total: u64,
    pub results: Vec<Inscription>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Inscription {
    pub id: String,
    pub number: i64,
    pub content_type: String,
    /// Milliseconds since epoch.
    pub genesis_timestamp: i64,
}

impl Inscription {
    /// Genesis time in whole seconds.
    pub fn genesis_secs(&self) -> i64 {
        self.genesis_timestamp / 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_millis_to_secs() {
        let page: Inscriptions = serde_json::from_str(
            r#"{"total": 2, "results": [
                {"id": "abc123i0", "number": 73500000,
                 "content_type": "image/png", "genesis_timestamp": 1700000000000}
            ]}"#,
        )
        .unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.results[0].genesis_secs(), 1_700_000_000);
    }
}
