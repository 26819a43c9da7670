//! Client for the Hiro Ordinals API.

use std::time::Duration;

use btc_transport::Fetcher;

use super::decode;
use crate::model::Inscriptions;

const DEFAULT_TTL: Duration = Duration::from_secs(30);

/// Newest inscriptions are enough for an address report.
const PAGE_LIMIT: u32 = 5;

pub struct HiroClient {
    fetcher: Fetcher,
}

impl HiroClient {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// First page of inscriptions held by an address.
    pub fn inscriptions(&self, address: &str) -> Option<Inscriptions> {
        let path = format!("/ordinals/v1/inscriptions?address={address}&limit={PAGE_LIMIT}");
        self.fetcher
            .fetch_with_ttl(&path, DEFAULT_TTL)
            .and_then(|v| decode(v, "inscriptions"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::{scripted_fetcher, ScriptedTransport};

    #[test]
    fn test_inscriptions_path_and_total() {
        let transport = ScriptedTransport::new(&[
            r#"{"total": 3, "results": [
                {"id": "abci0", "number": 71000000, "content_type": "text/plain",
                 "genesis_timestamp": 1700000000000}
            ]}"#,
        ]);
        let client = HiroClient::new(scripted_fetcher(transport.clone()));

        let page = client
            .inscriptions("bc1pexampletaprootaddress00000000000000000000000000")
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(
            transport.urls(),
            vec![
                "https://api.test/ordinals/v1/inscriptions?address=bc1pexampletaprootaddress00000000000000000000000000&limit=5"
            ]
        );
    }
}
