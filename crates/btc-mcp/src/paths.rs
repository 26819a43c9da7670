//! Filesystem locations for server state.
//!
//! Everything lives under one base directory, `~/.btc-data` by default,
//! overridable with the `BTC_DATA_HOME` environment variable.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct BtcDataPaths {
    base: PathBuf,
}

impl BtcDataPaths {
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base_dir(&self) -> PathBuf {
        self.base.clone()
    }

    /// Where the MCP call log lands.
    pub fn logs_dir(&self) -> PathBuf {
        self.base.join("logs").join("mcp")
    }
}

/// Resolve the base directory from the environment.
pub fn default_paths() -> BtcDataPaths {
    let base = std::env::var("BTC_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".btc-data")
        });
    BtcDataPaths::from_base(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_dir_nests_under_base() {
        let paths = BtcDataPaths::from_base("/tmp/btc-data-test");
        assert_eq!(
            paths.logs_dir(),
            PathBuf::from("/tmp/btc-data-test/logs/mcp")
        );
    }
}
