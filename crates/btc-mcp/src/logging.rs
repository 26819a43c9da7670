//! Structured call logging for the MCP server.
//!
//! Every tool invocation is appended as one JSON line to a log file under
//! the base directory. Files rotate by size, and inputs/outputs are scrubbed
//! of anything that looks like a credential before they hit disk.

use anyhow::Result;
use chrono::Utc;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::paths::default_paths;
use btc_types::env_utils::{env_bool_or, env_var_or};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub enabled: bool,
    pub path: PathBuf,
    pub rotation_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: env_bool_or("BTC_DATA_LOG_ENABLED", true),
            path: default_paths().logs_dir(),
            rotation_mb: env_var_or("BTC_DATA_LOG_ROTATION_MB", 50),
        }
    }
}

#[derive(Debug)]
pub struct McpLogger {
    config: Mutex<LogConfig>,
    file: Mutex<Option<File>>,
    file_path: Mutex<Option<PathBuf>>,
}

impl McpLogger {
    pub fn new(config: LogConfig) -> Self {
        Self {
            config: Mutex::new(config),
            file: Mutex::new(None),
            file_path: Mutex::new(None),
        }
    }

    pub fn config(&self) -> LogConfig {
        self.config.lock().clone()
    }

    pub fn log_tool_call(&self, record: &LogRecord) -> Result<()> {
        let config = self.config.lock().clone();
        if !config.enabled {
            return Ok(());
        }

        fs::create_dir_all(&config.path)?;
        self.rotate_if_needed(&config)?;

        let mut file_guard = self.file.lock();
        if file_guard.is_none() {
            let file_path = self.next_log_path(&config);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&file_path)?;
            *file_guard = Some(file);
            *self.file_path.lock() = Some(file_path);
        }

        if let Some(file) = file_guard.as_mut() {
            let line = serde_json::to_string(record)?;
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }

    fn rotate_if_needed(&self, config: &LogConfig) -> Result<()> {
        let current = self.file_path.lock().clone();
        if let Some(path) = current {
            if let Ok(metadata) = fs::metadata(&path) {
                let size_mb = metadata.len() / (1024 * 1024);
                if size_mb >= config.rotation_mb {
                    *self.file.lock() = None;
                    *self.file_path.lock() = None;
                }
            }
        }
        Ok(())
    }

    fn next_log_path(&self, config: &LogConfig) -> PathBuf {
        let ts = Utc::now().format("%Y%m%d-%H%M%S");
        config.path.join(format!("mcp-{}.jsonl", ts))
    }
}

/// One line in the call log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub ts: String,
    pub request_id: String,
    pub tool: String,
    pub input: Value,
    pub output: Value,
    pub duration_ms: u128,
    pub success: bool,
    pub error: Option<String>,
    pub cache_hit: Option<bool>,
    pub llm_reason: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Replace values under credential-looking keys, recursively.
pub fn redact_sensitive(value: &Value) -> Value {
    fn redact_value(value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut new_map = serde_json::Map::new();
                for (k, v) in map {
                    let key_l = k.to_lowercase();
                    if key_l.contains("key")
                        || key_l.contains("token")
                        || key_l.contains("secret")
                        || key_l.contains("password")
                    {
                        new_map.insert(k.clone(), Value::String("***redacted***".to_string()));
                    } else {
                        new_map.insert(k.clone(), redact_value(v));
                    }
                }
                Value::Object(new_map)
            }
            Value::Array(arr) => Value::Array(arr.iter().map(redact_value).collect()),
            _ => value.clone(),
        }
    }

    redact_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record(tool: &str) -> LogRecord {
        LogRecord {
            ts: Utc::now().to_rfc3339(),
            request_id: "req-1".to_string(),
            tool: tool.to_string(),
            input: json!({"address": "bc1qtest"}),
            output: json!({"success": true}),
            duration_ms: 12,
            success: true,
            error: None,
            cache_hit: Some(false),
            llm_reason: None,
            tags: None,
        }
    }

    #[test]
    fn test_log_writes_one_json_line_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let logger = McpLogger::new(LogConfig {
            enabled: true,
            path: dir.path().to_path_buf(),
            rotation_mb: 50,
        });

        logger.log_tool_call(&sample_record("get_bitcoin_price_usd")).unwrap();
        logger.log_tool_call(&sample_record("get_info_about_address")).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let content = fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: LogRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.tool, "get_info_about_address");
        assert_eq!(parsed.duration_ms, 12);
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let logger = McpLogger::new(LogConfig {
            enabled: false,
            path: dir.path().to_path_buf(),
            rotation_mb: 50,
        });

        logger.log_tool_call(&sample_record("get_bitcoin_price_usd")).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_redact_scrubs_credential_keys_recursively() {
        let value = json!({
            "address": "bc1qtest",
            "api_key": "abc123",
            "nested": {"auth_token": "xyz", "height": 900000},
            "list": [{"password": "p"}]
        });
        let redacted = redact_sensitive(&value);
        assert_eq!(redacted["address"], "bc1qtest");
        assert_eq!(redacted["api_key"], "***redacted***");
        assert_eq!(redacted["nested"]["auth_token"], "***redacted***");
        assert_eq!(redacted["nested"]["height"], 900000);
        assert_eq!(redacted["list"][0]["password"], "***redacted***");
    }
}
