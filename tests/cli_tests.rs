use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

// Every invocation gets its own home so call logs land in a temp dir
// instead of the real ~/.btc-data.
fn btc_data_cmd(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("btc-data").unwrap();
    cmd.env("BTC_DATA_HOME", home.path());
    cmd
}

#[test]
fn test_tools_lists_the_tool_surface() {
    let home = TempDir::new().unwrap();
    btc_data_cmd(&home)
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("get_bitcoin_network_overview"))
        .stdout(predicate::str::contains("get_mining_pool_by_slug"))
        .stdout(predicate::str::contains("get_ordinals_of_address"));
}

#[test]
fn test_tools_json_has_nineteen_entries() {
    let home = TempDir::new().unwrap();
    let output = btc_data_cmd(&home)
        .arg("--json")
        .arg("tools")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing: Value = serde_json::from_slice(&output).unwrap();
    let entries = listing.as_array().unwrap();
    assert_eq!(entries.len(), 19);
    assert!(entries
        .iter()
        .all(|e| e.get("name").is_some() && e.get("description").is_some()));
}

#[test]
fn test_call_unknown_tool_fails() {
    let home = TempDir::new().unwrap();
    btc_data_cmd(&home)
        .arg("call")
        .arg("get_bitcoin_magic")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool"));
}

#[test]
fn test_call_unknown_tool_json_envelope() {
    let home = TempDir::new().unwrap();
    let output = btc_data_cmd(&home)
        .arg("--json")
        .arg("call")
        .arg("get_bitcoin_magic")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let response: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(response["success"], false);
    assert!(response["error"]
        .as_str()
        .unwrap()
        .contains("Unknown tool: get_bitcoin_magic"));
    assert!(response["duration_ms"].is_number());
}

#[test]
fn test_call_missing_height_argument() {
    let home = TempDir::new().unwrap();
    let output = btc_data_cmd(&home)
        .arg("--json")
        .arg("call")
        .arg("get_block_hash_with_height")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let response: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(response["success"], false);
    assert!(response["error"].as_str().unwrap().contains("height"));
}

#[test]
fn test_call_rejects_malformed_input() {
    let home = TempDir::new().unwrap();
    btc_data_cmd(&home)
        .arg("call")
        .arg("get_bitcoin_price_usd")
        .arg("--input")
        .arg("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_unreachable_upstream_reports_no_data() {
    let home = TempDir::new().unwrap();
    let output = btc_data_cmd(&home)
        .env("BTC_DATA_COINGECKO_URL", "http://127.0.0.1:9")
        .env("BTC_DATA_MAX_RETRIES", "0")
        .env("BTC_DATA_ENABLE_RETRY", "0")
        .arg("--json")
        .arg("call")
        .arg("get_bitcoin_price_usd")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let response: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(response["success"], true);
    assert!(response["result"]
        .as_str()
        .unwrap()
        .contains("No data available"));
}

#[test]
fn test_call_appends_to_call_log() {
    let home = TempDir::new().unwrap();
    btc_data_cmd(&home)
        .arg("--json")
        .arg("call")
        .arg("get_bitcoin_magic")
        .assert()
        .success();

    let logs_dir = home.path().join("logs").join("mcp");
    let entries: Vec<_> = std::fs::read_dir(&logs_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let content = std::fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();
    let record: Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(record["tool"], "get_bitcoin_magic");
    assert_eq!(record["success"], false);
    assert!(record["request_id"].as_str().is_some());
}

#[test]
fn test_status_shows_five_upstreams() {
    let home = TempDir::new().unwrap();
    btc_data_cmd(&home)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("mempool.space"))
        .stdout(predicate::str::contains("coingecko"))
        .stdout(predicate::str::contains("alternative.me"));
}

#[test]
fn test_status_json_resolves_default_urls() {
    let home = TempDir::new().unwrap();
    let output = btc_data_cmd(&home)
        .arg("--json")
        .arg("status")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let status: Value = serde_json::from_slice(&output).unwrap();
    let upstreams = status["upstreams"].as_array().unwrap();
    assert_eq!(upstreams.len(), 5);
    assert_eq!(upstreams[0]["base_url"], "https://mempool.space/api");
    assert_eq!(upstreams[0]["connect_timeout_secs"], 5);
    assert_eq!(upstreams[0]["read_timeout_secs"], 30);
    assert_eq!(upstreams[0]["ttl_secs"], 60);
    assert_eq!(upstreams[0]["max_retries"], 3);
    assert_eq!(upstreams[0]["cache_enabled"], true);
}

#[test]
fn test_status_json_honors_env_overrides() {
    let home = TempDir::new().unwrap();
    let output = btc_data_cmd(&home)
        .env("BTC_DATA_MEMPOOL_URL", "http://localhost:8999")
        .env("BTC_DATA_MAX_RETRIES", "1")
        .env("BTC_DATA_ENABLE_CACHE", "0")
        .arg("--json")
        .arg("status")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let status: Value = serde_json::from_slice(&output).unwrap();
    let mempool = &status["upstreams"][0];
    assert_eq!(mempool["base_url"], "http://localhost:8999");
    assert_eq!(mempool["max_retries"], 1);
    assert_eq!(mempool["cache_enabled"], false);
}
