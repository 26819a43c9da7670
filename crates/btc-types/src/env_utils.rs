//! Environment variable parsing utilities.
//!
//! Every tunable in this workspace (timeouts, ttls, retry counts, feature
//! switches) is resolved once at startup from `BTC_DATA_*` environment
//! variables. These helpers keep that parsing typed and free of repeated
//! boilerplate like:
//!
//! ```ignore
//! std::env::var("BTC_DATA_MAX_RETRIES")
//!     .ok()
//!     .and_then(|v| v.parse::<u32>().ok())
//!     .unwrap_or(3)
//! ```
//!
//! # Example
//!
//! ```
//! use btc_types::env_utils::{env_bool_or, env_duration_secs_or, env_var_or};
//!
//! let retries: u32 = env_var_or("BTC_DATA_MAX_RETRIES", 3);
//! let ttl = env_duration_secs_or("BTC_DATA_CACHE_TTL_SECS", 60);
//! let cache_on = env_bool_or("BTC_DATA_ENABLE_CACHE", true);
//! ```

use std::str::FromStr;
use std::time::Duration;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is not set or cannot be parsed.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Parse an environment variable with a default value.
///
/// Returns the default if the variable is not set or cannot be parsed.
pub fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    env_var(key).unwrap_or(default)
}

/// Check if an environment variable is set to a truthy value.
///
/// Truthy forms are "1", "true", "yes", and "on" (case-insensitive).
pub fn env_bool(key: &str) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

/// Check if an environment variable is set to a truthy value, with a default
/// for the unset case.
///
/// An explicitly set falsy value ("0", "false", anything else) wins over the
/// default, so `BTC_DATA_ENABLE_CACHE=0` really disables the cache.
pub fn env_bool_or(key: &str, default: bool) -> bool {
    match std::env::var(key).ok() {
        Some(v) => matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        None => default,
    }
}

/// Get an environment variable as a string with a default value.
pub fn env_string_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable holding whole seconds into a `Duration`.
///
/// Returns `None` if the variable is not set or is not a non-negative
/// integer.
pub fn env_duration_secs(key: &str) -> Option<Duration> {
    env_var::<u64>(key).map(Duration::from_secs)
}

/// Parse a whole-seconds environment variable with a default.
pub fn env_duration_secs_or(key: &str, default_secs: u64) -> Duration {
    env_duration_secs(key).unwrap_or(Duration::from_secs(default_secs))
}
