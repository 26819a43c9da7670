//! Unified tool response envelope.
//!
//! Every tool, whether invoked over MCP or from the CLI, resolves to a
//! `ToolResponse`. Upstream outages are NOT errors here: a tool that could
//! not get data returns `success: true` with a "no data available" result,
//! so hosts degrade gracefully. `success: false` is reserved for caller
//! mistakes (unknown tool, missing argument) and internal faults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Whether the invocation itself succeeded.
    pub success: bool,

    /// The result value: a report string or a structured object.
    pub result: Value,

    /// Error message if the invocation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Additional error details (cause chain, context).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<Value>,

    /// Non-fatal warnings, e.g. a report section skipped for missing data.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,

    /// Whether the result came from cache, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_hit: Option<bool>,

    /// Execution duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ToolResponse {
    /// Successful response with a result value.
    pub fn ok(result: Value) -> Self {
        Self {
            success: true,
            result,
            error: None,
            error_details: None,
            warnings: Vec::new(),
            cache_hit: None,
            duration_ms: None,
        }
    }

    /// Successful response with an empty result.
    pub fn ok_empty() -> Self {
        Self::ok(Value::Null)
    }

    /// Error response with a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: Value::Null,
            error: Some(message.into()),
            error_details: None,
            warnings: Vec::new(),
            cache_hit: None,
            duration_ms: None,
        }
    }

    /// Error response from an `anyhow::Error`, capturing the cause chain.
    pub fn from_error(err: &anyhow::Error) -> Self {
        let mut response = Self::error(err.to_string());
        let chain: Vec<String> = err.chain().skip(1).map(|e| e.to_string()).collect();
        if !chain.is_empty() {
            response.error_details = Some(serde_json::json!({
                "cause_chain": chain
            }));
        }
        response
    }

    /// Add a warning to the response.
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Set the cache hit flag.
    pub fn with_cache_hit(mut self, hit: bool) -> Self {
        self.cache_hit = Some(hit);
        self
    }

    /// Set the execution duration.
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Convert the response to a JSON Value.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_error(&self) -> bool {
        !self.success
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for ToolResponse {
    fn default() -> Self {
        Self::ok_empty()
    }
}

impl From<anyhow::Error> for ToolResponse {
    fn from(err: anyhow::Error) -> Self {
        Self::from_error(&err)
    }
}

/// Deserialize a tool input from a JSON Value, turning a failure into the
/// error response the handler should return.
pub fn extract_input<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ToolResponse> {
    serde_json::from_value(value).map_err(|e| ToolResponse::error(format!("Invalid input: {}", e)))
}

/// Metadata the host can attach to a tool invocation under `_meta`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolMeta {
    /// Why the host invoked the tool, for the call log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Request ID for tracing; generated when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Free-form tags for categorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
