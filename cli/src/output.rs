//! Command output formatting for text and JSONL modes.
//!
//! JSON mode emits one machine-readable record per executed command, for
//! integration with editors and other tooling driving the host.

use serde::Serialize;
use serde_json::json;
use strlist::{DispatchError, Reply};

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable output (default).
    Text,
    /// One JSON object per command (JSON Lines).
    Json,
}

/// A single executed command, as a JSONL record.
#[derive(Debug, Serialize)]
struct CommandRecord<'a> {
    method: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Format a successful reply as a JSONL record.
pub fn format_reply_json(method: &str, reply: &Reply) -> String {
    let (kind, value) = match reply {
        Reply::Int(n) => ("int", json!(n)),
        Reply::Str(Some(s)) => ("string", json!(s)),
        Reply::Str(None) => ("string", serde_json::Value::Null),
        Reply::List(list) => ("list", json!(list.iter().collect::<Vec<&str>>())),
    };
    let record = CommandRecord {
        method,
        status: "ok",
        kind: Some(kind),
        value: Some(value),
        message: None,
    };
    serde_json::to_string(&record).unwrap()
}

/// Format a dispatch failure as a JSONL record.
pub fn format_error_json(method: &str, error: &DispatchError) -> String {
    let record = CommandRecord {
        method,
        status: "error",
        kind: None,
        value: None,
        message: Some(error.to_string()),
    };
    serde_json::to_string(&record).unwrap()
}
