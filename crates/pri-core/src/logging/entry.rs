//! Structured log entry.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One formatted log event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// RFC 3339 timestamp with milliseconds
    pub ts: String,

    /// trace, debug, info, warn, error
    pub level: String,

    /// Module path (e.g. "pri_core::contact::coordinator")
    pub target: String,

    pub msg: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
}

impl LogEntry {
    pub fn new(level: impl Into<String>, target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Human-readable console line: `LEVEL target: msg {fields}`.
    pub fn to_console_line(&self) -> String {
        let mut line = format!("{} {}: {}", self.level.to_uppercase(), self.target, self.msg);
        if let Some(fields) = &self.fields {
            line.push(' ');
            line.push_str(&fields.to_string());
        }
        line
    }
}
