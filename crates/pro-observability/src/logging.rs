//! Structured log entries with session context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use pro_core::SessionId;
use serde::Serialize;

use crate::subscriber::LogInitError;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn to_tracing(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LogInitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(LogInitError::UnknownLevel(other.to_string())),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for log aggregation and scripting).
    Json,
    /// Human-readable format (for terminals).
    #[default]
    Human,
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Wall-clock time, RFC 3339.
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    /// Session ID for correlation.
    pub session: String,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, session: &SessionId) -> Self {
        Self::at(level, message, session, Utc::now())
    }

    /// Entry stamped with an explicit time.
    pub fn at(
        level: LogLevel,
        message: impl Into<String>,
        session: &SessionId,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp: time.to_rfc3339_opts(SecondsFormat::Millis, true),
            level,
            message: message.into(),
            session: session.to_string(),
            fields: BTreeMap::new(),
        }
    }

    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| match v {
                    serde_json::Value::String(text) => format!("{}={}", k, text),
                    other => format!("{}={}", k, other),
                })
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Json => self.to_json(),
            LogFormat::Human => self.to_human(),
        }
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder {
    entry: LogEntry,
}

impl LogBuilder {
    pub fn new(level: LogLevel, message: impl Into<String>, session: &SessionId) -> Self {
        Self {
            entry: LogEntry::new(level, message, session),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entry
            .fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an optional string field; `None` is written as `null`.
    pub fn field_opt(mut self, key: &str, value: Option<&str>) -> Self {
        self.entry
            .fields
            .insert(key.to_string(), serde_json::json!(value));
        self
    }

    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.entry.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.entry.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a duration field (in milliseconds).
    pub fn duration_ms(mut self, key: &str, duration: std::time::Duration) -> Self {
        self.entry
            .fields
            .insert(key.to_string(), serde_json::json!(duration.as_millis() as u64));
        self
    }

    pub fn build(self) -> LogEntry {
        self.entry
    }
}
