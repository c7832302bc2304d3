//! Logging configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, compact, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl LoggingConfig {
    pub const LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    pub const FORMATS: &'static [&'static str] = &["pretty", "compact", "json"];
}
