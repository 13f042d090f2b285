//! Serializable snapshot of a logger's configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::level::Level;

/// Threshold and decoration flag, as a plain value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Minimum level a message needs to be emitted.
    pub level: Level,
    /// Prefix messages with timestamp, level and source.
    pub decorate: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            decorate: true,
        }
    }
}

impl LoggerConfig {
    /// Parse from JSON such as `{"level": "warn", "decorate": false}`.
    /// Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
