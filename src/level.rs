//! Severity levels and their priorities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// A named severity tier. Levels compare by priority only.
///
/// `Off` is a threshold sentinel: setting it as the threshold silences every
/// message, and a message tagged `Off` is never emitted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Level {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
    Off,
}

impl Level {
    /// Every level, ascending by priority.
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Off,
    ];

    /// The levels a message may carry.
    pub const MESSAGE_LEVELS: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Numeric rank used for every comparison.
    pub const fn priority(self) -> u16 {
        match self {
            Level::Trace => 0,
            Level::Debug => 100,
            Level::Info => 200,
            Level::Warn => 300,
            Level::Error => 400,
            Level::Fatal => 500,
            Level::Off => 1000,
        }
    }

    /// The label printed in decorated output.
    pub const fn output_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Off => "OFF",
        }
    }

    /// Look a level up by its exact priority.
    pub const fn from_priority(priority: u16) -> Option<Level> {
        match priority {
            0 => Some(Level::Trace),
            100 => Some(Level::Debug),
            200 => Some(Level::Info),
            300 => Some(Level::Warn),
            400 => Some(Level::Error),
            500 => Some(Level::Fatal),
            1000 => Some(Level::Off),
            _ => None,
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.output_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    /// Case-insensitive match on the output label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Level::ALL
            .into_iter()
            .find(|level| level.output_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LogError::UnknownLevel(s.to_string()))
    }
}

impl TryFrom<String> for Level {
    type Error = LogError;

    fn try_from(name: String) -> Result<Self, LogError> {
        name.parse()
    }
}

impl TryFrom<u16> for Level {
    type Error = LogError;

    fn try_from(priority: u16) -> Result<Self, LogError> {
        Level::from_priority(priority).ok_or(LogError::UnknownPriority(priority))
    }
}
