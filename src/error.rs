//! Errors surfaced by the logger.

use thiserror::Error;

/// Failures local to a single call. None of them touch logger configuration.
#[derive(Debug, Error)]
pub enum LogError {
    /// A level name that is not one of the seven defined labels.
    #[error("unknown log level name: {0:?}")]
    UnknownLevel(String),

    /// A numeric priority that no defined level carries.
    #[error("no log level has priority {0}")]
    UnknownPriority(u16),

    /// A structured message could not be rendered as text.
    #[error("failed to format message: {0}")]
    Format(#[from] serde_json::Error),
}

impl LogError {
    /// True for errors caused by a bad level argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::UnknownLevel(_) | Self::UnknownPriority(_))
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
