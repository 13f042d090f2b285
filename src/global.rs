//! Free functions over a process-wide stdout logger.
//!
//! Handy for code that does not want to carry a [`Logger`] around. The
//! default logger starts at INFO with decoration on.

use std::fmt::Display;

use crate::level::Level;
use crate::logger::Logger;

static LOGGER: Logger = Logger::new();

/// The process-wide logger behind the free functions.
pub fn logger() -> &'static Logger {
    &LOGGER
}

pub fn set_log_level(level: Level) {
    LOGGER.set_log_level(level);
}

pub fn set_decorate_output_message(value: bool) {
    LOGGER.set_decorate_output_message(value);
}

/// See [`Logger::log`].
pub fn log(level: Level, message: impl Display, source: Option<&str>) -> String {
    LOGGER.log(level, message, source)
}

pub fn trace(message: impl Display, source: Option<&str>) -> String {
    LOGGER.trace(message, source)
}

pub fn debug(message: impl Display, source: Option<&str>) -> String {
    LOGGER.debug(message, source)
}

pub fn info(message: impl Display, source: Option<&str>) -> String {
    LOGGER.info(message, source)
}

pub fn warn(message: impl Display, source: Option<&str>) -> String {
    LOGGER.warn(message, source)
}

pub fn error(message: impl Display, source: Option<&str>) -> String {
    LOGGER.error(message, source)
}

pub fn fatal(message: impl Display, source: Option<&str>) -> String {
    LOGGER.fatal(message, source)
}
