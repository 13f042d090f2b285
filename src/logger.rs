//! Threshold check, decoration and dispatch to the sink.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use serde::Serialize;

use crate::config::LoggerConfig;
use crate::error::Result;
use crate::level::Level;
use crate::message;
use crate::sink::{Sink, Stdout};
use crate::time;

/// A leveled logger writing to `S`.
///
/// Configuration lives in atomics, so a shared `&Logger` can be reconfigured
/// from one thread while others log. Each permitted call writes exactly one
/// line; a suppressed call does no I/O and returns an empty string.
#[derive(Debug)]
pub struct Logger<S = Stdout> {
    // Priority of the current threshold. Only ever holds a `Level` priority.
    threshold: AtomicU16,
    decorate: AtomicBool,
    sink: S,
}

impl Logger<Stdout> {
    /// Stdout logger with threshold INFO and decoration on.
    pub const fn new() -> Self {
        Self::with_sink(Stdout)
    }
}

impl Default for Logger<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Logger<S> {
    /// Logger writing to `sink`, threshold INFO, decoration on.
    pub const fn with_sink(sink: S) -> Self {
        Self {
            threshold: AtomicU16::new(Level::Info.priority()),
            decorate: AtomicBool::new(true),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Replace the threshold. `Level::Off` silences everything.
    pub fn set_log_level(&self, level: Level) {
        let previous = self.threshold.swap(level.priority(), Ordering::Relaxed);
        if previous != level.priority() {
            tracing::debug!(threshold = %level, "log threshold changed");
        }
    }

    pub fn log_level(&self) -> Level {
        Level::from_priority(self.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Turn the timestamp/level/source prefix on or off.
    pub fn set_decorate_output_message(&self, value: bool) {
        let previous = self.decorate.swap(value, Ordering::Relaxed);
        if previous != value {
            tracing::debug!(decorate = value, "output decoration changed");
        }
    }

    pub fn decorates(&self) -> bool {
        self.decorate.load(Ordering::Relaxed)
    }

    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            level: self.log_level(),
            decorate: self.decorates(),
        }
    }

    pub fn apply(&self, config: &LoggerConfig) {
        self.set_log_level(config.level);
        self.set_decorate_output_message(config.decorate);
    }

    /// Whether a message at `level` would be emitted right now.
    pub fn enabled(&self, level: Level) -> bool {
        level != Level::Off && level.priority() >= self.threshold.load(Ordering::Relaxed)
    }

    fn compose(&self, level: Level, text: String, source: Option<&str>) -> String {
        if !self.decorates() {
            return text;
        }
        let now = time::now_ms();
        match source.filter(|s| !s.is_empty()) {
            Some(source) => format!("{now}:{level}: {source}: {text}"),
            None => format!("{now}:{level}: {text}"),
        }
    }
}

impl<S: Sink> Logger<S> {
    /// Emit `message` at `level` if the threshold allows it.
    ///
    /// Returns the computed line (decorated or not), or an empty string when
    /// the message was suppressed.
    pub fn log(&self, level: Level, message: impl Display, source: Option<&str>) -> String {
        if !self.enabled(level) {
            return String::new();
        }
        let line = self.compose(level, message::to_text(&message), source);
        self.sink.write_line(&line);
        line
    }

    /// Like [`Logger::log`], rendering `value` as compact JSON.
    ///
    /// Suppressed calls return `Ok` with an empty string and never serialize.
    pub fn log_json<T: Serialize + ?Sized>(
        &self,
        level: Level,
        value: &T,
        source: Option<&str>,
    ) -> Result<String> {
        if !self.enabled(level) {
            return Ok(String::new());
        }
        let line = self.compose(level, message::to_json_text(value)?, source);
        self.sink.write_line(&line);
        Ok(line)
    }

    pub fn trace(&self, message: impl Display, source: Option<&str>) -> String {
        self.log(Level::Trace, message, source)
    }

    pub fn debug(&self, message: impl Display, source: Option<&str>) -> String {
        self.log(Level::Debug, message, source)
    }

    pub fn info(&self, message: impl Display, source: Option<&str>) -> String {
        self.log(Level::Info, message, source)
    }

    pub fn warn(&self, message: impl Display, source: Option<&str>) -> String {
        self.log(Level::Warn, message, source)
    }

    pub fn error(&self, message: impl Display, source: Option<&str>) -> String {
        self.log(Level::Error, message, source)
    }

    pub fn fatal(&self, message: impl Display, source: Option<&str>) -> String {
        self.log(Level::Fatal, message, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::OrAbsent;
    use crate::sink::MemorySink;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn capture() -> Logger<MemorySink> {
        Logger::with_sink(MemorySink::new())
    }

    /// Split `"<ms>:<rest>"`, checking the prefix is all digits.
    fn strip_timestamp(line: &str) -> &str {
        let (ms, rest) = line.split_once(':').expect("decorated line has a colon");
        assert!(!ms.is_empty() && ms.bytes().all(|b| b.is_ascii_digit()), "{line}");
        rest
    }

    fn emit(logger: &Logger<MemorySink>, level: Level, message: &str) -> String {
        match level {
            Level::Trace => logger.trace(message, None),
            Level::Debug => logger.debug(message, None),
            Level::Info => logger.info(message, None),
            Level::Warn => logger.warn(message, None),
            Level::Error => logger.error(message, None),
            Level::Fatal => logger.fatal(message, None),
            Level::Off => logger.log(Level::Off, message, None),
        }
    }

    #[test]
    fn starts_at_info_decorated() {
        let logger = capture();
        assert_eq!(logger.log_level(), Level::Info);
        assert!(logger.decorates());
        assert_eq!(logger.config(), LoggerConfig::default());
    }

    #[test]
    fn warn_with_source_at_default_threshold() {
        let logger = capture();
        let line = logger.warn("disk low", Some("diskMonitor"));
        assert!(line.ends_with("WARN: diskMonitor: disk low"), "{line}");
        assert_eq!(strip_timestamp(&line), "WARN: diskMonitor: disk low");
        assert_eq!(logger.sink().lines(), vec![line]);
    }

    #[test]
    fn timestamp_is_taken_at_call_time() {
        let wall = || {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_millis()
        };
        let logger = capture();
        let before = wall();
        let line = logger.error("late", None);
        let after = wall();

        let (ms, rest) = line.split_once(':').unwrap();
        let ms: u128 = ms.parse().unwrap();
        assert!(before <= ms && ms <= after, "{before} <= {ms} <= {after}");
        assert_eq!(rest, "ERROR: late");
    }

    #[test]
    fn below_threshold_is_silent() {
        let logger = capture();
        logger.set_log_level(Level::Error);
        assert_eq!(logger.info("ping", None), "");
        assert!(logger.sink().is_empty());
    }

    #[test]
    fn undecorated_output_is_the_message() {
        let logger = capture();
        logger.set_log_level(Level::Trace);
        logger.set_decorate_output_message(false);
        assert_eq!(logger.debug("x=1", None), "x=1");
        assert_eq!(logger.fatal("x=1", Some("ignored")), "x=1");
        assert_eq!(logger.sink().lines(), vec!["x=1", "x=1"]);
    }

    #[test]
    fn decorated_without_source_has_no_extra_segment() {
        let logger = capture();
        let line = logger.info("hello", None);
        assert_eq!(strip_timestamp(&line), "INFO: hello");

        let line = logger.info("hello", Some(""));
        assert_eq!(strip_timestamp(&line), "INFO: hello");
    }

    #[test]
    fn threshold_gate_for_every_level() {
        for threshold in Level::MESSAGE_LEVELS {
            for level in Level::MESSAGE_LEVELS {
                let logger = capture();
                logger.set_log_level(threshold);
                let line = emit(&logger, level, "m");
                if level >= threshold {
                    assert!(!line.is_empty(), "{level} at {threshold}");
                    assert_eq!(logger.sink().len(), 1);
                } else {
                    assert_eq!(line, "", "{level} at {threshold}");
                    assert!(logger.sink().is_empty());
                }
            }
        }
    }

    #[test]
    fn off_silences_fatal() {
        let logger = capture();
        logger.set_log_level(Level::Off);
        for level in Level::MESSAGE_LEVELS {
            assert_eq!(emit(&logger, level, "m"), "");
        }
        assert!(logger.sink().is_empty());
    }

    #[test]
    fn off_is_never_a_message_level() {
        let logger = capture();
        logger.set_log_level(Level::Trace);
        assert!(!logger.enabled(Level::Off));
        assert_eq!(logger.log(Level::Off, "m", None), "");
        assert!(logger.sink().is_empty());
    }

    #[test]
    fn setting_the_same_level_twice_changes_nothing() {
        let once = capture();
        once.set_log_level(Level::Info);
        let twice = capture();
        twice.set_log_level(Level::Info);
        twice.set_log_level(Level::Info);
        assert_eq!(once.config(), twice.config());
        for level in Level::ALL {
            assert_eq!(once.enabled(level), twice.enabled(level));
        }
    }

    #[test]
    fn non_string_messages_are_stringified() {
        let logger = capture();
        logger.set_decorate_output_message(false);
        assert_eq!(logger.info(42, None), "42");
        assert_eq!(logger.info(2.5, None), "2.5");
        assert_eq!(logger.info(OrAbsent::<&str>(None), None), "<none>");
        assert_eq!(logger.info(json!({"a": 1}), None), r#"{"a":1}"#);
    }

    #[test]
    fn json_messages_are_decorated_like_text() {
        let logger = capture();
        let line = logger
            .log_json(Level::Error, &json!({"free": 3}), Some("disk"))
            .unwrap();
        assert_eq!(strip_timestamp(&line), r#"ERROR: disk: {"free":3}"#);
    }

    #[test]
    fn json_failure_is_reported_and_writes_nothing() {
        let logger = capture();
        let mut bad = BTreeMap::new();
        bad.insert(vec![0u8], 1);
        assert!(logger.log_json(Level::Error, &bad, None).is_err());
        assert!(logger.sink().is_empty());
        assert_eq!(logger.config(), LoggerConfig::default());

        // Suppressed calls never reach the serializer.
        assert_eq!(logger.log_json(Level::Debug, &bad, None).unwrap(), "");
    }

    #[test]
    fn apply_sets_both_fields() {
        let logger = capture();
        let cfg = LoggerConfig {
            level: Level::Warn,
            decorate: false,
        };
        logger.apply(&cfg);
        assert_eq!(logger.config(), cfg);
    }

    #[test]
    fn shared_across_threads() {
        let logger = Arc::new(Logger::with_sink(MemorySink::new()));
        std::thread::scope(|s| {
            for i in 0..4 {
                let logger = Arc::clone(&logger);
                s.spawn(move || {
                    for j in 0..25 {
                        logger.error(format!("{i}-{j}"), Some("worker"));
                    }
                });
            }
        });
        assert_eq!(logger.sink().len(), 100);
    }
}
