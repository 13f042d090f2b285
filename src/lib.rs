//! Leveled console logging.
//!
//! Messages carry one of six levels and are written to stdout only when
//! their priority reaches the logger's threshold. Decorated lines look like
//! `1718000000000:WARN: diskMonitor: disk low`; with decoration off the
//! message text is written as-is.
//!
//! ```
//! use makoto_logger::{Level, Logger, MemorySink};
//!
//! let logger = Logger::with_sink(MemorySink::new());
//! logger.set_log_level(Level::Trace);
//! logger.set_decorate_output_message(false);
//! assert_eq!(logger.debug("x=1", None), "x=1");
//! ```

pub mod config;
pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod message;
pub mod sink;
mod time;

pub use config::LoggerConfig;
pub use error::{LogError, Result};
pub use global::{
    debug, error, fatal, info, log, logger, set_decorate_output_message, set_log_level, trace,
    warn,
};
pub use level::Level;
pub use logger::Logger;
pub use message::OrAbsent;
pub use sink::{MemorySink, Sink, Stdout};
