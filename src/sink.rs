//! Where computed messages go.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Destination for computed messages. One call, one line.
pub trait Sink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Standard output, one line per call with the platform terminator.
#[derive(Copy, Clone, Debug, Default)]
pub struct Stdout;

impl Sink for Stdout {
    fn write_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        // A closed pipe must not take the caller down with it.
        if let Err(e) = writeln!(out, "{line}") {
            tracing::debug!(error = %e, "stdout write failed");
        }
    }
}

/// Keeps every line in memory. Handy for capturing what was logged.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}
