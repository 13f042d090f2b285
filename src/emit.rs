//! Feeding messages from the command line or stdin into a logger.

use std::io::{self, BufRead};

use anyhow::Context;
use makoto_logger::{Level, Logger, Sink};
use serde_json::Value;
use tracing::warn;

/// Outcome of a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub emitted: usize,
    pub suppressed: usize,
    pub rejected: usize,
}

/// How each message gets logged.
#[derive(Debug)]
pub struct Emitter<'a> {
    pub level: Level,
    pub source: Option<&'a str>,
    /// Messages are JSON documents, written compacted.
    pub json: bool,
}

/// Lines as raw bytes, terminator (`\n` or `\r\n`) removed.
///
/// Bytes are left undecoded so one bad line does not end the stream.
pub fn raw_lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    std::iter::from_fn(move || {
        let mut buf = Vec::new();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                Some(Ok(buf))
            }
            Err(e) => Some(Err(e)),
        }
    })
}

impl Emitter<'_> {
    /// Log every message, counting what was written, suppressed or rejected.
    ///
    /// Lines that are not UTF-8 (or not JSON with `json` set) are rejected and
    /// skipped. Only a read error stops the run.
    pub fn run<S, I>(&self, logger: &Logger<S>, messages: I) -> anyhow::Result<Tally>
    where
        S: Sink,
        I: IntoIterator<Item = io::Result<Vec<u8>>>,
    {
        let mut tally = Tally::default();

        for (idx, raw) in messages.into_iter().enumerate() {
            let raw = raw.context("failed to read message")?;

            if !logger.enabled(self.level) {
                tally.suppressed += 1;
                continue;
            }

            let message = match String::from_utf8(raw) {
                Ok(m) => m,
                Err(e) => {
                    warn!("message #{idx}: not valid UTF-8: {e}");
                    tally.rejected += 1;
                    continue;
                }
            };

            if self.json {
                let value: Value = match serde_json::from_str(&message) {
                    Ok(v) => v,
                    Err(e) => {
                        warn!("message #{idx}: not valid JSON: {e}");
                        tally.rejected += 1;
                        continue;
                    }
                };
                logger.log_json(self.level, &value, self.source)?;
            } else {
                logger.log(self.level, &message, self.source);
            }
            tally.emitted += 1;
        }

        Ok(tally)
    }
}
