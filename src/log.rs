//! Diagnostics for the binary itself (stderr, with timestamps).
//!
//! Log lines produced for the user go to stdout through the library; this
//! subscriber only carries the tool's own tracing events.

use tracing_subscriber::fmt::time::UtcTime;

/// Env-filter directive for `--verbosity`; anything above 2 was rejected earlier.
pub fn filter_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "warn",
        2 => "debug",
        _ => "info",
    }
}

/// Install the stderr subscriber for the binary's own events.
///
/// `filter` is an env-filter directive such as "info".
pub fn init(filter: &str) {
    // Tests and embedders may have installed one already; keep theirs.
    let _ = tracing_subscriber::fmt()
        .with_timer(UtcTime::rfc_3339())
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}
