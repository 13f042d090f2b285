use std::io;

use tracing::{debug, error, info, warn};

mod args;
mod emit;
mod log;

use emit::Emitter;

fn main() -> anyhow::Result<()> {
    let args = args::parse();

    // Diagnostics go to stderr; stdout is reserved for log lines
    log::init(log::filter_for_verbosity(args.verbosity));

    let logger = makoto_logger::logger();
    logger.apply(&args.logger_config());
    debug!(config = ?logger.config(), "logger configured");

    if !logger.enabled(args.level) {
        warn!(
            "{} messages are below threshold {}; nothing will be written",
            args.level,
            logger.log_level()
        );
    }

    let emitter = Emitter {
        level: args.level,
        source: args.source.as_deref(),
        json: args.json,
    };

    let tally = if args.messages.is_empty() {
        info!("reading messages from stdin");
        emitter.run(logger, emit::raw_lines(io::stdin().lock()))?
    } else {
        let messages = args
            .messages
            .iter()
            .map(|m| Ok::<_, io::Error>(m.clone().into_bytes()));
        emitter.run(logger, messages)?
    };

    if tally.rejected > 0 {
        error!(
            "done with errors: emitted={}, suppressed={}, rejected={}",
            tally.emitted, tally.suppressed, tally.rejected
        );
        std::process::exit(1);
    } else {
        info!("done: emitted={}, suppressed={}", tally.emitted, tally.suppressed);
    }

    Ok(())
}
