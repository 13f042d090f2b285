use clap::{ArgAction, Parser};
use makoto_logger::{Level, LoggerConfig};

/// Makoto: write leveled, optionally decorated log lines to stdout.
///
/// Each message is emitted at --level when that level reaches --threshold.
/// With no MESSAGE arguments, messages are read from stdin, one per line.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Minimum level that gets written (TRACE..FATAL, or OFF)
    #[arg(long = "threshold", default_value_t = Level::Info)]
    pub threshold: Level,

    /// Level of the messages being written (TRACE..FATAL)
    #[arg(long = "level", default_value_t = Level::Info)]
    pub level: Level,

    /// Source label placed between the level and the message
    #[arg(long = "source")]
    pub source: Option<String>,

    /// Write the bare message, without timestamp, level and source
    #[arg(long = "plain", action = ArgAction::SetTrue)]
    pub plain: bool,

    /// Treat each message as a JSON document and write it compacted
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Diagnostic verbosity on stderr: 0=warn, 1=info, 2=debug
    #[arg(long = "verbosity", default_value_t = 0)]
    pub verbosity: u8,

    /// Messages to write
    #[arg(value_name = "MESSAGE")]
    pub messages: Vec<String>,
}

impl Args {
    /// Logger configuration requested on the command line.
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: self.threshold,
            decorate: !self.plain,
        }
    }

    /// Validate constraints that clap doesn't enforce here.
    fn validate(&self) -> anyhow::Result<()> {
        if self.level == Level::Off {
            anyhow::bail!("--level OFF is a threshold, not a message level");
        }
        if self.verbosity > 2 {
            anyhow::bail!("--verbosity must be in 0..=2");
        }
        Ok(())
    }
}

/// Parse CLI args in one place so main.rs does not need clap in scope.
pub fn parse() -> Args {
    let args = Args::parse();
    if let Err(e) = args.validate() {
        // Same exit code clap uses for usage errors
        eprintln!("error: {}", e);
        std::process::exit(2);
    }
    args
}
