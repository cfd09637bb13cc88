//! Logging flags and subscriber setup.

use crate::{CliError, CliResult};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Output format of log lines.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Timestamp, level, target and fields.
    #[default]
    Full,
    /// A shorter, single-line format.
    Compact,
}

/// Logging arguments.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
pub struct LogArgs {
    /// Verbosity level (0-2)
    #[arg(long = "verbosity", short = 'v', global = true, action = ArgAction::Count)]
    pub v: u8,
    /// Log line format.
    #[arg(
        id = "log_format",
        long = "log.format",
        global = true,
        default_value = "full",
        env = "UDAG_LOG_FORMAT"
    )]
    pub format: LogFormat,
}

impl LogArgs {
    /// The level used when `RUST_LOG` is unset.
    pub const fn level(&self) -> LevelFilter {
        match self.v {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Logging configuration built from [`LogArgs`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    args: LogArgs,
}

impl LogConfig {
    /// Creates a config from parsed arguments.
    pub const fn new(args: LogArgs) -> Self {
        Self { args }
    }

    /// Installs the global subscriber. Logs go to stderr so stdout stays free for output.
    ///
    /// Without an explicit `filter`, `RUST_LOG` is honoured on top of the verbosity level.
    pub fn init_tracing_subscriber(&self, filter: Option<EnvFilter>) -> CliResult<()> {
        let filter = match filter {
            Some(filter) => filter,
            None => EnvFilter::builder().with_default_directive(self.args.level().into()).from_env()?,
        };
        let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
        let result = match self.args.format {
            LogFormat::Full => builder.try_init(),
            LogFormat::Compact => builder.compact().try_init(),
        };
        result.map_err(|err| CliError::Tracing(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = LogArgs::try_parse_from(["test"]).unwrap();
        assert_eq!(args.level(), LevelFilter::INFO);

        let args = LogArgs::try_parse_from(["test", "-v"]).unwrap();
        assert_eq!(args.level(), LevelFilter::DEBUG);

        let args = LogArgs::try_parse_from(["test", "-vvv"]).unwrap();
        assert_eq!(args.level(), LevelFilter::TRACE);
    }

    #[test]
    fn test_log_format() {
        let args = LogArgs::try_parse_from(["test", "--log.format", "compact"]).unwrap();
        assert_eq!(args.format, LogFormat::Compact);
        assert!(LogArgs::try_parse_from(["test", "--log.format", "xml"]).is_err());
    }
}
