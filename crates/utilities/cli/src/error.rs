//! Error types for CLI utilities.

use thiserror::Error;

/// Errors that can occur in CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// The global tracing subscriber could not be installed.
    #[error("Failed to initialize tracing: {0}")]
    Tracing(String),

    /// `RUST_LOG` holds a filter that could not be parsed.
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::FromEnvError),
}

/// Type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
