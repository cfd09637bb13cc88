//! Error types for the udag binary.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type for udag operations.
pub type UdagResult<T> = Result<T, UdagError>;

/// Errors that end a udag command.
#[derive(Debug, Error)]
pub enum UdagError {
    /// The snapshot could not be read.
    #[error("Failed to read snapshot {}", path.display())]
    UnreadableInput {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output could not be written.
    #[error("Failed to write output {}", path.display())]
    UnwritableOutput {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A JSON snapshot did not have the `{"data": [...]}` shape.
    #[error("Invalid JSON snapshot {}", path.display())]
    InvalidSnapshotJson {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The layout config file could not be read.
    #[error("Failed to read layout config {}", path.display())]
    UnreadableConfig {
        /// Config path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The layout config file is not valid.
    #[error("Invalid layout config {}", path.display())]
    Config {
        /// Config path.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// CLI error from udag-cli utilities.
    #[error(transparent)]
    Cli(#[from] udag_cli::CliError),
}
