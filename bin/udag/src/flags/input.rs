//! Snapshot input flags.

use crate::error::{UdagError, UdagResult};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use udag_candid::{BlockRecord, RecordDecoder, Snapshot};

/// Format of a snapshot file.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON for `.json` files, the Candid text dump otherwise.
    #[default]
    Auto,
    /// Candid text as printed by `dfx canister call ... get_unstable_blocks`.
    Dump,
    /// The `{"data": [...]}` JSON written by `udag decode`.
    Json,
}

/// Arguments selecting the snapshot to read.
#[derive(Parser, Default, Clone, Debug)]
pub struct InputArgs {
    /// Snapshot file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
    /// Snapshot format.
    #[arg(long = "input-format", value_enum, default_value = "auto")]
    pub input_format: InputFormat,
}

impl InputArgs {
    /// The effective format of the input file.
    pub fn format(&self) -> InputFormat {
        match self.input_format {
            InputFormat::Auto
                if self.input.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) =>
            {
                InputFormat::Json
            }
            InputFormat::Auto => InputFormat::Dump,
            format => format,
        }
    }

    /// Reads the snapshot and returns its records in decode order.
    ///
    /// A snapshot without any record is not an error, only a warning.
    pub fn load(&self) -> UdagResult<Vec<BlockRecord>> {
        let path = &self.input;
        let text = std::fs::read_to_string(path)
            .map_err(|source| UdagError::UnreadableInput { path: path.clone(), source })?;

        let records = match self.format() {
            InputFormat::Json => {
                let snapshot: Snapshot = serde_json::from_str(&text)
                    .map_err(|source| UdagError::InvalidSnapshotJson { path: path.clone(), source })?;
                snapshot.data
            }
            InputFormat::Dump | InputFormat::Auto => {
                let mut decoder = RecordDecoder::default().records(&text);
                let records: Vec<_> = decoder.by_ref().collect();
                if decoder.skipped() > 0 {
                    warn!(target: "udag", skipped = decoder.skipped(), "Skipped malformed records");
                }
                records
            }
        };

        if records.is_empty() {
            warn!(target: "udag", path = %path.display(), "No block records decoded");
        } else {
            info!(target: "udag", path = %path.display(), records = records.len(), "Loaded snapshot");
        }
        Ok(records)
    }
}
