//! Global arguments for the CLI.

use crate::error::{UdagError, UdagResult};
use clap::Parser;
use std::path::PathBuf;
use udag_cli::LogArgs;
use udag_dag::LayoutConfig;

/// Global arguments for the CLI.
#[derive(Parser, Default, Clone, Debug)]
pub struct GlobalArgs {
    /// Logging arguments.
    #[command(flatten)]
    pub log_args: LogArgs,
    /// Path to a TOML layout config.
    #[arg(
        long,
        global = true,
        env = "UDAG_CONFIG",
        help = "Path to a TOML file overriding colors, label hash length and rank direction"
    )]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Loads the layout config, falling back to the defaults when no file is given.
    pub fn layout_config(&self) -> UdagResult<LayoutConfig> {
        let Some(path) = &self.config else {
            return Ok(LayoutConfig::default());
        };
        let raw = std::fs::read_to_string(path)
            .map_err(|source| UdagError::UnreadableConfig { path: path.clone(), source })?;
        let config = toml::from_str(&raw)
            .map_err(|source| UdagError::Config { path: path.clone(), source })?;
        debug!(target: "udag", path = %path.display(), ?config, "Loaded layout config");
        Ok(config)
    }
}
