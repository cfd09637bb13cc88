//! Contains the udag CLI.

use crate::{
    commands::{DecodeCommand, GraphCommand, SummaryCommand},
    error::UdagResult,
    flags::GlobalArgs,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use udag_cli::{LogConfig, cli_styles};

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decodes a snapshot into JSON block records.
    Decode(DecodeCommand),
    /// Describes a snapshot as a renderable graph.
    Graph(GraphCommand),
    /// Prints statistics of a snapshot.
    Summary(SummaryCommand),
}

/// The udag CLI.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, styles = cli_styles(), long_about = None)]
pub struct Cli {
    /// Global arguments for the CLI.
    #[command(flatten)]
    pub global: GlobalArgs,
    /// The subcommand to run.
    #[command(subcommand)]
    pub subcommand: Commands,
}

impl Cli {
    /// Runs the CLI.
    pub fn run(self) -> Result<()> {
        self.init_logs()?;

        match self.subcommand {
            Commands::Decode(decode) => decode.run(&self.global)?,
            Commands::Graph(graph) => graph.run(&self.global)?,
            Commands::Summary(summary) => summary.run(&self.global)?,
        }
        Ok(())
    }

    /// Initializes the logging system based on global arguments.
    pub fn init_logs(&self) -> UdagResult<()> {
        LogConfig::new(self.global.log_args.clone()).init_tracing_subscriber(None)?;
        Ok(())
    }
}
