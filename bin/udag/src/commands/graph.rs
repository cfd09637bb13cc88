//! Graph Subcommand

use crate::{
    error::UdagResult,
    flags::{GlobalArgs, InputArgs, OutputArgs},
};
use clap::{Parser, ValueEnum};
use udag_dag::{Dag, LayoutDescriber};

/// Output format of the `graph` subcommand.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphFormat {
    /// Graphviz DOT, ready for `dot -Tpng`.
    #[default]
    Dot,
    /// The render description as JSON.
    Json,
}

/// The `graph` Subcommand
///
/// The `graph` subcommand assembles a snapshot into a DAG and prints its render description.
/// Rendering itself is left to a layout engine such as Graphviz.
///
/// # Usage
///
/// ```sh
/// udag graph ./unstable_blocks/output.txt -o blockchain_graph.dot
/// dot -Tpng blockchain_graph.dot -o blockchain_graph.png
/// ```
#[derive(Parser, Default, Debug, Clone)]
#[command(about = "Describes a snapshot as a renderable graph")]
pub struct GraphCommand {
    /// Snapshot to describe.
    #[command(flatten)]
    pub input: InputArgs,
    /// Where to write the description.
    #[command(flatten)]
    pub output: OutputArgs,
    /// Description format.
    #[arg(long, short = 'f', value_enum, default_value = "dot")]
    pub format: GraphFormat,
}

impl GraphCommand {
    /// Runs the subcommand.
    pub fn run(self, args: &GlobalArgs) -> UdagResult<()> {
        let describer = LayoutDescriber::new(args.layout_config()?);
        let dag = Dag::assemble(self.input.load()?);
        let spec = describer.describe(&dag);
        info!(target: "udag", blocks = dag.len(), edges = dag.edge_count(), "Described snapshot");

        let rendered = match self.format {
            GraphFormat::Dot => spec.dot().to_string(),
            GraphFormat::Json => {
                let mut json = serde_json::to_string_pretty(&spec)?;
                json.push('\n');
                json
            }
        };
        self.output.write(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use std::{ffi::OsStr, path::Path};

    const DUMP: &str = r#"(vec {
        record { height = 1 : nat; block_hash = blob "\aa"; difficulty = 1 : nat; children = vec { blob "\bb"; blob "\ff" }; prev_block_hash = blob "\00"; };
        record { height = 2 : nat; block_hash = blob "\bb"; difficulty = 3 : nat; children = vec {}; prev_block_hash = blob "\aa"; };
    })"#;

    fn run(dir: &Path, input: &str, format: GraphFormat) -> String {
        let path = dir.join("output.txt");
        std::fs::write(&path, input).unwrap();
        let output = dir.join("graph.out");
        let command = GraphCommand {
            input: InputArgs { input: path, ..Default::default() },
            output: OutputArgs { output: Some(output.clone()) },
            format,
        };
        command.run(&GlobalArgs::default()).unwrap();
        std::fs::read_to_string(output).unwrap()
    }

    #[test]
    fn test_graph_dot() {
        let dir = tempfile::tempdir().unwrap();
        let dot = run(dir.path(), DUMP, GraphFormat::Dot);
        assert!(dot.starts_with("digraph unstable_blocks {\n    rankdir=LR;\n"));
        assert!(dot.contains("    \"aa\" -> \"bb\";\n"));
        assert!(!dot.contains("\"ff\""));
        assert!(dot.contains("\"padding_top\" -> \"aa\" [style=invis];"));
        assert!(dot.contains("\"bb\" -> \"padding_bottom\" [style=invis];"));
    }

    #[test]
    fn test_graph_json() {
        let dir = tempfile::tempdir().unwrap();
        let json = run(dir.path(), DUMP, GraphFormat::Json);
        let spec: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(spec["nodes"].as_array().unwrap().len(), 4);
        assert_eq!(spec["edges"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_graph_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let dot = run(dir.path(), "(vec {})", GraphFormat::Dot);
        assert_eq!(dot, "digraph unstable_blocks {\n    rankdir=LR;\n}\n");
    }

    #[test]
    fn test_graph_from_command_line() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("output.txt");
        let output = dir.path().join("graph.dot");
        std::fs::write(&input, DUMP).unwrap();

        let cli = Cli::try_parse_from([
            OsStr::new("udag"),
            OsStr::new("graph"),
            input.as_os_str(),
            OsStr::new("-o"),
            output.as_os_str(),
        ])
        .unwrap();
        let Commands::Graph(graph) = cli.subcommand else { panic!("expected graph") };
        graph.run(&cli.global).unwrap();

        let dot = std::fs::read_to_string(output).unwrap();
        assert!(dot.contains("    \"aa\" -> \"bb\";\n"));
    }
}
