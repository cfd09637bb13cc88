//! Summary Subcommand

use crate::{
    error::UdagResult,
    flags::{GlobalArgs, InputArgs, OutputArgs},
};
use clap::Parser;
use tabled::Tabled;
use udag_dag::{Dag, DagSummary};

/// The `summary` Subcommand
///
/// The `summary` subcommand prints block, tip and depth counts of a snapshot.
///
/// # Usage
///
/// ```sh
/// udag summary ./unstable_blocks/output.txt
/// ```
#[derive(Parser, Default, Debug, Clone)]
#[command(about = "Prints statistics of a snapshot")]
pub struct SummaryCommand {
    /// Snapshot to summarize.
    #[command(flatten)]
    pub input: InputArgs,
    /// Where to write the summary.
    #[command(flatten)]
    pub output: OutputArgs,
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// A row of the summary table.
#[derive(Tabled, Debug, Clone, PartialEq, Eq)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl SummaryCommand {
    /// Runs the subcommand.
    pub fn run(self, _args: &GlobalArgs) -> UdagResult<()> {
        let summary = Dag::assemble(self.input.load()?).summary();
        let rendered = if self.json {
            let mut json = serde_json::to_string_pretty(&summary)?;
            json.push('\n');
            json
        } else {
            let mut table = tabled::Table::new(rows(&summary));
            table.with(tabled::settings::Style::modern());
            format!("{table}\n")
        };
        self.output.write(&rendered)
    }
}

fn rows(summary: &DagSummary) -> Vec<SummaryRow> {
    fn opt<T: ToString>(value: Option<T>) -> String {
        value.map_or_else(|| "-".to_string(), |v| v.to_string())
    }
    let row = |metric, value| SummaryRow { metric, value };
    vec![
        row("blocks", summary.blocks.to_string()),
        row("edges", summary.edges.to_string()),
        row("tips", summary.tips.to_string()),
        row("roots", summary.roots.to_string()),
        row("min height", opt(summary.min_height)),
        row("max height", opt(summary.max_height)),
        row("depth", summary.depth.to_string()),
        row("min difficulty", opt(summary.min_difficulty)),
        row("max difficulty", opt(summary.max_difficulty)),
        row("counter records", summary.counter_records.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows() {
        let summary = DagSummary { blocks: 2, min_height: Some(5), ..Default::default() };
        let rows = rows(&summary);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], SummaryRow { metric: "blocks", value: "2".to_string() });
        assert_eq!(rows[4].value, "5");
        assert_eq!(rows[5].value, "-");
    }

    #[test]
    fn test_summary_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("output.txt");
        let output = dir.path().join("summary.json");
        std::fs::write(
            &input,
            r#"record { height = 4 : nat; block_hash = blob "\04"; difficulty = 2 : nat; children = vec {}; prev_block_hash = blob "\03"; }"#,
        )
        .unwrap();

        let command = SummaryCommand {
            input: InputArgs { input, ..Default::default() },
            output: OutputArgs { output: Some(output.clone()) },
            json: true,
        };
        command.run(&GlobalArgs::default()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["blocks"], 1);
        assert_eq!(json["tips"], 1);
        assert_eq!(json["roots"], 1);
        assert_eq!(json["depth"], 1);
    }

    #[test]
    fn test_summary_table() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("output.txt");
        let output = dir.path().join("summary.txt");
        std::fs::write(&input, "").unwrap();

        let command = SummaryCommand {
            input: InputArgs { input, ..Default::default() },
            output: OutputArgs { output: Some(output.clone()) },
            json: false,
        };
        command.run(&GlobalArgs::default()).unwrap();

        let table = std::fs::read_to_string(output).unwrap();
        assert!(table.contains("Metric"));
        assert!(table.contains("counter records"));
    }
}
