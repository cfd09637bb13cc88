//! Decode Subcommand

use crate::{
    error::UdagResult,
    flags::{GlobalArgs, InputArgs, OutputArgs},
};
use clap::Parser;
use udag_candid::Snapshot;

/// The `decode` Subcommand
///
/// The `decode` subcommand converts a snapshot into the `{"data": [...]}` JSON interchange
/// format read by the reporting scripts.
///
/// # Usage
///
/// ```sh
/// udag decode ./unstable_blocks/output.txt -o ./unstable_blocks/output.json
/// ```
#[derive(Parser, Default, Debug, Clone)]
#[command(about = "Decodes a snapshot into JSON block records")]
pub struct DecodeCommand {
    /// Snapshot to decode.
    #[command(flatten)]
    pub input: InputArgs,
    /// Where to write the JSON.
    #[command(flatten)]
    pub output: OutputArgs,
}

impl DecodeCommand {
    /// Runs the subcommand.
    pub fn run(self, _args: &GlobalArgs) -> UdagResult<()> {
        let snapshot = Snapshot::from(self.input.load()?);
        let mut json = serde_json::to_string_pretty(&snapshot)?;
        json.push('\n');
        self.output.write(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("output.txt");
        let output = dir.path().join("output.json");
        std::fs::write(
            &input,
            r#"(vec { record { height = 1_000 : nat; block_hash = blob "\0a"; difficulty = 7 : nat; children = vec {}; no_difficulty_counter = 3 : nat; prev_block_hash = blob "\09"; } })"#,
        )
        .unwrap();

        let command = DecodeCommand {
            input: InputArgs { input, ..Default::default() },
            output: OutputArgs { output: Some(output.clone()) },
        };
        command.run(&GlobalArgs::default()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": [{
                    "height": 1000,
                    "block_hash": "0a",
                    "difficulty": 7,
                    "children": [],
                    "no_difficulty_counter": 3,
                    "prev_block_hash": "09"
                }]
            })
        );
    }

    #[test]
    fn test_unreadable_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.json");
        let command = DecodeCommand {
            input: InputArgs { input: dir.path().join("missing.txt"), ..Default::default() },
            output: OutputArgs { output: Some(output.clone()) },
        };
        assert!(command.run(&GlobalArgs::default()).is_err());
        assert!(!output.exists());
    }
}
