//! Snapshot statistics.

use crate::Dag;
use serde::Serialize;
use udag_candid::RecordSchema;

/// Aggregate figures for one snapshot, in the spirit of the canister's
/// `unstable_blocks_*` metrics.
///
/// Every figure is computed from the node set alone, without walking edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DagSummary {
    /// Distinct blocks in the snapshot.
    pub blocks: usize,
    /// Parent to child links between blocks of the snapshot.
    pub edges: usize,
    /// Blocks without a child in the snapshot.
    pub tips: usize,
    /// Blocks whose parent is not in the snapshot.
    pub roots: usize,
    /// Lowest height in the snapshot.
    pub min_height: Option<u64>,
    /// Highest height in the snapshot.
    pub max_height: Option<u64>,
    /// Number of heights spanned, `max_height - min_height + 1`. Zero when empty.
    pub depth: u64,
    /// Lowest difficulty in the snapshot.
    pub min_difficulty: Option<u128>,
    /// Highest difficulty in the snapshot.
    pub max_difficulty: Option<u128>,
    /// Blocks decoded from the record shape carrying `no_difficulty_counter`.
    pub counter_records: usize,
}

impl DagSummary {
    /// Computes the summary of `dag`.
    pub fn from_dag(dag: &Dag) -> Self {
        let mut summary = Self { blocks: dag.len(), edges: dag.edge_count(), ..Default::default() };
        for node in dag.iter() {
            let record = node.record();
            if node.is_tip() {
                summary.tips += 1;
            }
            if !dag.contains(&record.prev_block_hash) {
                summary.roots += 1;
            }
            if RecordSchema::of(record) == RecordSchema::WithCounter {
                summary.counter_records += 1;
            }
            summary.min_height = Some(summary.min_height.map_or(record.height, |h| h.min(record.height)));
            summary.max_height = Some(summary.max_height.map_or(record.height, |h| h.max(record.height)));
            summary.min_difficulty =
                Some(summary.min_difficulty.map_or(record.difficulty, |d| d.min(record.difficulty)));
            summary.max_difficulty =
                Some(summary.max_difficulty.map_or(record.difficulty, |d| d.max(record.difficulty)));
        }
        if let (Some(min), Some(max)) = (summary.min_height, summary.max_height) {
            summary.depth = (max - min).saturating_add(1);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use udag_candid::BlockRecord;

    fn block(hash: &str, prev: &str, height: u64, difficulty: u128, children: &[&str]) -> BlockRecord {
        BlockRecord {
            height,
            block_hash: hash.to_string(),
            difficulty,
            children: children.iter().map(|c| c.to_string()).collect(),
            no_difficulty_counter: (height % 2 == 0).then_some(height),
            prev_block_hash: prev.to_string(),
        }
    }

    #[test]
    fn test_fork_summary() {
        let dag = Dag::assemble([
            block("a", "z", 100, 10, &["b", "c", "x"]),
            block("b", "a", 101, 12, &["d"]),
            block("c", "a", 101, 9, &[]),
            block("d", "b", 102, 11, &[]),
        ]);
        let summary = dag.summary();
        assert_eq!(
            summary,
            DagSummary {
                blocks: 4,
                edges: 3,
                tips: 2,
                roots: 1,
                min_height: Some(100),
                max_height: Some(102),
                depth: 3,
                min_difficulty: Some(9),
                max_difficulty: Some(12),
                counter_records: 2,
            }
        );
    }

    #[test]
    fn test_depth_saturates_on_full_height_range() {
        let dag = Dag::assemble([block("a", "z", 0, 1, &["b"]), block("b", "a", u64::MAX, 2, &[])]);
        let summary = dag.summary();
        assert_eq!(summary.min_height, Some(0));
        assert_eq!(summary.max_height, Some(u64::MAX));
        assert_eq!(summary.depth, u64::MAX);
    }

    #[test]
    fn test_single_block_depth() {
        assert_eq!(Dag::assemble([block("a", "z", 7, 1, &[])]).summary().depth, 1);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(Dag::default().summary(), DagSummary::default());
    }
}
