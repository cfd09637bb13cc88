//! Snapshot DAG assembly.

use crate::DagSummary;
use std::collections::{HashMap, HashSet, hash_map::Entry};
use udag_candid::BlockRecord;

/// A block together with its children that are present in the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DagNode {
    record: BlockRecord,
    children: Vec<String>,
}

impl DagNode {
    /// The decoded record this node was built from.
    pub const fn record(&self) -> &BlockRecord {
        &self.record
    }

    /// The block hash.
    pub fn hash(&self) -> &str {
        &self.record.block_hash
    }

    /// Hashes of the children found in the snapshot, in source order.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Returns `true` if no child of this block is present in the snapshot.
    pub fn is_tip(&self) -> bool {
        self.children.is_empty()
    }
}

/// The blocks of one snapshot, indexed by hash.
///
/// Besides the hash index, the DAG remembers the order in which hashes were first decoded.
/// Iteration and edge enumeration follow that order, which keeps everything derived from a
/// snapshot deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dag {
    nodes: HashMap<String, DagNode>,
    order: Vec<String>,
}

impl Dag {
    /// Assembles a DAG from records in decode order.
    ///
    /// When several records share a hash, the last one wins: its fields and children replace
    /// the earlier record's, while the hash keeps the position where it was first decoded.
    /// Child references to hashes outside the snapshot are dropped without creating a node.
    pub fn assemble(records: impl IntoIterator<Item = BlockRecord>) -> Self {
        let mut by_hash: HashMap<String, BlockRecord> = HashMap::new();
        let mut order = Vec::new();
        for record in records {
            match by_hash.entry(record.block_hash.clone()) {
                Entry::Occupied(mut entry) => {
                    debug!(target: "dag", hash = %entry.key(), "Duplicate block hash, keeping the later record");
                    entry.insert(record);
                }
                Entry::Vacant(entry) => {
                    order.push(entry.key().clone());
                    entry.insert(record);
                }
            }
        }

        let mut dropped = 0usize;
        let resolved: Vec<Vec<String>> = order
            .iter()
            .map(|hash| {
                let mut seen = HashSet::new();
                by_hash[hash]
                    .children
                    .iter()
                    .filter(|child| {
                        let present = by_hash.contains_key(child.as_str());
                        if !present {
                            trace!(target: "dag", parent = %hash, %child, "Dropping child outside the snapshot");
                            dropped += 1;
                        }
                        present && seen.insert(child.as_str())
                    })
                    .cloned()
                    .collect()
            })
            .collect();

        let mut nodes = HashMap::with_capacity(order.len());
        for (hash, children) in order.iter().zip(resolved) {
            if let Some(record) = by_hash.remove(hash) {
                nodes.insert(hash.clone(), DagNode { record, children });
            }
        }

        let dag = Self { nodes, order };
        debug!(target: "dag", nodes = dag.len(), edges = dag.edge_count(), dropped, "Assembled snapshot");
        dag
    }

    /// Returns the node for `hash`, if it is part of the snapshot.
    pub fn get(&self, hash: &str) -> Option<&DagNode> {
        self.nodes.get(hash)
    }

    /// Returns `true` if `hash` is part of the snapshot.
    pub fn contains(&self, hash: &str) -> bool {
        self.nodes.contains_key(hash)
    }

    /// Number of distinct blocks.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the snapshot holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Block hashes in first-decoded order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Iterates the nodes in first-decoded order.
    pub fn iter(&self) -> impl Iterator<Item = &DagNode> + '_ {
        self.order.iter().filter_map(|hash| self.nodes.get(hash))
    }

    /// The first decoded block.
    pub fn first(&self) -> Option<&DagNode> {
        self.order.first().and_then(|hash| self.nodes.get(hash))
    }

    /// The last decoded block.
    pub fn last(&self) -> Option<&DagNode> {
        self.order.last().and_then(|hash| self.nodes.get(hash))
    }

    /// Iterates the `(parent, child)` edges, parents in first-decoded order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.iter().flat_map(|node| node.children.iter().map(move |child| (node.hash(), child.as_str())))
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.children.len()).sum()
    }

    /// Summarizes the snapshot.
    pub fn summary(&self) -> DagSummary {
        DagSummary::from_dag(self)
    }
}
