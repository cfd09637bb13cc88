//! Decoded block records and their interchange wrapper.

use serde::{Deserialize, Serialize};

/// A single unstable block as printed by the canister.
///
/// Hash fields hold canonical hex strings (see [`crate::decode_blob`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Chain height of the block.
    pub height: u64,
    /// Hash of the block. Unique within one snapshot.
    pub block_hash: String,
    /// Proof-of-work weight of the block.
    pub difficulty: u128,
    /// Candidate child hashes in source order. They may reference blocks outside the snapshot.
    pub children: Vec<String>,
    /// Counter only printed by the newer record schema. `None` for the legacy schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_difficulty_counter: Option<u64>,
    /// Hash of the parent block, which may be outside the snapshot.
    pub prev_block_hash: String,
}

impl BlockRecord {
    /// Returns the first `len` characters of the block hash, for display.
    pub fn short_hash(&self, len: usize) -> &str {
        let end = self.block_hash.char_indices().nth(len).map_or(self.block_hash.len(), |(i, _)| i);
        &self.block_hash[..end]
    }
}

/// A decoded snapshot in its interchange form, `{"data": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Records in decode order.
    pub data: Vec<BlockRecord>,
}

impl From<Vec<BlockRecord>> for Snapshot {
    fn from(data: Vec<BlockRecord>) -> Self {
        Self { data }
    }
}
