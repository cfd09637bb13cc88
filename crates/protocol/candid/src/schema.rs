//! Recognized record shapes.

use crate::{BlockRecord, FieldError, decode_blob};
use core::str::FromStr;
use regex::{Captures, Regex};

const HEIGHT: &str = r#"\Arecord\s*\{\s*height\s*=\s*(?P<height>[\d_]+)\s*:\s*nat\d*\s*;\s*"#;
const BLOCK_HASH: &str = r#"block_hash\s*=\s*blob\s*"(?P<block_hash>[^"]*)"\s*;\s*"#;
const DIFFICULTY: &str = r#"difficulty\s*=\s*(?P<difficulty>[\d_]+)\s*:\s*nat\d*\s*;\s*"#;
const CHILDREN: &str = r#"children\s*=\s*vec\s*\{(?P<children>[^}]*)\}\s*;\s*"#;
const COUNTER: &str =
    r#"no_difficulty_counter\s*=\s*(?P<counter>[\d_]+)\s*:\s*nat\d*\s*;\s*"#;
const PREV_BLOCK_HASH: &str = r#"prev_block_hash\s*=\s*blob\s*"(?P<prev_block_hash>[^"]*)"\s*;?\s*\}"#;

lazy_static::lazy_static! {
    static ref WITH_COUNTER: Regex = RecordSchema::WithCounter.compile();
    static ref LEGACY: Regex = RecordSchema::Legacy.compile();
    static ref CHILD_BLOB: Regex =
        Regex::new(r#"blob\s*"([^"]*)""#).expect("child blob pattern is valid");
}

/// The block record shapes printed by different canister versions.
///
/// Both shapes share every field except `no_difficulty_counter`, which newer canisters print
/// between `children` and `prev_block_hash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordSchema {
    /// Newer shape carrying `no_difficulty_counter`.
    WithCounter,
    /// Older shape without the counter.
    Legacy,
}

impl RecordSchema {
    /// Shapes in the order they are attempted: richest first.
    pub const PRIORITY: [Self; 2] = [Self::WithCounter, Self::Legacy];

    /// Returns the schema a decoded record was read with.
    pub const fn of(record: &BlockRecord) -> Self {
        match record.no_difficulty_counter {
            Some(_) => Self::WithCounter,
            None => Self::Legacy,
        }
    }

    fn compile(self) -> Regex {
        let pattern = match self {
            Self::WithCounter => {
                [HEIGHT, BLOCK_HASH, DIFFICULTY, CHILDREN, COUNTER, PREV_BLOCK_HASH].concat()
            }
            Self::Legacy => [HEIGHT, BLOCK_HASH, DIFFICULTY, CHILDREN, PREV_BLOCK_HASH].concat(),
        };
        Regex::new(&pattern).expect("record pattern is valid")
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::WithCounter => &*WITH_COUNTER,
            Self::Legacy => &*LEGACY,
        }
    }

    /// Matches a record of this shape at the very start of `text`.
    ///
    /// Returns `None` if the shape does not match. Otherwise returns the byte length of the
    /// matched record together with the decoded record, or the first field that failed to
    /// decode.
    pub fn parse(self, text: &str) -> Option<(usize, Result<BlockRecord, FieldError>)> {
        let captures = self.pattern().captures(text)?;
        let len = captures.get(0).map_or(0, |m| m.end());
        Some((len, self.decode(&captures)))
    }

    fn decode(self, captures: &Captures<'_>) -> Result<BlockRecord, FieldError> {
        let no_difficulty_counter = match self {
            Self::WithCounter => Some(parse_nat("no_difficulty_counter", &captures["counter"])?),
            Self::Legacy => None,
        };
        Ok(BlockRecord {
            height: parse_nat("height", &captures["height"])?,
            block_hash: decode_blob(&captures["block_hash"]),
            difficulty: parse_nat("difficulty", &captures["difficulty"])?,
            children: CHILD_BLOB
                .captures_iter(&captures["children"])
                .map(|child| decode_blob(&child[1]))
                .collect(),
            no_difficulty_counter,
            prev_block_hash: decode_blob(&captures["prev_block_hash"]),
        })
    }
}

/// Parses a Candid `nat` literal, dropping `_` digit group separators.
fn parse_nat<T>(field: &'static str, raw: &str) -> Result<T, FieldError>
where
    T: FromStr<Err = core::num::ParseIntError>,
{
    let digits: String = raw.chars().filter(|c| *c != '_').collect();
    digits.parse().map_err(|source| FieldError::InvalidInteger {
        field,
        value: raw.to_string(),
        source,
    })
}
