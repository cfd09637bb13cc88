//! Snapshot scanning.

use crate::{BlockRecord, RecordSchema};
use regex::Regex;

lazy_static::lazy_static! {
    static ref RECORD_OPEN: Regex = Regex::new(r"\brecord\s*\{").expect("record opening pattern is valid");
}

/// Scans snapshot text for block records.
///
/// The decoder holds the record shapes it recognizes, in the order they are attempted at
/// every `record {` opening found in the text.
#[derive(Debug, Clone, Copy)]
pub struct RecordDecoder {
    schemas: &'static [RecordSchema],
}

impl Default for RecordDecoder {
    fn default() -> Self {
        Self::new(&RecordSchema::PRIORITY)
    }
}

impl RecordDecoder {
    /// Creates a decoder that tries `schemas` in order.
    pub const fn new(schemas: &'static [RecordSchema]) -> Self {
        Self { schemas }
    }

    /// Returns a lazy iterator over the records in `text`.
    pub const fn records<'a>(&self, text: &'a str) -> Records<'a> {
        Records { text, pos: 0, schemas: self.schemas, skipped: 0 }
    }

    /// Decodes every record in `text`, in order of appearance.
    pub fn decode(&self, text: &str) -> Vec<BlockRecord> {
        let mut records = self.records(text);
        let decoded: Vec<_> = records.by_ref().collect();
        debug!(target: "candid", decoded = decoded.len(), skipped = records.skipped(), "Decoded snapshot");
        decoded
    }
}

/// Decodes every record in `text` with the default decoder.
pub fn decode_records(text: &str) -> Vec<BlockRecord> {
    RecordDecoder::default().decode(text)
}

/// Iterator over the block records of a snapshot. See [`RecordDecoder::records`].
#[derive(Debug, Clone)]
pub struct Records<'a> {
    text: &'a str,
    pos: usize,
    schemas: &'static [RecordSchema],
    skipped: usize,
}

impl Records<'_> {
    /// Number of record openings passed over so far because they matched no known shape,
    /// or had a field that failed to decode.
    pub const fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for Records<'_> {
    type Item = BlockRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let open = RECORD_OPEN.find_at(self.text, self.pos)?;
            let candidate = &self.text[open.start()..];

            let Some((schema, len, record)) = self
                .schemas
                .iter()
                .find_map(|schema| schema.parse(candidate).map(|(len, r)| (schema, len, r)))
            else {
                debug!(target: "candid", offset = open.start(), "Skipping unrecognized record");
                self.skipped += 1;
                self.pos = open.end();
                continue;
            };

            self.pos = open.start() + len;
            match record {
                Ok(record) => {
                    trace!(target: "candid", ?schema, hash = %record.block_hash, "Decoded record");
                    return Some(record);
                }
                Err(err) => {
                    debug!(target: "candid", offset = open.start(), %err, "Dropping record");
                    self.skipped += 1;
                }
            }
        }
    }
}
