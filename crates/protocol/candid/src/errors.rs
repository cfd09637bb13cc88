//! Error types for the record decoder.

use core::num::ParseIntError;
use thiserror::Error;

/// A field of an otherwise well-shaped record that could not be decoded.
///
/// The decoder never surfaces these to callers. A record with a bad field is dropped as a
/// whole and decoding continues with the next record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// An integer literal was not a valid number for its field, e.g. it overflowed.
    #[error("invalid integer for `{field}`: {value:?}")]
    InvalidInteger {
        /// Name of the offending field.
        field: &'static str,
        /// The literal as it appeared in the dump.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: ParseIntError,
    },
}
