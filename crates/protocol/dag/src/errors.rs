//! Error types for layout configuration.

use thiserror::Error;

/// A color that is not written as `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}, expected `#rrggbb`")]
pub struct ColorParseError(pub String);
