//! Contains subcommands for the udag binary.

mod decode;
pub use decode::DecodeCommand;

mod graph;
pub use graph::{GraphCommand, GraphFormat};

mod summary;
pub use summary::SummaryCommand;
