//! CLI flags.

mod globals;
pub use globals::GlobalArgs;

mod input;
pub use input::{InputArgs, InputFormat};

mod output;
pub use output::OutputArgs;
