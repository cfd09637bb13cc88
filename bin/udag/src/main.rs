//! The `udag` binary: decodes unstable block dumps and describes them as a DAG.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use clap::Parser;

pub mod cli;
pub mod commands;
pub mod error;
pub mod flags;

fn main() {
    udag_cli::backtrace::enable();
    if let Err(err) = cli::Cli::parse().run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
