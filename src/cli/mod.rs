//! Command-line interface for accomplish.

mod args;

pub use args::Cli;
