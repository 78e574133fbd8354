//! accomplish - As minimal a task list as possible
//!
//! This crate renders a plain-text task file into a static HTML page with
//! an accompanying stylesheet. Tasks are blank-line-separated blocks,
//! each prefixed with a priority marker (`!`, `*`, or `?`).

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod site;
pub mod tasks;

pub use cli::Cli;
pub use error::AccomplishError;
pub use tasks::{PrioritizedTasks, Priority};
