//! Task loading and classification.
//!
//! This is the core of accomplish: a task file is split into blocks on
//! blank-line boundaries and each block is classified by its leading
//! priority marker into one of three ordered buckets.

mod collection;
mod loader;
mod priority;

pub use collection::PrioritizedTasks;
pub use loader::{load_tasklist, prioritize};
pub use priority::Priority;
