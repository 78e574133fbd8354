//! Task file loading and block classification.

use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{PrioritizedTasks, Priority};

static BLOCK_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{2,}").unwrap_or_else(|e| panic!("Invalid block separator regex: {e}"))
});

/// Load and classify the task file at `path`.
///
/// A missing file is not an error: it yields an empty collection with
/// all three buckets present.
///
/// # Errors
///
/// Returns any I/O error other than the file not existing.
pub fn load_tasklist(path: &Path) -> io::Result<PrioritizedTasks> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(PrioritizedTasks::new());
        }
        Err(e) => return Err(e),
    };
    Ok(prioritize(split_blocks(&contents)))
}

/// Split file contents into candidate task blocks on runs of two or more
/// newlines. Empty blocks from the split are discarded so that leading or
/// trailing blank lines never become spurious tasks.
fn split_blocks(contents: &str) -> impl Iterator<Item = &str> {
    BLOCK_SEPARATOR
        .split(contents)
        .filter(|block| !block.is_empty())
}

/// Classify raw task blocks into the prioritized collection.
///
/// Each block is stripped of surrounding whitespace, then its first
/// character is matched against the priority markers. On a match the
/// marker and the separator character after it are removed and the rest
/// of the block is kept verbatim as the body, internal newlines included.
/// Blocks with no recognized marker are dropped, not reported.
pub fn prioritize<'a, I>(blocks: I) -> PrioritizedTasks
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tasks = PrioritizedTasks::new();
    for block in blocks {
        let mut chars = block.trim().chars();
        let Some(marker) = chars.next() else { continue };
        let Some(priority) = Priority::from_marker(marker) else {
            continue;
        };
        // Skip the separator after the marker. A bare marker leaves an
        // empty body, which is still a valid task.
        chars.next();
        tasks.push(priority, chars.as_str().to_string());
    }
    tasks
}
