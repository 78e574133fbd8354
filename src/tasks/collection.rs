//! The prioritized task collection.

use super::Priority;

/// Tasks grouped by priority, with file order preserved within each bucket.
///
/// All three buckets exist from construction onward, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrioritizedTasks {
    // Indexed by the Priority discriminant, which matches display order.
    buckets: [Vec<String>; 3],
}

impl PrioritizedTasks {
    /// Create an empty collection with all three buckets present.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task body to the given priority's bucket.
    pub fn push(&mut self, priority: Priority, body: String) {
        self.buckets[priority as usize].push(body);
    }

    /// The task bodies for one priority, in original file order.
    #[must_use]
    pub fn bucket(&self, priority: Priority) -> &[String] {
        &self.buckets[priority as usize]
    }

    /// Total number of classified tasks across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether no tasks were classified at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Iterate over every task in display order: all important tasks
    /// first, then normal, then optional, file order within each.
    pub fn iter(&self) -> impl Iterator<Item = (Priority, &str)> + '_ {
        Priority::ALL.into_iter().flat_map(move |priority| {
            self.bucket(priority)
                .iter()
                .map(move |body| (priority, body.as_str()))
        })
    }
}
