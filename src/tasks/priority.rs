//! The fixed priority table.

use std::fmt;

/// Task priority, determined by the leading marker character of a block.
///
/// The set is closed and ordered: rendered output always lists important
/// tasks first, then normal, then optional, regardless of input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Marked with `!`.
    Important,
    /// Marked with `*`.
    Normal,
    /// Marked with `?`.
    Optional,
}

impl Priority {
    /// All priorities in display order.
    pub const ALL: [Self; 3] = [Self::Important, Self::Normal, Self::Optional];

    /// Look up the priority for a leading marker character.
    #[must_use]
    pub const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '!' => Some(Self::Important),
            '*' => Some(Self::Normal),
            '?' => Some(Self::Optional),
            _ => None,
        }
    }

    /// The marker character that tags a task with this priority.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Important => '!',
            Self::Normal => '*',
            Self::Optional => '?',
        }
    }

    /// Display label, also used as the CSS class in rendered output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Important => "important",
            Self::Normal => "normal",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
