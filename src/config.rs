//! Fixed site configuration.
//!
//! There is deliberately no config file and no environment overrides:
//! the title, byline, and path conventions are compiled in. Edit this
//! file and rebuild to change them.

use serde::Serialize;

/// Document title, used for both `<title>` and the page heading.
pub const TITLE: &str = "Research Task List";

/// Author byline rendered at the bottom of the page.
pub const AUTHOR: Author = Author {
    name: "Eivind Uggedal",
    email: "eu@redflavor.com",
    url: "http://redflavor.com",
};

/// Task file read from the current directory.
pub const TASKS_FILE: &str = "tasks";

/// Output directory, recreated fresh on every run.
pub const OUTPUT_DIR: &str = "public";

/// Name, email, and homepage for the page byline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Author {
    /// Display name.
    pub name: &'static str,
    /// Email address, rendered as a `mailto:` link.
    pub email: &'static str,
    /// Homepage URL.
    pub url: &'static str,
}
