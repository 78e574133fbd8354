//! Error types for accomplish.

use thiserror::Error;

/// Errors that can occur while generating the site.
#[derive(Debug, Error)]
pub enum AccomplishError {
    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The embedded page template failed to compile.
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Rendering the page template failed.
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}
