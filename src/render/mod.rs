//! Rendering of classified tasks into the HTML and CSS artifacts.

mod markdown;
mod page;
mod style;

pub use markdown::htmlify;
pub use page::render_index;
pub use style::STYLESHEET;
