//! Markdown-to-HTML conversion for task bodies.
//!
//! Task bodies render without paragraph wrapping: a list item is already
//! its own block, so `<p>` tags are never emitted. Inline transforms
//! (emphasis, links, code spans, smart punctuation) still apply, and
//! paragraph breaks inside a body survive as blank lines.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Render one task body to HTML with paragraph wrapping suppressed.
#[must_use]
pub fn htmlify(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    let parser = Parser::new_ext(text, options);

    let mut events = Vec::new();
    let mut past_first_paragraph = false;
    for event in parser {
        match event {
            Event::Start(Tag::Paragraph) => {
                if past_first_paragraph {
                    events.push(Event::Text("\n\n".into()));
                }
                past_first_paragraph = true;
            }
            Event::End(TagEnd::Paragraph) => {}
            other => events.push(other),
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}
