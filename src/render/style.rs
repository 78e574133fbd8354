//! The fixed stylesheet written alongside the page.

/// Contents of `style.css`. The priority backgrounds here must match the
/// labels used as CSS classes on rendered task items.
pub const STYLESHEET: &str = "\
body {
  font-size: 90%;
  font-family: 'DejaVu Sans', 'Bitstream Vera Sans', Verdana, sans-serif;
  line-height: 1.5;
  padding: 0 5em 0 5em;
}
#tasklist {
  -moz-column-width: 28em;
  -moz-column-gap: 1.5em;
  -webkit-column-width: 28em;
  -webkit-column-gap: 1.5em;
}
ol li {
  margin: 0 1em 0.3em 0;
  padding: 0.1em 0.1em 0.1em 0.4em;
}
ul {
  list-style-type: none;
  padding: 0;
}
ul li {
  display: inline;
}
a {
  background: #ffb;
  color: #000;
}
h1, h2 {
  font-family: Georgia, 'DejaVu Serif', 'Bitstream Vera Serif', serif;
  font-weight: normal;
}
address {
  font-family: monospace;
  margin: 2em 0 0 0;
}
.important {
  background: #fdb;
}
.normal {
  background: #fec;
}
.optional {
  background: #ffd;
}
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::Priority;

    #[test]
    fn test_priority_classes_covered() {
        for priority in Priority::ALL {
            assert!(STYLESHEET.contains(&format!(".{} {{", priority.label())));
        }
    }

    #[test]
    fn test_priority_backgrounds() {
        assert!(STYLESHEET.contains("#fdb"));
        assert!(STYLESHEET.contains("#fec"));
        assert!(STYLESHEET.contains("#ffd"));
        assert!(STYLESHEET.contains("#ffb"));
    }
}
