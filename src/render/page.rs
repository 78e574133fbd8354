//! HTML page rendering.
//!
//! The page template is embedded as a string and rendered with
//! Handlebars. Task bodies arrive pre-rendered to HTML and are injected
//! unescaped; every other value goes through normal escaping.

use handlebars::Handlebars;
use serde::Serialize;

use crate::config::{Author, AUTHOR, TITLE};
use crate::error::AccomplishError;
use crate::tasks::{PrioritizedTasks, Priority};

use super::markdown::htmlify;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN"
"http://www.w3.org/TR/html4/strict.dtd">
<html>
<head>
<title>{{title}}</title>
<meta http-equiv="Content-Type" content="text/html;charset=utf-8">
<link rel="stylesheet" type="text/css" href="/style.css">
</head>
<body>
<h1>{{title}}</h1>
<ol id="tasklist">
{{#each tasks}}<li class="{{label}}">{{{body}}}</li>
{{/each}}</ol>
<h2>Legend</h2>
<ul>
{{#each legend}}<li class="{{this}}">{{this}}</li>
{{/each}}</ul>
<address class="vcard">
<a class="url fn" href="{{author.url}}">{{author.name}}</a>
<a class="email" href="mailto:{{author.email}}">{{author.email}}</a>
</address>
</body>
</html>
"#;

/// Template context for the index page.
#[derive(Debug, Serialize)]
struct PageContext {
    title: &'static str,
    tasks: Vec<TaskEntry>,
    legend: Vec<&'static str>,
    author: Author,
}

/// One rendered task item: its priority label (used as the CSS class)
/// and its body converted to HTML.
#[derive(Debug, Serialize)]
struct TaskEntry {
    label: &'static str,
    body: String,
}

/// Render the index page for a classified task collection.
///
/// Tasks appear in priority display order (important, normal, optional),
/// keeping file order within each priority.
///
/// # Errors
///
/// Returns an error if the embedded template fails to compile or render.
pub fn render_index(tasks: &PrioritizedTasks) -> Result<String, AccomplishError> {
    let mut registry = Handlebars::new();
    registry.register_template_string("index", INDEX_TEMPLATE)?;

    let context = PageContext {
        title: TITLE,
        tasks: tasks
            .iter()
            .map(|(priority, body)| TaskEntry {
                label: priority.label(),
                body: htmlify(body),
            })
            .collect(),
        legend: Priority::ALL.iter().map(|p| p.label()).collect(),
        author: AUTHOR,
    };

    Ok(registry.render("index", &context)?)
}
