//! Site generation.
//!
//! One pass: clear the output directory, write the stylesheet, load and
//! classify tasks, render the page, write it. Interrupting a run can
//! leave the output directory partially populated; rerunning repairs it.

use std::fs;
use std::path::Path;

use crate::config::{OUTPUT_DIR, TASKS_FILE};
use crate::error::AccomplishError;
use crate::render::{render_index, STYLESHEET};
use crate::tasks::load_tasklist;

/// Run the full generate cycle in the current directory.
///
/// # Errors
///
/// Returns an error on filesystem failures or if page rendering fails.
pub fn generate() -> Result<(), AccomplishError> {
    generate_in(Path::new("."))
}

/// Run the full generate cycle rooted at `root`: reads `root/tasks` and
/// writes into `root/public`.
///
/// # Errors
///
/// Returns an error on filesystem failures or if page rendering fails.
pub fn generate_in(root: &Path) -> Result<(), AccomplishError> {
    let output_dir = root.join(OUTPUT_DIR);
    clean_output(&output_dir)?;

    write_file(&output_dir, "style.css", STYLESHEET)?;

    let tasks = load_tasklist(&root.join(TASKS_FILE))?;
    let index = render_index(&tasks)?;
    write_file(&output_dir, "index.html", &index)?;

    Ok(())
}

/// Remove any previous output and recreate the directory empty, so no
/// stale files survive from an earlier run.
fn clean_output(dir: &Path) -> Result<(), AccomplishError> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write `data` into `dir` under `name`, ensuring a trailing newline.
fn write_file(dir: &Path, name: &str, data: &str) -> Result<(), AccomplishError> {
    let mut contents = data.to_string();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    fs::write(dir.join(name), contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_writes_both_artifacts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tasks"), "! Buy milk\n\n* Wash car\n").unwrap();

        generate_in(dir.path()).unwrap();

        let index = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        let style = fs::read_to_string(dir.path().join("public/style.css")).unwrap();
        assert!(index.contains(r#"<li class="important">Buy milk</li>"#));
        assert!(index.contains(r#"<li class="normal">Wash car</li>"#));
        assert!(style.contains(".important"));
    }

    #[test]
    fn test_missing_tasks_file_renders_empty_list() {
        let dir = TempDir::new().unwrap();

        generate_in(dir.path()).unwrap();

        let index = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(index.contains("<ol id=\"tasklist\">\n</ol>"));
        assert!(index.contains("<h2>Legend</h2>"));
    }

    #[test]
    fn test_stale_output_is_cleared() {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(public.join("stale.html"), "old").unwrap();

        generate_in(dir.path()).unwrap();

        assert!(!public.join("stale.html").exists());
        assert!(public.join("index.html").exists());
    }

    #[test]
    fn test_regeneration_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tasks"), "? Maybe nap\n").unwrap();

        generate_in(dir.path()).unwrap();
        let first_index = fs::read(dir.path().join("public/index.html")).unwrap();
        let first_style = fs::read(dir.path().join("public/style.css")).unwrap();

        generate_in(dir.path()).unwrap();
        assert_eq!(
            fs::read(dir.path().join("public/index.html")).unwrap(),
            first_index
        );
        assert_eq!(
            fs::read(dir.path().join("public/style.css")).unwrap(),
            first_style
        );
    }

    #[test]
    fn test_written_files_end_with_newline() {
        let dir = TempDir::new().unwrap();

        generate_in(dir.path()).unwrap();

        let index = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        let style = fs::read_to_string(dir.path().join("public/style.css")).unwrap();
        assert!(index.ends_with('\n'));
        assert!(style.ends_with('\n'));
    }
}
