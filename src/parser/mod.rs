//! Markdown parsing and section extraction.
//!
//! This module splits a markdown document into a title (the first `#`
//! heading) and an ordered mapping of `##` headings to their body text.
//! Deeper headings are not split out; they stay inside the body of the
//! section that contains them.

mod document;
pub mod images;
pub mod output;
pub mod utils;

pub use document::{DEFAULT_TITLE, Document, FALLBACK_SECTION, Sections};
pub use images::{ImageReference, extract_image};
pub use output::{DocumentOutput, SectionOutput};

use std::path::Path;
use utils::{section_heading, title_heading};

/// Load a markdown file and parse it.
///
/// Loading never fails: a missing or undecodable file yields an empty
/// [`Document`]. Use [`crate::input::try_load`] when the reason matters.
pub fn parse_file(path: &Path) -> Document {
    parse_markdown(&crate::input::load(path))
}

/// Parse markdown content into a [`Document`].
pub fn parse_markdown(content: &str) -> Document {
    let (title, sections) = parse(content);
    Document::new(content.to_string(), title, sections)
}

/// Parse markdown content into its title and sections.
///
/// Returns `("", {})` for blank input. When the content has no `##`
/// headings the mapping holds a single [`FALLBACK_SECTION`] entry with
/// everything except the title line.
///
/// Duplicate headings keep the position of their first occurrence but the
/// body of their last one; the earlier body is discarded.
///
/// # Examples
///
/// ```
/// use mdexplorer::parser::parse;
///
/// let (title, sections) = parse("# Doc\n## Intro\nHello\n## Usage\n- step1\n");
/// assert_eq!(title, "Doc");
/// assert_eq!(sections["Intro"], "Hello");
/// assert_eq!(sections["Usage"], "- step1");
/// ```
pub fn parse(content: &str) -> (String, Sections) {
    if content.trim().is_empty() {
        return (String::new(), Sections::new());
    }

    let lines: Vec<&str> = content.split('\n').collect();

    let title = lines
        .iter()
        .find_map(|line| title_heading(line))
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let mut sections = Sections::new();
    let mut current: Option<&str> = None;
    let mut body: Vec<&str> = Vec::new();

    for line in &lines {
        if let Some(heading) = section_heading(line) {
            if let Some(name) = current {
                insert_section(&mut sections, name, &body);
            }
            current = Some(heading);
            body.clear();
        } else if current.is_some() {
            body.push(line);
        }
    }

    if let Some(name) = current {
        insert_section(&mut sections, name, &body);
    }

    if sections.is_empty() {
        let mut skipped_title = false;
        let rest: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| {
                if !skipped_title && title_heading(line).is_some() {
                    skipped_title = true;
                    return false;
                }
                true
            })
            .collect();
        sections.insert(FALLBACK_SECTION.to_string(), rest.join("\n").trim().to_string());
    }

    (title, sections)
}

fn insert_section(sections: &mut Sections, name: &str, body: &[&str]) {
    let body = body.join("\n").trim().to_string();
    if let Some(previous) = sections.insert(name.to_string(), body) {
        tracing::warn!(
            section = name,
            discarded_chars = previous.chars().count(),
            "duplicate section heading, earlier body replaced"
        );
    }
}
