use crate::parser::Sections;
use serde::Serialize;

/// A line that matched a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Heading of the section containing the line
    pub section: String,
    /// 1-based line number within the section body
    pub line_number: usize,
    /// The matching line, trimmed
    pub line: String,
}

/// Case-insensitive substring search over every section body.
///
/// Hits are ordered by section, then by line. A blank term matches nothing.
pub fn search(sections: &Sections, term: &str) -> Vec<SearchHit> {
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();

    sections
        .iter()
        .flat_map(|(name, body)| {
            let needle = &needle;
            body.split('\n')
                .enumerate()
                .filter(move |(_, line)| line.to_lowercase().contains(needle.as_str()))
                .map(move |(idx, line)| SearchHit {
                    section: name.clone(),
                    line_number: idx + 1,
                    line: line.trim().to_string(),
                })
        })
        .collect()
}
