//! Utility functions for markdown parsing.
//!
//! Shared heading helpers used by the section parser and the statistics module,
//! so both agree on what counts as a heading line.

/// Split a line of markdown into its heading level and heading text.
///
/// The line is trimmed first, so indented headings are recognised. A heading is
/// 1-6 `#` characters followed by whitespace and non-empty text. The returned
/// text is trimmed.
///
/// # Examples
///
/// ```
/// # use mdexplorer::parser::utils::parse_heading;
/// assert_eq!(parse_heading("# Title"), Some((1, "Title")));
/// assert_eq!(parse_heading("  ##  Section  "), Some((2, "Section")));
/// assert_eq!(parse_heading("not a heading"), None);
/// assert_eq!(parse_heading("#NoSpace"), None);
/// ```
pub fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim();
    let mut level = 0;

    for (idx, ch) in trimmed.char_indices() {
        if ch == '#' {
            level += 1;
        } else if ch.is_whitespace() {
            if level == 0 || level > 6 {
                return None;
            }
            let text = trimmed[idx..].trim();
            return (!text.is_empty()).then_some((level, text));
        } else {
            break;
        }
    }

    None
}

/// Text of a top-level (`#`) heading line, if the line is one.
pub fn title_heading(line: &str) -> Option<&str> {
    match parse_heading(line) {
        Some((1, text)) => Some(text),
        _ => None,
    }
}

/// Text of a second-level (`##`) heading line, if the line is one.
pub fn section_heading(line: &str) -> Option<&str> {
    match parse_heading(line) {
        Some((2, text)) => Some(text),
        _ => None,
    }
}
