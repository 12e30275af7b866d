use crate::parser::images::image_pattern;

/// Returned by [`clean`] for empty input.
pub const EMPTY_PLACEHOLDER: &str = "_This content is empty._";

/// Appended by [`clean`] when content is truncated.
pub const TRUNCATION_MARKER: &str = "\n\n_... (content truncated)_";

/// Figure captions written under diagrams, e.g. `*Figura 1: Flujo*`.
const FIGURE_CAPTION_PREFIXES: &[&str] = &["*Figura ", "*Figure "];

/// Prepare markdown content for display.
///
/// Runs of whitespace-only lines collapse into a single empty line and the
/// result is trimmed. Other lines are kept exactly as written.
///
/// With `max_length`, content longer than that many characters is cut. The
/// cut moves back to the last line break when that break lies in the final
/// fifth of the window, and [`TRUNCATION_MARKER`] is appended. A limit of zero
/// means no limit.
///
/// # Examples
///
/// ```
/// use mdexplorer::content::{EMPTY_PLACEHOLDER, clean};
///
/// assert_eq!(clean("", None), EMPTY_PLACEHOLDER);
/// assert_eq!(clean("a\n\n\n\nb", None), "a\n\nb");
/// ```
pub fn clean(content: &str, max_length: Option<usize>) -> String {
    if content.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = false;

    for line in content.split('\n') {
        if line.trim().is_empty() {
            if !previous_blank {
                lines.push("");
            }
            previous_blank = true;
        } else {
            lines.push(line);
            previous_blank = false;
        }
    }

    let cleaned = lines.join("\n").trim().to_string();

    match max_length.filter(|&max| max > 0) {
        Some(max) => truncate_at_line(&cleaned, max).unwrap_or(cleaned),
        None => cleaned,
    }
}

/// Cut `content` to `max_length` characters, preferring a nearby line break.
///
/// Returns `None` when the content already fits.
fn truncate_at_line(content: &str, max_length: usize) -> Option<String> {
    let (cut, _) = content.char_indices().nth(max_length)?;
    let mut truncated = &content[..cut];

    if let Some(newline) = truncated.rfind('\n') {
        let position = truncated[..newline].chars().count();
        // position > 0.8 * max_length
        if position * 5 > max_length * 4 {
            truncated = &truncated[..newline];
        }
    }

    Some(format!("{truncated}{TRUNCATION_MARKER}"))
}

/// Drop image lines and figure captions for plain-text terminal output.
///
/// A line is dropped when its trimmed form starts with an image reference or
/// is a `*Figura ...*` / `*Figure ...*` caption. Everything else is kept.
pub fn filter_for_terminal(content: &str) -> String {
    content
        .split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            !(starts_with_image(trimmed) || is_figure_caption(trimmed))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn starts_with_image(line: &str) -> bool {
    image_pattern()
        .find(line)
        .is_some_and(|found| found.start() == 0)
}

fn is_figure_caption(line: &str) -> bool {
    line.ends_with('*')
        && FIGURE_CAPTION_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_returns_placeholder() {
        assert_eq!(clean("", None), EMPTY_PLACEHOLDER);
        assert_eq!(clean("", Some(10)), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_blank_runs_collapse() {
        assert_eq!(clean("a\n\n\n\nb", None), "a\n\nb");
        assert_eq!(clean("a\n  \n\t\n\nb\n\nc", None), "a\n\nb\n\nc");
        assert_eq!(clean("a\nb", None), "a\nb");
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        assert_eq!(clean("a\n    indented\nb  ", None), "a\n    indented\nb");
    }

    #[test]
    fn test_outer_blank_lines_trimmed() {
        assert_eq!(clean("\n\n\ntext\n\n\n", None), "text");
        assert_eq!(clean("   \n  ", None), "");
    }

    #[test]
    fn test_no_truncation_when_short() {
        assert_eq!(clean("short", Some(100)), "short");
        assert_eq!(clean("exact", Some(5)), "exact");
        assert_eq!(clean("zero means unlimited", Some(0)), "zero means unlimited");
    }

    #[test]
    fn test_hard_truncation_without_late_newline() {
        // Newline at position 2 is well before 80% of 10
        let result = clean("ab\ncdefghijklmnop", Some(10));
        assert_eq!(result, format!("ab\ncdefghi{TRUNCATION_MARKER}"));
    }

    #[test]
    fn test_truncation_snaps_to_late_newline() {
        // Newline at position 9 of a 10 character window
        let result = clean("abcdefghi\njklmnop", Some(10));
        assert_eq!(result, format!("abcdefghi{TRUNCATION_MARKER}"));
    }

    #[test]
    fn test_truncation_boundary_is_strict() {
        // Newline exactly at 0.8 * max_length stays a hard cut
        let result = clean("abcdefgh\nijklmnop", Some(10));
        assert_eq!(result, format!("abcdefgh\ni{TRUNCATION_MARKER}"));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let result = clean("ñññññ", Some(3));
        assert_eq!(result, format!("ñññ{TRUNCATION_MARKER}"));
    }

    #[test]
    fn test_filter_for_terminal() {
        let content = "Intro\n![Flujo](../images/flujo.png)\n*Figura 1: Flujo del sistema*\n  ![x](y.png) trailing\nSee ![inline](z.png)\n*emphasis*";
        assert_eq!(
            filter_for_terminal(content),
            "Intro\nSee ![inline](z.png)\n*emphasis*"
        );
    }

    #[test]
    fn test_filter_keeps_plain_content() {
        let content = "line one\n\nline two";
        assert_eq!(filter_for_terminal(content), content);
    }
}
