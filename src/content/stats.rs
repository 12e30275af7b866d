use crate::parser::utils::section_heading;
use serde::{Deserialize, Serialize};

/// Basic counts over a markdown document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Whitespace-delimited tokens
    pub words: usize,
    /// `\n`-separated segments, so a trailing newline adds an empty last line
    pub lines: usize,
    /// Unicode scalar values
    pub characters: usize,
    /// Lines recognised as `##` headings
    pub sections: usize,
}

/// Compute [`Stats`] for `content`. Empty content yields all zeros.
///
/// Section lines are recognised with the same rule the section parser uses,
/// so for documents with unique headings `sections` equals the number of
/// parsed sections.
pub fn stats(content: &str) -> Stats {
    if content.is_empty() {
        return Stats::default();
    }

    Stats {
        words: content.split_whitespace().count(),
        lines: content.split('\n').count(),
        characters: content.chars().count(),
        sections: content
            .split('\n')
            .filter(|line| section_heading(line).is_some())
            .count(),
    }
}
