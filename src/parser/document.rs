use crate::content::{self, Stats};
use indexmap::IndexMap;

/// Title used when a document has no top-level heading.
pub const DEFAULT_TITLE: &str = "Documento";

/// Name of the single section synthesized for documents without `##` headings.
pub const FALLBACK_SECTION: &str = "Contenido";

/// Ordered mapping from section heading to section body.
///
/// Iteration order is the order in which headings first appear in the source.
pub type Sections = IndexMap<String, String>;

/// A parsed markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Raw markdown content
    pub content: String,
    /// First top-level heading, [`DEFAULT_TITLE`] if there is none, empty for blank input
    pub title: String,
    /// Second-level sections in source order
    pub sections: Sections,
}

impl Document {
    pub fn new(content: String, title: String, sections: Sections) -> Self {
        Self {
            content,
            title,
            sections,
        }
    }

    /// True when the source contained nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Body of the section with exactly this heading.
    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }

    /// Heading and body of the section at a zero-based position.
    pub fn section_at(&self, index: usize) -> Option<(&str, &str)> {
        self.sections
            .get_index(index)
            .map(|(name, body)| (name.as_str(), body.as_str()))
    }

    /// Resolve a user query to a section.
    ///
    /// Tries an exact heading match, then a 1-based position, then a
    /// case-insensitive heading match.
    pub fn find_section(&self, query: &str) -> Option<(&str, &str)> {
        let query = query.trim();

        if let Some((name, body)) = self.sections.get_key_value(query) {
            return Some((name.as_str(), body.as_str()));
        }

        if let Ok(position) = query.parse::<usize>() {
            return position.checked_sub(1).and_then(|idx| self.section_at(idx));
        }

        let lowered = query.to_lowercase();
        self.sections
            .iter()
            .find(|(name, _)| name.to_lowercase() == lowered)
            .map(|(name, body)| (name.as_str(), body.as_str()))
    }

    /// Section headings in source order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Statistics over the whole raw content.
    pub fn stats(&self) -> Stats {
        content::stats(&self.content)
    }
}
