//! JSON output types for parsed documents.

use super::{Document, ImageReference, extract_image};
use crate::content::Stats;
use crate::input::FileInfo;
use serde::Serialize;
use std::path::Path;

/// Whole-document view: title, statistics and the ordered section list.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutput {
    pub source: Option<String>,
    pub title: String,
    pub stats: Stats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileInfo>,
    pub sections: Vec<SectionOutput>,
}

/// A single section prepared for display.
#[derive(Debug, Clone, Serialize)]
pub struct SectionOutput {
    /// 1-based position in the document
    pub index: usize,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageReference>,
}

impl DocumentOutput {
    /// Build the output from a document, copying section bodies verbatim.
    ///
    /// With a `project_root`, each section also reports its first image,
    /// resolved against that root.
    pub fn from_document(
        doc: &Document,
        source: Option<String>,
        file: Option<FileInfo>,
        project_root: Option<&Path>,
    ) -> Self {
        let sections = doc
            .sections
            .iter()
            .enumerate()
            .map(|(idx, (title, content))| SectionOutput {
                index: idx + 1,
                title: title.clone(),
                content: content.clone(),
                image: project_root.and_then(|root| extract_image(content, root).0),
            })
            .collect();

        Self {
            source,
            title: doc.title.clone(),
            stats: doc.stats(),
            file,
            sections,
        }
    }
}
