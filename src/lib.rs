//! # mdexplorer
//!
//! Split markdown documents into a title and an ordered map of `##` sections.
//!
//! This library provides the pieces behind the `mdexplorer` CLI: tolerant file
//! loading with encoding fallback, section parsing, image reference extraction,
//! content cleanup for display, and simple document statistics.
//!
//! ## Features
//!
//! - Load files in UTF-8, Latin-1, Windows-1252 or ASCII, never failing hard
//! - Parse the first `#` heading as the title and every `##` heading as a section
//! - Extract the first image reference of a section and resolve it against a project root
//! - Clean and truncate section text for terminal display
//! - Count words, lines, characters and sections
//! - Discover markdown and CSV files in a directory
//!
//! ## Example
//!
//! ```rust
//! use mdexplorer::{clean, parse_markdown};
//!
//! let markdown = "# Manual\n\n## Inicio\nHola\n\n## Uso\nPasos a seguir.";
//!
//! let doc = parse_markdown(markdown);
//! assert_eq!(doc.title, "Manual");
//! assert_eq!(doc.section_names().collect::<Vec<_>>(), ["Inicio", "Uso"]);
//!
//! let body = doc.section("Uso").unwrap();
//! assert_eq!(clean(body, None), "Pasos a seguir.");
//! ```

/// Configuration module for persisting user preferences.
///
/// Provides project paths, display options, loader encodings and discovery order.
pub mod config;

/// Section cleanup, search and statistics.
pub mod content;

/// Writing sections to disk.
pub mod export;

/// File loading, discovery and metadata.
///
/// Loading never fails hard: unreadable or undecodable files yield an empty
/// string and a logged warning. Use [`input::try_load`] to inspect the failure.
pub mod input;

/// Parser module for markdown documents.
///
/// Provides functions to split markdown content into a title and sections.
pub mod parser;

pub use config::Config;
pub use content::{Stats, clean, search, stats};
pub use export::export_section;
pub use input::{FileInfo, LoadError, discover, file_info, load, try_load};
pub use parser::{
    Document, ImageReference, Sections, extract_image, parse, parse_file, parse_markdown,
};
