//! Directory scanning for documents and data files.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// A set of file extensions, without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions {
    names: Vec<String>,
    case_sensitive: bool,
}

impl Extensions {
    /// Build a set from extension names. A leading `.` is ignored.
    pub fn new<I, S>(names: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().trim_start_matches('.').to_string())
                .collect(),
            case_sensitive,
        }
    }

    /// `md`, `markdown`, `MD` and `Markdown`, matched case-sensitively.
    pub fn markdown() -> Self {
        Self::new(["md", "markdown", "MD", "Markdown"], true)
    }

    /// `csv` in any letter case.
    pub fn csv() -> Self {
        Self::new(["csv"], false)
    }

    /// Whether `path` has one of these extensions.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };

        if self.case_sensitive {
            self.names.iter().any(|name| name == ext)
        } else {
            self.names.iter().any(|name| name.eq_ignore_ascii_case(ext))
        }
    }
}

/// List regular files in `directory` whose extension is in `extensions`.
///
/// Never fails: a missing, non-directory or unreadable directory yields an
/// empty list. Files are sorted by path. With `priority`, files named
/// `priority[0]` come first, `priority[1]` second and so on; the rest follow
/// in path order.
pub fn discover(
    directory: &Path,
    extensions: &Extensions,
    priority: Option<&[String]>,
) -> Vec<PathBuf> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(dir = %directory.display(), "directory does not exist");
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!(dir = %directory.display(), %err, "cannot list directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(dir = %directory.display(), %err, "skipping unreadable entry");
                None
            }
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && extensions.matches(path))
        .collect();

    let priority = priority.unwrap_or_default();
    files.sort_by(|a, b| compare_with_priority(a, b, priority));
    files
}

fn compare_with_priority(a: &Path, b: &Path, priority: &[String]) -> Ordering {
    priority_rank(a, priority)
        .cmp(&priority_rank(b, priority))
        .then_with(|| a.cmp(b))
}

fn priority_rank(path: &Path, priority: &[String]) -> usize {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| priority.iter().position(|wanted| wanted == name))
        .unwrap_or(priority.len())
}
