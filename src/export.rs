//! Writing section content to disk.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Errors that can occur while exporting a section.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Refusing to overwrite directory {}", path.display())]
    IsDirectory { path: PathBuf },

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `content` to `path`, replacing any existing file.
///
/// The content goes to a temp file in the destination directory first and is
/// then renamed over `path`, so readers never see a partial file.
pub fn export_section(path: &Path, content: &str) -> Result<(), ExportError> {
    if path.is_dir() {
        return Err(ExportError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    let io_error = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent_dir).map_err(io_error)?;
    temp_file.write_all(content.as_bytes()).map_err(io_error)?;
    temp_file.flush().map_err(io_error)?;

    // Atomic rename (same filesystem guarantees atomicity)
    temp_file.persist(path).map_err(|err| io_error(err.error))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "exported section");
    Ok(())
}
