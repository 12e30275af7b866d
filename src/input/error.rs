//! Document loading errors.

use std::path::PathBuf;

/// Why a document could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No candidate encoding could decode {}", path.display())]
    Undecodable { path: PathBuf },
}

impl LoadError {
    /// Path the failed load was attempted on.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::NotFound { path }
            | LoadError::NotAFile { path }
            | LoadError::Io { path, .. }
            | LoadError::Undecodable { path } => path,
        }
    }
}
