use serde::Serialize;
use std::fs;
use std::path::Path;

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;

/// Snapshot of a file's name and size at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub name: String,
    /// Human-readable size, see [`format_size`]
    pub size: String,
    pub bytes: u64,
    pub exists: bool,
}

impl Default for FileInfo {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            size: format_size(0),
            bytes: 0,
            exists: false,
        }
    }
}

/// Describe the file at `path`. Missing paths yield [`FileInfo::default`].
pub fn file_info(path: &Path) -> FileInfo {
    if !path.exists() {
        return FileInfo::default();
    }

    let mut info = FileInfo {
        name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        exists: true,
        ..FileInfo::default()
    };

    match fs::metadata(path) {
        Ok(metadata) => {
            info.bytes = metadata.len();
            info.size = format_size(info.bytes);
        }
        Err(err) => tracing::debug!(path = %path.display(), %err, "cannot read file metadata"),
    }

    info
}

/// Format a byte count as `N bytes`, `N.N KB` or `N.N MB`.
pub fn format_size(bytes: u64) -> String {
    if bytes < KB {
        format!("{} bytes", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
