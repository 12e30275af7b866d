//! Input handling: loading documents from disk and finding them.
//!
//! Loading is fail-soft. [`load`] returns an empty string for any missing,
//! unreadable or undecodable file; [`try_load`] reports which of those it was.

mod discover;
mod encoding;
mod error;
mod info;

pub use discover::{Extensions, discover};
pub use encoding::{DEFAULT_ENCODINGS, Encoding};
pub use error::LoadError;
pub use info::{FileInfo, file_info, format_size};

use std::fs;
use std::path::Path;

/// Text decoded from a file, with the encoding that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub text: String,
    pub encoding: Encoding,
}

/// Load a text file with the default encoding fallbacks.
///
/// Returns an empty string when the file cannot be loaded for any reason,
/// which callers cannot tell apart from an existing empty file.
pub fn load(path: impl AsRef<Path>) -> String {
    load_with(path.as_ref(), &DEFAULT_ENCODINGS)
}

/// Like [`load`], with an explicit encoding order.
pub fn load_with(path: &Path, encodings: &[Encoding]) -> String {
    match try_load(path, encodings) {
        Ok(loaded) => loaded.text,
        Err(err) => {
            tracing::warn!(%err, "could not load document");
            String::new()
        }
    }
}

/// Read `path` and decode it with the first encoding that accepts its bytes.
///
/// Decode failures move on to the next candidate. I/O failures end the
/// attempt immediately. A leading UTF-8 byte order mark is dropped, and
/// `\r\n` and lone `\r` line endings become `\n`.
pub fn try_load(path: &Path, encodings: &[Encoding]) -> Result<Loaded, LoadError> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if !metadata.is_file() {
        return Err(LoadError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    for &encoding in encodings {
        match encoding.decode(&bytes) {
            Some(text) => {
                tracing::debug!(path = %path.display(), %encoding, "decoded document");
                return Ok(Loaded {
                    text: normalize_newlines(strip_bom(text)),
                    encoding,
                });
            }
            None => {
                tracing::debug!(path = %path.display(), %encoding, "decode failed, trying next encoding");
            }
        }
    }

    Err(LoadError::Undecodable {
        path: path.to_path_buf(),
    })
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "# Título\n## Sección\ncontenido\n").unwrap();

        assert_eq!(load(&path), "# Título\n## Sección\ncontenido\n");
        assert_eq!(
            try_load(&path, &DEFAULT_ENCODINGS).unwrap().encoding,
            Encoding::Utf8
        );
    }

    #[test]
    fn test_load_falls_back_to_latin1() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.md");
        // "# Año" in ISO-8859-1
        fs::write(&path, [b'#', b' ', b'A', 0xF1, b'o']).unwrap();

        let loaded = try_load(&path, &DEFAULT_ENCODINGS).unwrap();
        assert_eq!(loaded.text, "# Año");
        assert_eq!(loaded.encoding, Encoding::Latin1);
    }

    #[test]
    fn test_load_respects_encoding_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.md");
        fs::write(&path, [0x93, b'q', 0x94]).unwrap();

        let loaded = try_load(&path, &[Encoding::Utf8, Encoding::Windows1252]).unwrap();
        assert_eq!(loaded.text, "\u{201C}q\u{201D}");
        assert_eq!(loaded.encoding, Encoding::Windows1252);
    }

    #[test]
    fn test_undecodable_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xFF, 0xFE, 0x00]).unwrap();

        let result = try_load(&path, &[Encoding::Utf8, Encoding::Ascii]);
        assert!(matches!(result, Err(LoadError::Undecodable { .. })));
        assert_eq!(load_with(&path, &[Encoding::Utf8, Encoding::Ascii]), "");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.md");

        assert_eq!(load(&path), "");
        assert!(matches!(
            try_load(&path, &DEFAULT_ENCODINGS),
            Err(LoadError::NotFound { .. })
        ));
    }

    #[test]
    fn test_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(load(dir.path()), "");
        let err = try_load(dir.path(), &DEFAULT_ENCODINGS).unwrap_err();
        assert!(matches!(err, LoadError::NotAFile { .. }));
        assert_eq!(err.path(), &dir.path().to_path_buf());
    }

    #[test]
    fn test_empty_file_loads_as_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.md");
        fs::write(&path, "").unwrap();

        assert_eq!(load(&path), "");
        assert_eq!(try_load(&path, &DEFAULT_ENCODINGS).unwrap().text, "");
    }

    #[test]
    fn test_line_endings_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.md");
        fs::write(&path, "# T\r\n## A\r\nline\rnext\r\n").unwrap();

        assert_eq!(load(&path), "# T\n## A\nline\nnext\n");
    }

    #[test]
    fn test_other_io_error_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.md");
        fs::write(&file, "# Doc\n").unwrap();
        // A regular file used as a directory fails with NotADirectory
        let path = file.join("child.md");

        let err = try_load(&path, &DEFAULT_ENCODINGS).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.path(), &path);
        assert_eq!(load(&path), "");
    }

    #[test]
    fn test_byte_order_mark_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.md");
        fs::write(&path, "\u{feff}# Bom Title\r\n## A\r\nb").unwrap();

        assert_eq!(load(&path), "# Bom Title\n## A\nb");
        assert_eq!(crate::parser::parse_file(&path).title, "Bom Title");
    }
}
