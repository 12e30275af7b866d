//! Image reference detection for section bodies.
//!
//! A section is displayed with at most one image: the first `![alt](path)`
//! reference found in its body. Paths are resolved against a project root
//! supplied by the caller.

use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Parent-directory marker stripped once from relative image paths.
const PARENT_DIR_PREFIX: &str = "../";

/// An image reference found in markdown content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReference {
    /// Alt text between the brackets
    pub alt: String,
    /// Path exactly as written between the parentheses
    pub raw_path: String,
    /// Path after resolution against the project root
    pub resolved_path: PathBuf,
    /// Whether `resolved_path` was a file when the reference was extracted
    pub exists: bool,
}

pub(crate) fn image_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap())
}

/// Find the first image in `body` and return it with the image-free body.
///
/// The match is not line-anchored. When an image is found, every image
/// reference is removed from the returned body and the result is trimmed.
/// Without a match the body comes back unchanged.
///
/// # Examples
///
/// ```
/// use mdexplorer::parser::extract_image;
/// use std::path::Path;
///
/// let root = Path::new("/project");
/// let (image, body) = extract_image("Flow:\n![Flow](../images/x.png)", root);
/// let image = image.unwrap();
/// assert_eq!(image.alt, "Flow");
/// assert_eq!(image.resolved_path, root.join("images/x.png"));
/// assert_eq!(body, "Flow:");
/// ```
pub fn extract_image(body: &str, project_root: &Path) -> (Option<ImageReference>, String) {
    let pattern = image_pattern();

    let Some(captures) = pattern.captures(body) else {
        return (None, body.to_string());
    };

    let alt = captures[1].to_string();
    let raw_path = captures[2].to_string();
    let resolved_path = resolve_image_path(&raw_path, project_root);
    let exists = resolved_path.is_file();

    if !exists {
        tracing::debug!(path = %resolved_path.display(), "image target missing");
    }

    let without_images = pattern.replace_all(body, "").trim().to_string();

    (
        Some(ImageReference {
            alt,
            raw_path,
            resolved_path,
            exists,
        }),
        without_images,
    )
}

/// Resolve an image path as written in markdown.
///
/// Absolute paths are returned as-is. A single leading `../` is stripped
/// before joining to `project_root`; further `../` segments are kept verbatim.
pub fn resolve_image_path(raw_path: &str, project_root: &Path) -> PathBuf {
    let path = Path::new(raw_path);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    let relative = raw_path.strip_prefix(PARENT_DIR_PREFIX).unwrap_or(raw_path);
    project_root.join(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_prefix_stripped_once() {
        let root = Path::new("/project");
        let (image, body) = extract_image("![Flow](../images/x.png)", root);
        let image = image.expect("image should be detected");

        assert_eq!(image.alt, "Flow");
        assert_eq!(image.raw_path, "../images/x.png");
        assert_eq!(image.resolved_path, PathBuf::from("/project/images/x.png"));
        assert!(!image.exists);
        assert_eq!(body, "");
    }

    #[test]
    fn test_only_one_parent_prefix_stripped() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_image_path("../../x.png", root),
            PathBuf::from("/project/../x.png")
        );
    }

    #[test]
    fn test_plain_relative_path_joined_to_root() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_image_path("images/x.png", root),
            PathBuf::from("/project/images/x.png")
        );
        assert_eq!(
            resolve_image_path("./x.png", root),
            PathBuf::from("/project/./x.png")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_path_kept() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_image_path("/srv/img/a.png", root),
            PathBuf::from("/srv/img/a.png")
        );
    }

    #[test]
    fn test_no_image_returns_body_unchanged() {
        let body = "  text with [a link](page.md)  \n";
        let (image, rest) = extract_image(body, Path::new("."));
        assert!(image.is_none());
        assert_eq!(rest, body);
    }

    #[test]
    fn test_mid_line_match_and_all_images_stripped() {
        let body = "See ![first](a.png) and ![second](b.png) here.\n\n![third](c.png)";
        let (image, rest) = extract_image(body, Path::new("/root"));
        let image = image.unwrap();

        assert_eq!(image.alt, "first");
        assert_eq!(image.raw_path, "a.png");
        assert_eq!(rest, "See  and  here.");
        assert!(!rest.contains("!["));
    }

    #[test]
    fn test_empty_alt_text() {
        let (image, _) = extract_image("![](pic.png)", Path::new("/r"));
        assert_eq!(image.unwrap().alt, "");
    }

    #[test]
    fn test_exists_checks_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images").join("diagram.png"), b"png").unwrap();

        let (found, _) = extract_image("![D](../images/diagram.png)", dir.path());
        assert!(found.unwrap().exists);

        let (missing, _) = extract_image("![D](../images/other.png)", dir.path());
        assert!(!missing.unwrap().exists);

        // Directories are not image files
        let (dir_ref, _) = extract_image("![D](images)", dir.path());
        assert!(!dir_ref.unwrap().exists);
    }
}
