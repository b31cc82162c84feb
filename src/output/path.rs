//! Path display helpers: project-relative, forward-slash paths in every report.

use std::path::{Path, PathBuf};

/// `path` relative to `project_root` when it lies inside it, with `/` separators.
///
/// Returns `"."` when `path` is the root itself.
#[must_use]
pub fn display_path(path: &Path, project_root: Option<&Path>) -> String {
    let relative = project_root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);
    let shown = normalize_separators(&relative.to_string_lossy());
    if shown.is_empty() { ".".to_string() } else { shown }
}

#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Form of a path that exclude globs are matched against: no leading `./`, `/` separators.
///
/// A bare `.` becomes the empty path so it never matches a file pattern.
#[must_use]
pub(crate) fn normalize_for_matching(path: &Path) -> PathBuf {
    let text = normalize_separators(&path.to_string_lossy());
    let stripped = text.strip_prefix("./").unwrap_or(&text);
    if stripped.is_empty() || stripped == "." {
        PathBuf::new()
    } else {
        PathBuf::from(stripped)
    }
}
