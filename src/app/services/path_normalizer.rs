//! Turning user- or heuristic-supplied paths into canonical existing paths.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::path_text::{non_blank, strip_verbatim_prefix, trim_trailing_separators};
use crate::ports::Filesystem;

/// Canonical absolute form of an existing file or directory, without trailing separators.
///
/// Returns `None` for blank input and for anything that does not resolve
/// (missing path, broken link, no permission). Never an error.
pub fn normalize(fs: &impl Filesystem, path: &Path) -> Option<PathBuf> {
    if path.to_str().is_some_and(|s| s.trim().is_empty()) {
        return None;
    }

    match fs.canonicalize(path) {
        Ok(canonical) => Some(trim_trailing_separators(&strip_verbatim_prefix(canonical))),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "path does not resolve");
            None
        }
    }
}

/// `normalize` for optional string input.
pub fn normalize_str(fs: &impl Filesystem, path: Option<&str>) -> Option<PathBuf> {
    normalize(fs, Path::new(non_blank(path)?))
}
