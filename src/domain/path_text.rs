//! Textual path helpers that never touch the filesystem.

use std::path::{Path, PathBuf};

/// Returns `None` for empty or whitespace-only input.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Strip trailing `/` and `\`, keeping a bare root (`/`, `C:\`) intact.
///
/// Paths that are not valid UTF-8 are returned unchanged.
pub fn trim_trailing_separators(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };
    let trimmed = text.trim_end_matches(['/', '\\']);

    if text.is_empty() {
        return PathBuf::new();
    }
    if trimmed.is_empty() {
        return PathBuf::from(&text[..1]);
    }
    if trimmed.len() == 2 && trimmed.ends_with(':') && text.len() > 2 {
        return PathBuf::from(&text[..3]);
    }
    PathBuf::from(trimmed)
}

/// Drop the `\\?\` verbatim prefix that `canonicalize` adds on Windows.
pub fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    if let Some(text) = path.to_str() {
        if let Some(rest) = text.strip_prefix(r"\\?\UNC\") {
            return PathBuf::from(format!(r"\\{}", rest));
        }
        if let Some(rest) = text.strip_prefix(r"\\?\") {
            return PathBuf::from(rest);
        }
    }
    path
}

/// Key under which two spellings name the same entry without asking the filesystem.
///
/// Trailing separators never matter. Case and `\` vs `/` only matter off
/// Windows, where `Dotfiles` and `dotfiles` can be different directories.
pub fn dedup_key(path: &Path) -> PathBuf {
    if cfg!(windows) {
        trim_trailing_separators(Path::new(&path.to_string_lossy().replace('\\', "/").to_lowercase()))
    } else {
        trim_trailing_separators(path)
    }
}
