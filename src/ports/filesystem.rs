//! Read-mostly filesystem access used by repository discovery.
//!
//! Discovery only ever probes paths; the write operations exist for the
//! file-backed environment store and configuration loading.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the filesystem probes the resolver relies on.
///
/// All paths are absolute or relative to the process working directory.
pub trait Filesystem {
    /// Resolve symlinks and relative components. Fails if the path does not exist.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, AppError>;

    /// Check whether a path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check whether a path is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Immediate child directories, sorted by name. Symlinked directories are excluded.
    fn list_dirs(&self, path: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
