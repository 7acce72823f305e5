//! `Filesystem` implementation backed by `std::fs`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::Filesystem;

/// The real filesystem of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, AppError> {
        fs::canonicalize(path).map_err(AppError::from)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_dirs(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // `DirEntry::file_type` does not follow symlinks.
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content).map_err(AppError::from)
    }
}
