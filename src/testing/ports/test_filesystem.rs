//! Test double for `Filesystem`.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::Filesystem;

#[derive(Debug, Default)]
struct FsState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    links: BTreeMap<PathBuf, PathBuf>,
    denied: BTreeSet<PathBuf>,
    canonicalize_calls: usize,
    listed: Vec<PathBuf>,
}

/// In-memory directory tree for unit tests.
///
/// Paths are case-sensitive. Symlinks registered with `with_symlink` are
/// followed by `canonicalize`/`is_dir`/`is_file` but not listed by `list_dirs`.
#[derive(Clone, Debug, Default)]
pub struct MockFilesystem {
    state: Arc<Mutex<FsState>>,
}

#[allow(dead_code)]
impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all of its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path.as_ref());
        self
    }

    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.state.lock().unwrap().files.insert(path.to_path_buf(), content.to_string());
        self
    }

    pub fn with_symlink(self, link: impl AsRef<Path>, target: impl AsRef<Path>) -> Self {
        let link = link.as_ref();
        if let Some(parent) = link.parent() {
            self.add_dir(parent);
        }
        self.state.lock().unwrap().links.insert(link.to_path_buf(), target.as_ref().to_path_buf());
        self
    }

    /// Make `list_dirs` fail with permission denied for this directory.
    pub fn with_denied(self, path: impl AsRef<Path>) -> Self {
        self.state.lock().unwrap().denied.insert(path.as_ref().to_path_buf());
        self
    }

    pub fn canonicalize_calls(&self) -> usize {
        self.state.lock().unwrap().canonicalize_calls
    }

    /// Directories passed to `list_dirs`, in call order.
    pub fn listed(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().listed.clone()
    }

    pub fn file_content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    fn add_dir(&self, path: &Path) {
        let mut state = self.state.lock().unwrap();
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            state.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Follow symlinks in every prefix of `path`.
    fn resolve(&self, path: &Path) -> PathBuf {
        let state = self.state.lock().unwrap();
        let mut current = normalize_lexically(path);
        for _ in 0..32 {
            let link = current
                .ancestors()
                .find(|a| state.links.contains_key(*a))
                .map(Path::to_path_buf);
            let Some(link) = link else {
                return current;
            };
            let rest = current.strip_prefix(&link).unwrap_or(Path::new("")).to_path_buf();
            let target = &state.links[&link];
            current = normalize_lexically(&target.join(rest));
        }
        current
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.dirs.contains(path) || state.files.contains_key(path)
    }
}

impl Filesystem for MockFilesystem {
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, AppError> {
        self.state.lock().unwrap().canonicalize_calls += 1;
        let resolved = self.resolve(path);
        if self.exists(&resolved) {
            Ok(resolved)
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "Mock path not found").into())
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        let resolved = self.resolve(path);
        self.state.lock().unwrap().dirs.contains(&resolved)
    }

    fn is_file(&self, path: &Path) -> bool {
        let resolved = self.resolve(path);
        self.state.lock().unwrap().files.contains_key(&resolved)
    }

    fn list_dirs(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let mut state = self.state.lock().unwrap();
        state.listed.push(path.to_path_buf());
        if state.denied.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "Mock access denied").into());
        }
        if !state.dirs.contains(path) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "Mock dir not found").into());
        }
        Ok(state.dirs.iter().filter(|d| d.parent() == Some(path)).cloned().collect())
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.file_content(path).ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.state.lock().unwrap().files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
