//! The fixed set of paths produced by one bootstrap run.
//!
//! Alias variables are not stored separately: `W11_ROOT` is always read from
//! the same field as `PWSH_REPO`, and so on, so the aliases cannot diverge.

use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::{EnvKey, RepoKind};

/// Resolved repository and derived paths. `None` means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPathMap {
    pub config_repo: Option<PathBuf>,
    pub scripts_repo: Option<PathBuf>,
    pub pscripts: Option<PathBuf>,
    pub dotfiles_repo: Option<PathBuf>,
    pub projects: Option<PathBuf>,
    pub ytdlp_path: Option<PathBuf>,
}

impl ResolvedPathMap {
    /// Value carried by an environment variable.
    pub fn get(&self, key: EnvKey) -> Option<&Path> {
        let value = match key {
            EnvKey::PwshRepo | EnvKey::W11Root => &self.config_repo,
            EnvKey::ScriptsRepo | EnvKey::Scripts => &self.scripts_repo,
            EnvKey::Pscripts => &self.pscripts,
            EnvKey::DotfilesRepo | EnvKey::Dotfiles | EnvKey::DotfilesPath => &self.dotfiles_repo,
            EnvKey::Projects => &self.projects,
            EnvKey::YtdlpPath => &self.ytdlp_path,
        };
        value.as_deref()
    }

    /// Resolved location of a repository.
    pub fn repo(&self, kind: RepoKind) -> Option<&Path> {
        match kind {
            RepoKind::Config => self.config_repo.as_deref(),
            RepoKind::Scripts => self.scripts_repo.as_deref(),
            RepoKind::Dotfiles => self.dotfiles_repo.as_deref(),
        }
    }

    /// All ten variables in output order.
    pub fn entries(&self) -> impl Iterator<Item = (EnvKey, Option<&Path>)> + '_ {
        EnvKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Variable value as the string written to the environment.
    ///
    /// A path that is not valid UTF-8 has no faithful string form and reads as unset.
    pub fn value_string(&self, key: EnvKey) -> Option<String> {
        self.get(key).and_then(Path::to_str).map(str::to_owned)
    }
}

impl Serialize for ResolvedPathMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(EnvKey::ALL.len()))?;
        for key in EnvKey::ALL {
            map.serialize_entry(key.as_str(), &self.value_string(key))?;
        }
        map.end()
    }
}
