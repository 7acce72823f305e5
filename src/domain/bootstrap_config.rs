//! Bootstrap configuration domain models.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, PersistScope, RepoKind};

/// Upper bound accepted for `search.fallback_depth`.
pub const MAX_CONFIGURABLE_DEPTH: usize = 16;

/// Depth of the last-resort directory scan below the anchor's filesystem root.
///
/// Every extra level multiplies the number of directories visited, so this
/// bounds the worst-case latency of a miss.
pub const DEFAULT_FALLBACK_DEPTH: usize = 4;

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Directory names of the known repositories.
    #[serde(default)]
    pub repos: RepoNames,
    /// Candidate search settings.
    #[serde(default)]
    pub search: SearchConfig,
    /// Persisted scope settings.
    #[serde(default)]
    pub persist: PersistConfig,
}

impl BootstrapConfig {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: BootstrapConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.repos.validate()?;
        self.search.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepoNames {
    #[serde(default = "default_config_name")]
    pub config: String,
    #[serde(default = "default_scripts_name")]
    pub scripts: String,
    #[serde(default = "default_dotfiles_name")]
    pub dotfiles: String,
}

impl Default for RepoNames {
    fn default() -> Self {
        Self {
            config: default_config_name(),
            scripts: default_scripts_name(),
            dotfiles: default_dotfiles_name(),
        }
    }
}

impl RepoNames {
    pub fn name(&self, kind: RepoKind) -> &str {
        match kind {
            RepoKind::Config => &self.config,
            RepoKind::Scripts => &self.scripts,
            RepoKind::Dotfiles => &self.dotfiles,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for kind in RepoKind::ALL {
            let name = self.name(kind);
            if name.trim().is_empty() {
                return Err(AppError::config_error(format!("repos.{} must not be empty", kind)));
            }
            if name.contains(['/', '\\']) || name == "." || name == ".." {
                return Err(AppError::config_error(format!(
                    "repos.{} must be a single directory name, got '{}'",
                    kind, name
                )));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(AppError::config_error(format!(
                    "repos.{} duplicates another repository name '{}'",
                    kind, name
                )));
            }
        }
        Ok(())
    }
}

fn default_config_name() -> String {
    RepoKind::Config.default_dir_name().to_string()
}

fn default_scripts_name() -> String {
    RepoKind::Scripts.default_dir_name().to_string()
}

fn default_dotfiles_name() -> String {
    RepoKind::Dotfiles.default_dir_name().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Subdirectories of `$HOME` that may hold checkouts, after `$HOME` itself.
    #[serde(default = "default_home_conventions")]
    pub home_conventions: Vec<String>,
    /// Levels scanned below the filesystem root when no candidate exists. 0 disables the scan.
    #[serde(default = "default_fallback_depth")]
    pub fallback_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            home_conventions: default_home_conventions(),
            fallback_depth: default_fallback_depth(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.fallback_depth > MAX_CONFIGURABLE_DEPTH {
            return Err(AppError::config_error(format!(
                "search.fallback_depth must be at most {}",
                MAX_CONFIGURABLE_DEPTH
            )));
        }
        if self.home_conventions.iter().any(|dir| dir.trim().is_empty()) {
            return Err(AppError::config_error(
                "search.home_conventions entries must not be empty",
            ));
        }
        Ok(())
    }
}

fn default_home_conventions() -> Vec<String> {
    ["Repos", "src", "projects"].iter().map(|s| s.to_string()).collect()
}

fn default_fallback_depth() -> usize {
    DEFAULT_FALLBACK_DEPTH
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistConfig {
    /// Scopes written by `init` when none are given on the command line.
    #[serde(default = "default_scopes")]
    pub scopes: Vec<PersistScope>,
    /// Overrides the user store file (non-Windows).
    #[serde(default)]
    pub user_store: Option<PathBuf>,
    /// Overrides the machine store file (non-Windows).
    #[serde(default)]
    pub machine_store: Option<PathBuf>,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self { scopes: default_scopes(), user_store: None, machine_store: None }
    }
}

fn default_scopes() -> Vec<PersistScope> {
    vec![PersistScope::User]
}
