use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, EnvKey};

/// The sibling repositories the bootstrap knows how to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoKind {
    /// PowerShell configuration repository.
    Config,
    /// Personal scripts repository.
    Scripts,
    /// Dotfiles repository.
    Dotfiles,
}

impl RepoKind {
    /// All repositories in resolution priority order.
    pub const ALL: [RepoKind; 3] = [RepoKind::Config, RepoKind::Scripts, RepoKind::Dotfiles];

    /// Directory name looked for when no configuration overrides it.
    pub fn default_dir_name(&self) -> &'static str {
        match self {
            RepoKind::Config => "W11-powershell",
            RepoKind::Scripts => "scripts",
            RepoKind::Dotfiles => "dotfiles",
        }
    }

    /// Identifier used on the command line and in configuration.
    pub fn id(&self) -> &'static str {
        match self {
            RepoKind::Config => "config",
            RepoKind::Scripts => "scripts",
            RepoKind::Dotfiles => "dotfiles",
        }
    }

    /// Variables whose pre-existing values are tried before heuristic discovery.
    pub fn override_keys(&self) -> &'static [EnvKey] {
        match self {
            RepoKind::Config => &[EnvKey::PwshRepo, EnvKey::W11Root],
            RepoKind::Scripts => &[EnvKey::ScriptsRepo, EnvKey::Scripts],
            RepoKind::Dotfiles => &[EnvKey::DotfilesRepo, EnvKey::Dotfiles, EnvKey::DotfilesPath],
        }
    }
}

impl fmt::Display for RepoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RepoKind {
    type Err = AppError;

    /// Accepts the short identifier or the default directory name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        RepoKind::ALL
            .into_iter()
            .find(|kind| lowered == kind.id() || lowered == kind.default_dir_name().to_lowercase())
            .ok_or_else(|| AppError::UnknownRepo(s.to_string()))
    }
}
