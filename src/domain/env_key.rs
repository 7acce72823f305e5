use std::fmt;

use serde::{Serialize, Serializer};

/// Environment variables produced by the bootstrap, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EnvKey {
    PwshRepo,
    W11Root,
    ScriptsRepo,
    Scripts,
    Pscripts,
    DotfilesRepo,
    Dotfiles,
    DotfilesPath,
    Projects,
    YtdlpPath,
}

impl EnvKey {
    pub const ALL: [EnvKey; 10] = [
        EnvKey::PwshRepo,
        EnvKey::W11Root,
        EnvKey::ScriptsRepo,
        EnvKey::Scripts,
        EnvKey::Pscripts,
        EnvKey::DotfilesRepo,
        EnvKey::Dotfiles,
        EnvKey::DotfilesPath,
        EnvKey::Projects,
        EnvKey::YtdlpPath,
    ];

    /// Variable name as it appears in the environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::PwshRepo => "PWSH_REPO",
            EnvKey::W11Root => "W11_ROOT",
            EnvKey::ScriptsRepo => "SCRIPTS_REPO",
            EnvKey::Scripts => "SCRIPTS",
            EnvKey::Pscripts => "PSCRIPTS",
            EnvKey::DotfilesRepo => "DOTFILES_REPO",
            EnvKey::Dotfiles => "DOTFILES",
            EnvKey::DotfilesPath => "DOTFILES_PATH",
            EnvKey::Projects => "PROJECTS",
            EnvKey::YtdlpPath => "YTDLP_PATH",
        }
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EnvKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
