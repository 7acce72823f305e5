use std::io;

use thiserror::Error;

use crate::domain::PersistScope;

/// Library-wide error type for repoenv operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The anchor repository path does not exist or cannot be accessed.
    #[error("Anchor path '{0}' could not be resolved to an existing directory")]
    AnchorUnresolvable(String),

    /// Repository identifier is not one of the known repositories.
    #[error("Unknown repository '{0}': must be one of config, scripts, dotfiles")]
    UnknownRepo(String),

    /// Persist scope identifier is invalid.
    #[error("Unknown persist scope '{0}': must be one of user, machine")]
    UnknownScope(String),

    /// Shell dialect identifier is invalid.
    #[error("Unknown shell '{0}': must be one of posix, fish, powershell")]
    UnknownShell(String),

    /// Configuration file content is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicitly requested configuration file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// No store is available for the machine scope on this platform.
    #[error("Machine scope is not available: no machine store configured")]
    MachineScopeUnavailable,

    /// Writing or clearing a persisted variable failed.
    #[error("Failed to persist {key} to {scope} scope: {details}")]
    Persist { scope: PersistScope, key: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }
}
