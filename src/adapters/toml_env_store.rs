//! File-backed `EnvironmentStore`: one TOML file of `KEY = "value"` pairs per scope.
//!
//! Shells load the stored values through `repoenv export`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::domain::{AppError, PersistScope};
use crate::ports::{EnvironmentStore, Filesystem};

/// Conventional machine-wide store location.
pub const DEFAULT_MACHINE_STORE: &str = "/etc/repoenv/env.toml";

#[derive(Debug, Clone)]
pub struct TomlEnvStore<F: Filesystem> {
    fs: F,
    user_path: Option<PathBuf>,
    machine_path: Option<PathBuf>,
}

impl<F: Filesystem> TomlEnvStore<F> {
    pub fn new(fs: F, user_path: Option<PathBuf>, machine_path: Option<PathBuf>) -> Self {
        Self { fs, user_path, machine_path }
    }

    /// Location of the store file for `scope`.
    pub fn path(&self, scope: PersistScope) -> Result<&Path, AppError> {
        match scope {
            PersistScope::User => self.user_path.as_deref().ok_or_else(|| {
                AppError::config_error("No user store location: neither HOME nor XDG_CONFIG_HOME is set")
            }),
            PersistScope::Machine => {
                self.machine_path.as_deref().ok_or(AppError::MachineScopeUnavailable)
            }
        }
    }

    fn read_vars(&self, path: &Path) -> Result<BTreeMap<String, String>, AppError> {
        if !self.fs.is_file(path) {
            return Ok(BTreeMap::new());
        }
        let content = self.fs.read_file(path)?;
        parse_store(&content)
    }

    fn write_vars(&self, path: &Path, vars: &BTreeMap<String, String>) -> Result<(), AppError> {
        self.fs.write_file(path, &render_store(vars)?)
    }

    fn wrap(scope: PersistScope, key: &str, err: AppError) -> AppError {
        match err {
            AppError::MachineScopeUnavailable | AppError::Persist { .. } => err,
            other => AppError::Persist { scope, key: key.to_string(), details: other.to_string() },
        }
    }
}

impl<F: Filesystem> EnvironmentStore for TomlEnvStore<F> {
    fn persist(&self, scope: PersistScope, key: &str, value: &str) -> Result<(), AppError> {
        let write = || -> Result<(), AppError> {
            let path = self.path(scope)?;
            let mut vars = self.read_vars(path)?;
            if vars.get(key).map(String::as_str) == Some(value) {
                return Ok(());
            }
            vars.insert(key.to_string(), value.to_string());
            self.write_vars(path, &vars)
        };
        write().map_err(|e| Self::wrap(scope, key, e))
    }

    fn clear(&self, scope: PersistScope, key: &str) -> Result<(), AppError> {
        let remove = || -> Result<(), AppError> {
            let path = self.path(scope)?;
            let mut vars = self.read_vars(path)?;
            if vars.remove(key).is_none() {
                return Ok(());
            }
            self.write_vars(path, &vars)
        };
        remove().map_err(|e| Self::wrap(scope, key, e))
    }

    fn load(&self, scope: PersistScope) -> Result<BTreeMap<String, String>, AppError> {
        let path = self.path(scope)?;
        self.read_vars(path)
    }
}

fn parse_store(content: &str) -> Result<BTreeMap<String, String>, AppError> {
    let table: toml::Table = toml::from_str(content)?;
    let mut vars = BTreeMap::new();
    for (key, value) in table {
        match value {
            toml::Value::String(s) => {
                vars.insert(key, s);
            }
            other => {
                return Err(AppError::config_error(format!(
                    "Store entry '{}' must be a string, found {}",
                    key,
                    other.type_str()
                )));
            }
        }
    }
    Ok(vars)
}

fn render_store(vars: &BTreeMap<String, String>) -> Result<String, AppError> {
    let body = toml::to_string(vars).map_err(|e| AppError::TomlSerialize(e.to_string()))?;
    Ok(format!(
        "# Managed by repoenv; edits are overwritten by `repoenv init`.\n# Updated {}\n{}",
        Utc::now().to_rfc3339(),
        body
    ))
}
