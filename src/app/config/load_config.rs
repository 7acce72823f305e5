//! Bootstrap configuration loading and well-known file locations.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::path_text::non_blank;
use crate::domain::{AppError, BootstrapConfig};
use crate::ports::{Filesystem, ProcessEnvironment};

const APP_DIR: &str = "repoenv";
const CONFIG_FILE: &str = "config.toml";
const USER_STORE_FILE: &str = "env.toml";

/// Per-user configuration directory: `XDG_CONFIG_HOME`, then `$HOME/.config`.
pub fn config_home(env: &impl ProcessEnvironment) -> Option<PathBuf> {
    non_blank(env.get("XDG_CONFIG_HOME").as_deref())
        .map(PathBuf::from)
        .or_else(|| env.home_dir().map(|home| Path::new(&home).join(".config")))
}

pub fn default_config_path(env: &impl ProcessEnvironment) -> Option<PathBuf> {
    config_home(env).map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Default file backing the user scope on platforms without a native store.
pub fn default_user_store(env: &impl ProcessEnvironment) -> Option<PathBuf> {
    config_home(env).map(|dir| dir.join(APP_DIR).join(USER_STORE_FILE))
}

/// Load configuration from `explicit`, or from the default location.
///
/// A missing default file yields the built-in defaults; a missing explicit
/// file is an error.
pub fn load_config(
    fs: &impl Filesystem,
    env: &impl ProcessEnvironment,
    explicit: Option<&Path>,
) -> Result<BootstrapConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !fs.is_file(path) {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => match default_config_path(env).filter(|p| fs.is_file(p)) {
            Some(path) => path,
            None => {
                debug!("no config file found; using defaults");
                return Ok(BootstrapConfig::default());
            }
        },
    };

    debug!(path = %path.display(), "loading config");
    let content = fs.read_file(&path)?;
    BootstrapConfig::parse(&content)
}
