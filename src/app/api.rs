//! API Facade for the application.
//!
//! Builds a context over the real filesystem, process environment and
//! platform store, then runs one command against it.

use std::path::{Path, PathBuf};

use crate::adapters::{LocalFilesystem, PlatformEnvStore, SystemEnvironment};
use crate::app::AppContext;
use crate::app::commands::{clear, export, init, resolve};
use crate::app::config::load_config;
use crate::domain::{BootstrapConfig, PersistScope, RepoKind, ResolvedPathMap, ShellDialect};

pub use crate::app::commands::init::{InitOptions, InitOutcome};
pub use crate::app::services::{ApplyReport, EnvChange};
pub use crate::domain::AppError;

/// Context wired to the host system.
pub type SystemContext = AppContext<LocalFilesystem, SystemEnvironment, PlatformEnvStore>;

/// Settings that shape the context rather than a single command.
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    /// Explicit config file; the default location is used when absent.
    pub config_path: Option<PathBuf>,
    /// Replaces `search.fallback_depth` from the config file.
    pub fallback_depth: Option<usize>,
}

/// Load configuration and create a context for the host system.
pub fn create_context(options: &ContextOptions) -> Result<SystemContext, AppError> {
    let fs = LocalFilesystem::new();
    let env = SystemEnvironment;
    let mut config = load_config(&fs, &env, options.config_path.as_deref())?;
    if let Some(depth) = options.fallback_depth {
        config.search.fallback_depth = depth;
        config.validate()?;
    }
    let store = platform_store(&env, &config);
    Ok(AppContext::new(fs, env, store, config))
}

#[cfg(windows)]
fn platform_store(_env: &SystemEnvironment, _config: &BootstrapConfig) -> PlatformEnvStore {
    PlatformEnvStore::default()
}

#[cfg(not(windows))]
fn platform_store(env: &SystemEnvironment, config: &BootstrapConfig) -> PlatformEnvStore {
    use crate::adapters::DEFAULT_MACHINE_STORE;
    use crate::app::config::default_user_store;

    let user = config.persist.user_store.clone().or_else(|| default_user_store(env));
    let machine = config
        .persist
        .machine_store
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MACHINE_STORE));
    PlatformEnvStore::new(LocalFilesystem::new(), user, Some(machine))
}

fn anchor_or_cwd(anchor: Option<&Path>) -> Result<PathBuf, AppError> {
    match anchor {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Resolve every repository relative to `anchor` and apply the result.
///
/// `scopes` of `None` means the scopes named in the config file.
pub fn init(
    options: &ContextOptions,
    anchor: Option<&Path>,
    anchor_repo: RepoKind,
    scopes: Option<Vec<PersistScope>>,
) -> Result<InitOutcome, AppError> {
    let ctx = create_context(options)?;
    let scopes = scopes.unwrap_or_else(|| ctx.config().persist.scopes.clone());
    let init_options = InitOptions { anchor: anchor_or_cwd(anchor)?, anchor_repo, scopes };
    init::execute(&ctx, &init_options)
}

/// Resolve every repository relative to `anchor` without applying anything.
pub fn resolve(
    options: &ContextOptions,
    anchor: Option<&Path>,
    anchor_repo: RepoKind,
) -> Result<ResolvedPathMap, AppError> {
    let ctx = create_context(options)?;
    resolve::execute(&ctx, &anchor_or_cwd(anchor)?, anchor_repo)
}

/// Ordered candidate locations for one repository.
pub fn candidates(
    options: &ContextOptions,
    repo: RepoKind,
    anchor: Option<&Path>,
) -> Result<Vec<PathBuf>, AppError> {
    let ctx = create_context(options)?;
    let anchor = anchor_or_cwd(anchor)?;
    Ok(resolve::candidates(&ctx, repo, Some(&anchor)))
}

/// Shell statements that load the values persisted in `scope`.
pub fn export(
    options: &ContextOptions,
    scope: PersistScope,
    shell: ShellDialect,
) -> Result<String, AppError> {
    let ctx = create_context(options)?;
    export::execute(&ctx, scope, shell)
}

/// Remove every managed variable from the process and from `scopes`.
///
/// `scopes` of `None` means the scopes named in the config file.
pub fn clear(
    options: &ContextOptions,
    scopes: Option<Vec<PersistScope>>,
) -> Result<ApplyReport, AppError> {
    let ctx = create_context(options)?;
    let scopes = scopes.unwrap_or_else(|| ctx.config().persist.scopes.clone());
    Ok(clear::execute(&ctx, &scopes))
}
