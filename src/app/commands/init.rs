//! Resolve every repository and apply the result to the environment.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::services::{ApplyReport, apply_environment_map, build_environment_map};
use crate::domain::{AppError, PersistScope, RepoKind, ResolvedPathMap};
use crate::ports::{EnvironmentStore, Filesystem, ProcessEnvironment};

#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Location of the repository running the bootstrap.
    pub anchor: PathBuf,
    /// Which known repository the anchor is.
    pub anchor_repo: RepoKind,
    /// Persisted scopes to write in addition to the process environment.
    pub scopes: Vec<PersistScope>,
}

#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub map: ResolvedPathMap,
    pub report: ApplyReport,
}

/// Execute the init command.
pub fn execute<F, E, S>(
    ctx: &AppContext<F, E, S>,
    options: &InitOptions,
) -> Result<InitOutcome, AppError>
where
    F: Filesystem,
    E: ProcessEnvironment,
    S: EnvironmentStore,
{
    let map = build_environment_map(
        ctx.fs(),
        ctx.env(),
        ctx.config(),
        &options.anchor,
        options.anchor_repo,
    )?;
    let report = apply_environment_map(ctx.env(), ctx.store(), &map, &options.scopes);
    Ok(InitOutcome { map, report })
}
