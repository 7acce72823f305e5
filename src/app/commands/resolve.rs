//! Resolve without touching the environment.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::services::{
    SearchRoots, build_environment_map, generate_candidates, override_values,
};
use crate::domain::{AppError, RepoKind, ResolvedPathMap};
use crate::ports::{EnvironmentStore, Filesystem, ProcessEnvironment};

/// Build the path map for `anchor` without applying it.
pub fn execute<F, E, S>(
    ctx: &AppContext<F, E, S>,
    anchor: &Path,
    anchor_repo: RepoKind,
) -> Result<ResolvedPathMap, AppError>
where
    F: Filesystem,
    E: ProcessEnvironment,
    S: EnvironmentStore,
{
    build_environment_map(ctx.fs(), ctx.env(), ctx.config(), anchor, anchor_repo)
}

/// Candidate list for one repository, in probe order.
///
/// An anchor that does not resolve only drops the sibling candidates.
pub fn candidates<F, E, S>(
    ctx: &AppContext<F, E, S>,
    repo: RepoKind,
    anchor: Option<&Path>,
) -> Vec<PathBuf>
where
    F: Filesystem,
    E: ProcessEnvironment,
    S: EnvironmentStore,
{
    let roots = SearchRoots::new(&ctx.config().search, ctx.env().home_dir());
    generate_candidates(
        ctx.fs(),
        ctx.config().repos.name(repo),
        anchor,
        &override_values(ctx.env(), repo),
        &roots,
    )
}
