//! repoenv: locate sibling repositories on disk and export environment variables pointing to them.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::api::{self, ContextOptions};

pub use app::api::{ApplyReport, EnvChange, InitOutcome};
pub use domain::{AppError, EnvKey, PersistScope, RepoKind, ResolvedPathMap, ShellDialect};

/// Resolve every repository relative to `anchor`, apply the result to the
/// process environment and to `scopes`, and return the resolved map.
///
/// Prints one `[env]` or `[env:clear]` line per variable.
pub fn initialize_repo_environment(
    anchor: &Path,
    anchor_repo: RepoKind,
    scopes: &[PersistScope],
) -> Result<ResolvedPathMap, AppError> {
    let options = ContextOptions::default();
    let outcome = api::init(&options, Some(anchor), anchor_repo, Some(scopes.to_vec()))?;
    for change in &outcome.report.changes {
        println!("{change}");
    }
    Ok(outcome.map)
}

/// Resolve every repository relative to `anchor` without changing anything.
pub fn resolve_repo_environment(
    anchor: &Path,
    anchor_repo: RepoKind,
) -> Result<ResolvedPathMap, AppError> {
    api::resolve(&ContextOptions::default(), Some(anchor), anchor_repo)
}
