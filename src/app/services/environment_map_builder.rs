//! Resolving every known repository plus the paths derived from them.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::{AppError, BootstrapConfig, RepoKind, ResolvedPathMap};
use crate::ports::{Filesystem, ProcessEnvironment};

use super::candidate_generator::SearchRoots;
use super::path_normalizer::normalize;
use super::repo_resolver::resolve_repo_path;

/// Subdirectory of the scripts repository holding PowerShell scripts.
pub const PSCRIPTS_DIR: &str = "pscripts";

/// Location of the yt-dlp wrapper script below `PSCRIPTS`.
pub const YTDLP_SCRIPT: [&str; 3] = ["video", "yt_dlp", "ytdlp.ps1"];

/// Build the full path map for a bootstrap run.
///
/// `anchor` is the repository running the bootstrap; it is used as-is for
/// `anchor_repo` and as the reference point for finding the others. Fails
/// only when the anchor itself does not resolve.
pub fn build_environment_map(
    fs: &impl Filesystem,
    env: &impl ProcessEnvironment,
    config: &BootstrapConfig,
    anchor: &Path,
    anchor_repo: RepoKind,
) -> Result<ResolvedPathMap, AppError> {
    let anchor = normalize(fs, anchor)
        .ok_or_else(|| AppError::AnchorUnresolvable(anchor.display().to_string()))?;
    let roots = SearchRoots::new(&config.search, env.home_dir());

    let locate = |kind: RepoKind| -> Option<PathBuf> {
        if kind == anchor_repo {
            return Some(anchor.clone());
        }
        let overrides = override_values(env, kind);
        resolve_repo_path(fs, config.repos.name(kind), Some(anchor.as_path()), &overrides, &roots)
    };
    let resolve = |kind: RepoKind| locate(kind).and_then(|path| representable(kind, path));

    let config_repo = resolve(RepoKind::Config);
    let scripts_repo = resolve(RepoKind::Scripts);
    let dotfiles_repo = resolve(RepoKind::Dotfiles);

    let pscripts =
        scripts_repo.as_ref().map(|repo| repo.join(PSCRIPTS_DIR)).filter(|dir| fs.is_dir(dir));
    let ytdlp_path = pscripts
        .as_ref()
        .map(|dir| YTDLP_SCRIPT.iter().fold(dir.clone(), |acc, part| acc.join(part)))
        .filter(|file| fs.is_file(file));

    let projects = [&config_repo, &scripts_repo, &dotfiles_repo]
        .into_iter()
        .flatten()
        .filter_map(|repo| repo.parent())
        .find(|parent| fs.is_dir(parent))
        .map(Path::to_path_buf);

    Ok(ResolvedPathMap { config_repo, scripts_repo, pscripts, dotfiles_repo, projects, ytdlp_path })
}

/// Environment values are strings; a path that is not valid UTF-8 is treated as not found.
fn representable(kind: RepoKind, path: PathBuf) -> Option<PathBuf> {
    if path.to_str().is_some() {
        return Some(path);
    }
    warn!(repo = kind.id(), path = %path.display(), "ignoring repository path that is not valid UTF-8");
    None
}

/// Pre-existing values of the variables that name `kind`, in priority order.
pub fn override_values(env: &impl ProcessEnvironment, kind: RepoKind) -> Vec<Option<String>> {
    kind.override_keys().iter().map(|key| env.get(key.as_str())).collect()
}
