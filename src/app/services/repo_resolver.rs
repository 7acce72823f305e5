//! Locating a repository directory from candidates, with a bounded scan as last resort.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::path_text::dedup_key;
use crate::ports::Filesystem;

use super::candidate_generator::{SearchRoots, generate_candidates};
use super::path_normalizer::normalize;

/// Resolve `repo_name` to an existing directory.
///
/// The first candidate that resolves to a directory wins. Repeated spellings
/// are skipped before probing and repeated canonical targets after it, so a
/// spelling that does not exist never hides a later candidate.
///
/// When no candidate resolves, directories up to `roots.fallback_depth` levels below the anchor's
/// filesystem root are scanned for one named `repo_name` (case-insensitive).
/// Absence is `None`, never an error.
pub fn resolve_repo_path(
    fs: &impl Filesystem,
    repo_name: &str,
    anchor: Option<&Path>,
    overrides: &[Option<String>],
    roots: &SearchRoots,
) -> Option<PathBuf> {
    let mut spellings = HashSet::new();
    let mut targets = HashSet::new();
    for candidate in generate_candidates(fs, repo_name, anchor, overrides, roots) {
        if !spellings.insert(dedup_key(&candidate)) {
            debug!(repo = repo_name, candidate = %candidate.display(), "duplicate candidate skipped");
            continue;
        }
        let Some(resolved) = normalize(fs, &candidate) else {
            debug!(repo = repo_name, candidate = %candidate.display(), "candidate does not exist");
            continue;
        };
        if !targets.insert(dedup_key(&resolved)) {
            continue;
        }
        if fs.is_dir(&resolved) {
            debug!(repo = repo_name, path = %resolved.display(), "resolved from candidate");
            return Some(resolved);
        }
        debug!(repo = repo_name, path = %resolved.display(), "candidate is not a directory");
    }

    let anchor = anchor.and_then(|a| normalize(fs, a))?;
    let root = anchor.ancestors().last()?;
    let found = search_below(fs, root, repo_name, roots.fallback_depth);
    if let Some(path) = &found {
        debug!(repo = repo_name, path = %path.display(), "resolved by fallback scan");
    }
    found
}

/// Breadth-first search for a directory named `name` at most `max_depth` levels below `root`.
///
/// Children are visited in name order, so the shallowest, alphabetically first
/// match wins. Unreadable directories are skipped.
pub fn search_below(
    fs: &impl Filesystem,
    root: &Path,
    name: &str,
    max_depth: usize,
) -> Option<PathBuf> {
    let wanted = name.to_lowercase();
    let mut frontier = vec![root.to_path_buf()];

    for depth in 1..=max_depth {
        let mut next = Vec::new();
        for dir in &frontier {
            let children = match fs.list_dirs(dir) {
                Ok(children) => children,
                Err(err) => {
                    debug!(dir = %dir.display(), error = %err, "skipping unreadable directory");
                    continue;
                }
            };
            for child in children {
                let matches = child
                    .file_name()
                    .is_some_and(|n| n.to_string_lossy().to_lowercase() == wanted);
                if matches {
                    return Some(child);
                }
                if depth < max_depth {
                    next.push(child);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    None
}
