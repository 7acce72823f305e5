//! Ordered guesses for where a repository might be checked out.

use std::path::{Path, PathBuf};

use crate::domain::SearchConfig;
use crate::domain::path_text::non_blank;
use crate::ports::Filesystem;

use super::path_normalizer::normalize;

/// Inputs shared by every resolution in one bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoots {
    /// Home directory of the current user, if known.
    pub home: Option<PathBuf>,
    /// Subdirectories of `home` tried after `home` itself.
    pub home_conventions: Vec<String>,
    /// Levels scanned below the anchor's filesystem root by the fallback search.
    pub fallback_depth: usize,
}

impl SearchRoots {
    pub fn new(search: &SearchConfig, home: Option<String>) -> Self {
        Self {
            home: non_blank(home.as_deref()).map(PathBuf::from),
            home_conventions: search.home_conventions.clone(),
            fallback_depth: search.fallback_depth,
        }
    }
}

/// Candidate locations for `repo_name`, highest priority first.
///
/// Order: non-blank `overrides` as given, then siblings of the anchor
/// (`parent/name`, `grandparent/name`), then `$HOME/name` and
/// `$HOME/<convention>/name`. The list is neither de-duplicated nor checked
/// for existence; only the anchor is probed.
pub fn generate_candidates(
    fs: &impl Filesystem,
    repo_name: &str,
    anchor: Option<&Path>,
    overrides: &[Option<String>],
    roots: &SearchRoots,
) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = overrides
        .iter()
        .filter_map(|value| non_blank(value.as_deref()))
        .map(PathBuf::from)
        .collect();

    if let Some(anchor) = anchor.and_then(|a| normalize(fs, a)) {
        if let Some(parent) = anchor.parent() {
            candidates.push(parent.join(repo_name));
            if let Some(grandparent) = parent.parent() {
                candidates.push(grandparent.join(repo_name));
            }
        }
    }

    if let Some(home) = &roots.home {
        candidates.push(home.join(repo_name));
        for convention in &roots.home_conventions {
            candidates.push(home.join(convention).join(repo_name));
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockFilesystem;

    fn roots(home: Option<&str>) -> SearchRoots {
        SearchRoots::new(&SearchConfig::default(), home.map(str::to_string))
    }

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn orders_overrides_siblings_then_home() {
        let fs = MockFilesystem::new().with_dir("/home/u/dev/W11-powershell");
        let overrides = vec![Some("/opt/scripts".to_string()), None, Some("  ".to_string())];

        let candidates = generate_candidates(
            &fs,
            "scripts",
            Some(Path::new("/home/u/dev/W11-powershell")),
            &overrides,
            &roots(Some("/home/u")),
        );

        assert_eq!(
            candidates,
            paths(&[
                "/opt/scripts",
                "/home/u/dev/scripts",
                "/home/u/scripts",
                "/home/u/scripts",
                "/home/u/Repos/scripts",
                "/home/u/src/scripts",
                "/home/u/projects/scripts",
            ])
        );
    }

    #[test]
    fn unresolvable_anchor_contributes_nothing() {
        let fs = MockFilesystem::new();

        let candidates = generate_candidates(
            &fs,
            "dotfiles",
            Some(Path::new("/missing/anchor")),
            &[],
            &roots(None),
        );

        assert!(candidates.is_empty());
    }

    #[test]
    fn anchor_directly_under_root_has_no_grandparent() {
        let fs = MockFilesystem::new().with_dir("/W11-powershell");

        let candidates =
            generate_candidates(&fs, "scripts", Some(Path::new("/W11-powershell")), &[], &roots(None));

        assert_eq!(candidates, paths(&["/scripts"]));
    }

    #[test]
    fn anchor_symlink_is_resolved_before_taking_parents() {
        let fs = MockFilesystem::new()
            .with_dir("/data/work/W11-powershell")
            .with_symlink("/home/u/pwsh", "/data/work/W11-powershell");

        let candidates =
            generate_candidates(&fs, "scripts", Some(Path::new("/home/u/pwsh")), &[], &roots(None));

        assert_eq!(candidates, paths(&["/data/work/scripts", "/data/scripts"]));
    }

    #[test]
    fn custom_home_conventions_are_used() {
        let fs = MockFilesystem::new();
        let search = SearchConfig { home_conventions: vec!["code".to_string()], fallback_depth: 4 };
        let roots = SearchRoots::new(&search, Some("/home/u".to_string()));

        let candidates = generate_candidates(&fs, "dotfiles", None, &[], &roots);

        assert_eq!(candidates, paths(&["/home/u/dotfiles", "/home/u/code/dotfiles"]));
    }
}
