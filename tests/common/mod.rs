//! Shared testing utilities for repoenv CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the bootstrap reads as hints; scrubbed so the host shell cannot leak in.
const HINT_VARS: [&str; 7] =
    ["PWSH_REPO", "W11_ROOT", "SCRIPTS_REPO", "SCRIPTS", "DOTFILES_REPO", "DOTFILES", "DOTFILES_PATH"];

/// Isolated filesystem with a fake `$HOME` and a `dev/` directory for checkouts.
#[allow(dead_code)]
pub struct TestContext {
    _root: TempDir,
    base: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let base = fs::canonicalize(root.path()).expect("Failed to canonicalize temp directory");
        fs::create_dir_all(base.join("home")).expect("Failed to create home directory");
        fs::create_dir_all(base.join("dev")).expect("Failed to create dev directory");
        Self { _root: root, base }
    }

    /// Canonical root of the sandbox.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Emulated `$HOME`.
    pub fn home(&self) -> PathBuf {
        self.base.join("home")
    }

    /// Emulated `$XDG_CONFIG_HOME`.
    pub fn config_home(&self) -> PathBuf {
        self.home().join(".config")
    }

    /// Directory holding the sibling checkouts.
    pub fn dev(&self) -> PathBuf {
        self.base.join("dev")
    }

    /// Default user-scope store file.
    pub fn user_store(&self) -> PathBuf {
        self.config_home().join("repoenv").join("env.toml")
    }

    /// Create `dev/<name>` and return it.
    pub fn repo(&self, name: &str) -> PathBuf {
        let path = self.dev().join(name);
        fs::create_dir_all(&path).expect("Failed to create repository directory");
        path
    }

    /// Create the three default checkouts plus the derived `pscripts` tree.
    pub fn full_layout(&self) -> PathBuf {
        let anchor = self.repo("W11-powershell");
        self.repo("dotfiles");
        let yt_dlp = self.repo("scripts").join("pscripts").join("video").join("yt_dlp");
        fs::create_dir_all(&yt_dlp).expect("Failed to create pscripts tree");
        fs::write(yt_dlp.join("ytdlp.ps1"), "# yt-dlp wrapper\n").expect("Failed to write script");
        anchor
    }

    /// Write `content` to a config file in the sandbox and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.base.join("repoenv.toml");
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read file")
    }

    /// Command for the compiled binary with a scrubbed environment and the
    /// fallback scan disabled.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("repoenv").expect("Failed to locate repoenv binary");
        cmd.current_dir(&self.base)
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("USERPROFILE")
            .env_remove("REPOENV_CONFIG")
            .env_remove("REPOENV_LOG");
        for var in HINT_VARS {
            cmd.env_remove(var);
        }
        cmd.args(["--fallback-depth", "0"]);
        cmd
    }
}
