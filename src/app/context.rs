use crate::domain::BootstrapConfig;
use crate::ports::{EnvironmentStore, Filesystem, ProcessEnvironment};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: Filesystem, E: ProcessEnvironment, S: EnvironmentStore> {
    fs: F,
    env: E,
    store: S,
    config: BootstrapConfig,
}

impl<F: Filesystem, E: ProcessEnvironment, S: EnvironmentStore> AppContext<F, E, S> {
    /// Create a new application context.
    pub fn new(fs: F, env: E, store: S, config: BootstrapConfig) -> Self {
        Self { fs, env, store, config }
    }

    /// Filesystem used for discovery.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Environment of the running process.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Store for persisted scopes.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }
}
