//! Applying a resolved path map to the process environment and persisted scopes.

use std::fmt;

use tracing::{debug, warn};

use crate::domain::{EnvKey, PersistScope, ResolvedPathMap};
use crate::ports::{EnvironmentStore, ProcessEnvironment};

/// What happened to one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvChange {
    pub key: EnvKey,
    /// New value; `None` when the variable was cleared.
    pub value: Option<String>,
    /// Scopes whose store rejected the write.
    pub persist_failures: Vec<PersistScope>,
}

impl fmt::Display for EnvChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "[env] {} => {}", self.key, value),
            None => write!(f, "[env:clear] {} (path not found)", self.key),
        }
    }
}

/// Outcome of `apply_environment_map`, one entry per key in map order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub changes: Vec<EnvChange>,
}

impl ApplyReport {
    pub fn set_count(&self) -> usize {
        self.changes.iter().filter(|c| c.value.is_some()).count()
    }

    pub fn cleared_count(&self) -> usize {
        self.changes.iter().filter(|c| c.value.is_none()).count()
    }

    pub fn has_persist_failures(&self) -> bool {
        self.changes.iter().any(|c| !c.persist_failures.is_empty())
    }
}

/// Set every resolved key and remove every unresolved one.
///
/// The process environment is always updated. Each requested scope is
/// written independently; a failing scope is logged and recorded in the
/// report without affecting other keys or scopes.
pub fn apply_environment_map(
    env: &impl ProcessEnvironment,
    store: &impl EnvironmentStore,
    map: &ResolvedPathMap,
    scopes: &[PersistScope],
) -> ApplyReport {
    let scopes = dedup_scopes(scopes);
    let changes = EnvKey::ALL
        .into_iter()
        .map(|key| apply_one(env, store, key, map.value_string(key), &scopes))
        .collect();
    ApplyReport { changes }
}

fn apply_one(
    env: &impl ProcessEnvironment,
    store: &impl EnvironmentStore,
    key: EnvKey,
    value: Option<String>,
    scopes: &[PersistScope],
) -> EnvChange {
    let name = key.as_str();
    let value = value.filter(|v| !v.is_empty());

    match &value {
        Some(v) => env.set(name, v),
        None => env.remove(name),
    }

    let mut persist_failures = Vec::new();
    for &scope in scopes {
        let result = match &value {
            Some(v) => store.persist(scope, name, v),
            None => store.clear(scope, name),
        };
        match result {
            Ok(()) => debug!(key = name, %scope, "persisted"),
            Err(err) => {
                warn!(key = name, %scope, error = %err, "could not persist variable");
                persist_failures.push(scope);
            }
        }
    }

    EnvChange { key, value, persist_failures }
}

fn dedup_scopes(scopes: &[PersistScope]) -> Vec<PersistScope> {
    let mut unique = Vec::with_capacity(scopes.len());
    for &scope in scopes {
        if !unique.contains(&scope) {
            unique.push(scope);
        }
    }
    unique
}
