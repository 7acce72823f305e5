//! Test double for `EnvironmentStore`.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{AppError, PersistScope};
use crate::ports::EnvironmentStore;

/// In-memory persisted scopes. Scopes marked with `failing` reject every write.
#[derive(Debug, Default)]
pub struct MockEnvStore {
    pub scopes: RefCell<BTreeMap<PersistScope, BTreeMap<String, String>>>,
    pub failing: RefCell<BTreeSet<PersistScope>>,
}

#[allow(dead_code)]
impl MockEnvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(self, scope: PersistScope, key: &str, value: &str) -> Self {
        self.scopes
            .borrow_mut()
            .entry(scope)
            .or_default()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn failing(self, scope: PersistScope) -> Self {
        self.failing.borrow_mut().insert(scope);
        self
    }

    pub fn value(&self, scope: PersistScope, key: &str) -> Option<String> {
        self.scopes.borrow().get(&scope).and_then(|vars| vars.get(key).cloned())
    }

    fn check(&self, scope: PersistScope, key: &str) -> Result<(), AppError> {
        if self.failing.borrow().contains(&scope) {
            return Err(AppError::Persist {
                scope,
                key: key.to_string(),
                details: "access denied".to_string(),
            });
        }
        Ok(())
    }
}

impl EnvironmentStore for MockEnvStore {
    fn persist(&self, scope: PersistScope, key: &str, value: &str) -> Result<(), AppError> {
        self.check(scope, key)?;
        self.scopes
            .borrow_mut()
            .entry(scope)
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, scope: PersistScope, key: &str) -> Result<(), AppError> {
        self.check(scope, key)?;
        if let Some(vars) = self.scopes.borrow_mut().get_mut(&scope) {
            vars.remove(key);
        }
        Ok(())
    }

    fn load(&self, scope: PersistScope) -> Result<BTreeMap<String, String>, AppError> {
        Ok(self.scopes.borrow().get(&scope).cloned().unwrap_or_default())
    }
}
