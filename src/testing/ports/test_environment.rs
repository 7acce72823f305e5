//! Test double for `ProcessEnvironment`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::ports::ProcessEnvironment;

/// In-memory process environment.
#[derive(Debug, Default)]
pub struct MockEnvironment {
    pub vars: RefCell<BTreeMap<String, String>>,
}

#[allow(dead_code)]
impl MockEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(self, key: &str, value: &str) -> Self {
        self.vars.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }
}

impl ProcessEnvironment for MockEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.vars.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }
}
