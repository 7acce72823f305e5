use std::env;

use crate::ports::ProcessEnvironment;

/// The environment block of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl ProcessEnvironment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        // SAFETY: repoenv mutates the environment only from the thread driving the bootstrap.
        unsafe {
            env::set_var(key, value);
        }
    }

    fn remove(&self, key: &str) {
        // SAFETY: see `set`.
        unsafe {
            env::remove_var(key);
        }
    }
}
