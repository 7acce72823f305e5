//! Durable environment variable storage beyond the current process.

use std::collections::BTreeMap;

use crate::domain::{AppError, PersistScope};

/// Port for persisted (user or machine wide) environment variables.
pub trait EnvironmentStore {
    /// Create or overwrite `key` in `scope`.
    fn persist(&self, scope: PersistScope, key: &str, value: &str) -> Result<(), AppError>;

    /// Delete `key` from `scope`. No-op if it is absent.
    fn clear(&self, scope: PersistScope, key: &str) -> Result<(), AppError>;

    /// All variables currently stored in `scope`.
    fn load(&self, scope: PersistScope) -> Result<BTreeMap<String, String>, AppError>;
}
