//! Render persisted values as shell statements.

use crate::app::AppContext;
use crate::domain::{AppError, EnvKey, PersistScope, ShellDialect};
use crate::ports::{EnvironmentStore, Filesystem, ProcessEnvironment};

/// Shell script that loads the managed variables stored in `scope`.
///
/// Managed keys missing from the store are unset so that a stale value
/// from an earlier session does not survive. Unmanaged entries are ignored.
pub fn execute<F, E, S>(
    ctx: &AppContext<F, E, S>,
    scope: PersistScope,
    shell: ShellDialect,
) -> Result<String, AppError>
where
    F: Filesystem,
    E: ProcessEnvironment,
    S: EnvironmentStore,
{
    let stored = ctx.store().load(scope)?;
    let mut script = String::new();
    for key in EnvKey::ALL {
        let line = match stored.get(key.as_str()).filter(|v| !v.is_empty()) {
            Some(value) => shell.set_statement(key.as_str(), value),
            None => shell.unset_statement(key.as_str()),
        };
        script.push_str(&line);
        script.push('\n');
    }
    Ok(script)
}
