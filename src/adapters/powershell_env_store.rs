//! `EnvironmentStore` backed by the Windows per-user and per-machine environment.
//!
//! Changes go through `[Environment]::SetEnvironmentVariable`, which also
//! broadcasts `WM_SETTINGCHANGE` to running sessions.

use std::collections::BTreeMap;
use std::process::Command;

use crate::domain::shell::powershell_quote;
use crate::domain::{AppError, PersistScope};
use crate::ports::EnvironmentStore;

#[derive(Debug, Clone)]
pub struct PowerShellEnvStore {
    program: String,
}

impl Default for PowerShellEnvStore {
    fn default() -> Self {
        Self::new("powershell.exe")
    }
}

impl PowerShellEnvStore {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn run(&self, script: &str) -> Result<String, String> {
        let output = Command::new(&self.program)
            .args(["-NoProfile", "-NonInteractive", "-Command", script])
            .output()
            .map_err(|e| format!("failed to start {}: {}", self.program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(if stderr.is_empty() { "Unknown error".to_string() } else { stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Script that sets (or, for `None`, deletes) a variable in the given scope.
pub(crate) fn set_variable_script(scope: PersistScope, key: &str, value: Option<&str>) -> String {
    let value = value.map(powershell_quote).unwrap_or_else(|| "$null".to_string());
    format!(
        "[Environment]::SetEnvironmentVariable({}, {}, '{}')",
        powershell_quote(key),
        value,
        scope.dotnet_target()
    )
}

pub(crate) fn list_variables_script(scope: PersistScope) -> String {
    format!(
        "$vars = [Environment]::GetEnvironmentVariables('{}'); \
         foreach ($k in $vars.Keys) {{ [Console]::Out.Write(\"$k=$($vars[$k])`0\") }}",
        scope.dotnet_target()
    )
}

/// Parse NUL-separated `KEY=value` records.
pub(crate) fn parse_variable_listing(stdout: &str) -> BTreeMap<String, String> {
    stdout
        .split('\0')
        .filter_map(|record| record.trim_start_matches(['\r', '\n']).split_once('='))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

impl EnvironmentStore for PowerShellEnvStore {
    fn persist(&self, scope: PersistScope, key: &str, value: &str) -> Result<(), AppError> {
        self.run(&set_variable_script(scope, key, Some(value))).map(|_| ()).map_err(|details| {
            AppError::Persist { scope, key: key.to_string(), details }
        })
    }

    fn clear(&self, scope: PersistScope, key: &str) -> Result<(), AppError> {
        self.run(&set_variable_script(scope, key, None))
            .map(|_| ())
            .map_err(|details| AppError::Persist { scope, key: key.to_string(), details })
    }

    fn load(&self, scope: PersistScope) -> Result<BTreeMap<String, String>, AppError> {
        let stdout = self
            .run(&list_variables_script(scope))
            .map_err(|details| AppError::Io(std::io::Error::other(details)))?;
        Ok(parse_variable_listing(&stdout))
    }
}
