use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Shell dialect used when rendering `export` statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellDialect {
    /// sh, bash, zsh.
    Posix,
    Fish,
    PowerShell,
}

impl ShellDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellDialect::Posix => "posix",
            ShellDialect::Fish => "fish",
            ShellDialect::PowerShell => "powershell",
        }
    }

    /// Statement that sets `key` to `value` in the current shell session.
    pub fn set_statement(&self, key: &str, value: &str) -> String {
        match self {
            ShellDialect::Posix => format!("export {}={}", key, posix_quote(value)),
            ShellDialect::Fish => format!("set -gx {} {}", key, fish_quote(value)),
            ShellDialect::PowerShell => format!("$env:{} = {}", key, powershell_quote(value)),
        }
    }

    /// Statement that removes `key` from the current shell session.
    pub fn unset_statement(&self, key: &str) -> String {
        match self {
            ShellDialect::Posix => format!("unset {}", key),
            ShellDialect::Fish => format!("set -e {}", key),
            ShellDialect::PowerShell => {
                format!("Remove-Item Env:{} -ErrorAction SilentlyContinue", key)
            }
        }
    }
}

fn posix_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn fish_quote(value: &str) -> String {
    format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'"))
}

/// Single-quoted PowerShell literal; also used for the Windows store adapter.
pub fn powershell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

impl fmt::Display for ShellDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShellDialect {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "posix" | "sh" | "bash" | "zsh" => Ok(ShellDialect::Posix),
            "fish" => Ok(ShellDialect::Fish),
            "powershell" | "pwsh" => Ok(ShellDialect::PowerShell),
            _ => Err(AppError::UnknownShell(s.to_string())),
        }
    }
}
