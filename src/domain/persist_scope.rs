use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Durable location where resolved variables are stored beyond the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistScope {
    /// Visible to every new session of the current user.
    User,
    /// Visible to every user on the machine.
    Machine,
}

impl PersistScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersistScope::User => "user",
            PersistScope::Machine => "machine",
        }
    }

    /// Name of the scope as understood by `System.EnvironmentVariableTarget`.
    pub fn dotnet_target(&self) -> &'static str {
        match self {
            PersistScope::User => "User",
            PersistScope::Machine => "Machine",
        }
    }
}

impl fmt::Display for PersistScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersistScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(PersistScope::User),
            "machine" => Ok(PersistScope::Machine),
            _ => Err(AppError::UnknownScope(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("User".parse::<PersistScope>().unwrap(), PersistScope::User);
        assert_eq!("MACHINE".parse::<PersistScope>().unwrap(), PersistScope::Machine);
    }

    #[test]
    fn rejects_process_scope() {
        assert!(matches!("process".parse::<PersistScope>(), Err(AppError::UnknownScope(_))));
    }

    #[test]
    fn display_roundtrips() {
        for scope in [PersistScope::User, PersistScope::Machine] {
            assert_eq!(scope.to_string().parse::<PersistScope>().unwrap(), scope);
        }
    }
}
