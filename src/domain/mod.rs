pub mod bootstrap_config;
pub mod env_key;
pub mod error;
pub mod path_text;
pub mod persist_scope;
pub mod repo;
pub mod resolved_paths;
pub mod shell;

pub use bootstrap_config::{
    BootstrapConfig, DEFAULT_FALLBACK_DEPTH, PersistConfig, RepoNames, SearchConfig,
};
pub use env_key::EnvKey;
pub use error::AppError;
pub use persist_scope::PersistScope;
pub use repo::RepoKind;
pub use resolved_paths::ResolvedPathMap;
pub use shell::ShellDialect;
