mod local_filesystem;
mod powershell_env_store;
mod system_environment;
mod toml_env_store;

pub use local_filesystem::LocalFilesystem;
pub use powershell_env_store::PowerShellEnvStore;
pub use system_environment::SystemEnvironment;
pub use toml_env_store::{DEFAULT_MACHINE_STORE, TomlEnvStore};

/// Persisted-scope store for the host platform.
#[cfg(windows)]
pub type PlatformEnvStore = PowerShellEnvStore;

/// Persisted-scope store for the host platform.
#[cfg(not(windows))]
pub type PlatformEnvStore = TomlEnvStore<LocalFilesystem>;
