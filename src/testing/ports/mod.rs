mod test_env_store;
mod test_environment;
mod test_filesystem;

pub use self::test_env_store::MockEnvStore;
pub use self::test_environment::MockEnvironment;
pub use self::test_filesystem::MockFilesystem;
