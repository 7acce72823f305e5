mod environment_store;
mod filesystem;
mod process_environment;

pub use environment_store::EnvironmentStore;
pub use filesystem::Filesystem;
pub use process_environment::ProcessEnvironment;
