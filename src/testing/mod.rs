pub mod ports;

#[allow(unused_imports)]
pub use ports::MockEnvStore;
#[allow(unused_imports)]
pub use ports::MockEnvironment;
#[allow(unused_imports)]
pub use ports::MockFilesystem;
