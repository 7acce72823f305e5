//! Configuration file loading.
//!
//! Pure schema parsing lives in `domain::bootstrap_config`.

mod load_config;

pub use load_config::{config_home, default_config_path, default_user_store, load_config};
