//! The resolution pipeline: normalize, generate candidates, resolve, build, apply.

pub mod candidate_generator;
pub mod environment_map_builder;
pub mod environment_writer;
pub mod path_normalizer;
pub mod repo_resolver;

pub use candidate_generator::{SearchRoots, generate_candidates};
pub use environment_map_builder::{build_environment_map, override_values};
pub use environment_writer::{ApplyReport, EnvChange, apply_environment_map};
pub use path_normalizer::{normalize, normalize_str};
pub use repo_resolver::{resolve_repo_path, search_below};
