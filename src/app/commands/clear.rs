//! Remove every managed variable.

use crate::app::AppContext;
use crate::app::services::{ApplyReport, apply_environment_map};
use crate::domain::{PersistScope, ResolvedPathMap};
use crate::ports::{EnvironmentStore, Filesystem, ProcessEnvironment};

/// Remove all managed keys from the process environment and the given scopes.
pub fn execute<F, E, S>(ctx: &AppContext<F, E, S>, scopes: &[PersistScope]) -> ApplyReport
where
    F: Filesystem,
    E: ProcessEnvironment,
    S: EnvironmentStore,
{
    apply_environment_map(ctx.env(), ctx.store(), &ResolvedPathMap::default(), scopes)
}
