//! Authentication strategy trait.

use std::fmt::Debug;

use crate::auth::{AuthMethod, EnvVarBundle};
use crate::config::EnvSnapshot;

/// Per-method validation and environment projection.
pub trait AuthStrategy: Send + Sync + Debug {
    /// The method this strategy implements.
    fn method(&self) -> AuthMethod;

    /// Check that required inputs are present and well-formed.
    ///
    /// Returns every problem found, not just the first.
    fn validate(&self, _env: &EnvSnapshot) -> Vec<String> {
        Vec::new()
    }

    /// Variables to forward to the SDK invocation.
    fn env_vars(&self, _env: &EnvSnapshot) -> EnvVarBundle {
        EnvVarBundle::new()
    }

    /// Returns the strategy name for logging/debugging.
    fn name(&self) -> &'static str {
        self.method().as_str()
    }
}
