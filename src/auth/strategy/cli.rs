//! Claude Code CLI strategy.

use super::AuthStrategy;
use crate::auth::AuthMethod;

/// Relies on the CLI's own login state, which is not inspected here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeCliStrategy;

impl AuthStrategy for ClaudeCliStrategy {
    fn method(&self) -> AuthMethod {
        AuthMethod::ClaudeCli
    }
}
