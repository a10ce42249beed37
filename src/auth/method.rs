//! Auth method selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{EnvSnapshot, vars};
use crate::{Error, Result};

/// Outbound credential strategy for the underlying SDK.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    /// Claude Code CLI login state.
    #[serde(alias = "cli")]
    ClaudeCli,
    /// Direct Anthropic API key.
    #[serde(alias = "api_key")]
    Anthropic,
    /// AWS Bedrock.
    Bedrock,
    /// Google Vertex AI.
    Vertex,
}

impl AuthMethod {
    pub const ALL: [AuthMethod; 4] = [
        AuthMethod::ClaudeCli,
        AuthMethod::Anthropic,
        AuthMethod::Bedrock,
        AuthMethod::Vertex,
    ];

    /// Canonical name, as used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::ClaudeCli => "claude_cli",
            AuthMethod::Anthropic => "anthropic",
            AuthMethod::Bedrock => "bedrock",
            AuthMethod::Vertex => "vertex",
        }
    }

    /// Resolve the active method from an environment snapshot.
    ///
    /// An explicit `CLAUDE_AUTH_METHOD` wins. Unrecognized values fall through
    /// to the legacy flags, then to `ANTHROPIC_API_KEY`, then to the CLI.
    pub fn resolve(env: &EnvSnapshot) -> Self {
        if let Some(raw) = env.get(vars::CLAUDE_AUTH_METHOD) {
            match raw.parse::<AuthMethod>() {
                Ok(method) => {
                    tracing::debug!(method = %method, "Auth method selected explicitly");
                    return method;
                }
                Err(_) => {
                    tracing::warn!(
                        value = raw,
                        "Unrecognized {}, falling back to auto-detection",
                        vars::CLAUDE_AUTH_METHOD
                    );
                }
            }
        }

        let method = if env.is_flag_set(vars::CLAUDE_CODE_USE_BEDROCK) {
            AuthMethod::Bedrock
        } else if env.is_flag_set(vars::CLAUDE_CODE_USE_VERTEX) {
            AuthMethod::Vertex
        } else if env.is_set(vars::ANTHROPIC_API_KEY) {
            AuthMethod::Anthropic
        } else {
            AuthMethod::ClaudeCli
        };
        tracing::debug!(method = %method, "Auth method auto-detected");
        method
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cli" | "claude_cli" => Ok(AuthMethod::ClaudeCli),
            "api_key" | "anthropic" => Ok(AuthMethod::Anthropic),
            "bedrock" => Ok(AuthMethod::Bedrock),
            "vertex" => Ok(AuthMethod::Vertex),
            other => Err(Error::Config(format!("unknown auth method '{}'", other))),
        }
    }
}
