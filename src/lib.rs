//! # claude-gateway-auth
//!
//! Authentication core for an OpenAI-compatible chat-completions gateway
//! backed by Claude Code.
//!
//! The gateway picks one of four outbound credential strategies from its
//! environment, validates that strategy's inputs, and forwards the matching
//! variables to every SDK invocation. Separately, an optional API key gates
//! inbound HTTP requests.
//!
//! ## Quick Start
//!
//! ```rust
//! use claude_gateway_auth::{AuthMethod, AuthResolver, EnvSnapshot};
//!
//! let env = EnvSnapshot::new()
//!     .with("CLAUDE_AUTH_METHOD", "bedrock")
//!     .with("AWS_REGION", "us-east-1");
//! let resolver = AuthResolver::new(env);
//!
//! assert_eq!(resolver.method(), AuthMethod::Bedrock);
//! let status = resolver.validate();
//! assert!(!status.valid);
//! assert_eq!(status.errors.len(), 2);
//!
//! let bundle = resolver.env_vars();
//! assert_eq!(bundle.get("CLAUDE_CODE_USE_BEDROCK"), Some("1"));
//! ```
//!
//! ## Inbound Gating
//!
//! ```rust
//! use claude_gateway_auth::{AuthResolver, EnvSnapshot, Error};
//!
//! let resolver = AuthResolver::new(EnvSnapshot::new()).with_api_key_override("K");
//!
//! assert!(resolver.verify_authorization_header(Some("Bearer K")).is_ok());
//! let err = resolver.verify_inbound_request(Some("X")).unwrap_err();
//! assert!(matches!(err, Error::InvalidApiKey));
//! assert_eq!(err.status_code(), Some(401));
//! ```

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod config;

pub use auth::{
    AuthInfo, AuthMethod, AuthResolver, AuthStatus, AuthStrategy, EnvVarBundle,
    MIN_ANTHROPIC_API_KEY_LEN,
};
pub use config::EnvSnapshot;

/// Error type for claude-gateway-auth operations.
///
/// Missing or malformed outbound credentials are not errors; they are
/// reported in [`AuthStatus::errors`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A gating key is configured but the request presented none.
    #[error("Missing API key")]
    MissingApiKey,

    /// The presented key does not match the gating key.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Inbound request rejected (401)
    Authorization,
    /// Configuration or parsing errors
    Configuration,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::MissingApiKey | Error::InvalidApiKey => ErrorCategory::Authorization,
            Error::Config(_) => ErrorCategory::Configuration,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.category() == ErrorCategory::Authorization
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    /// HTTP status to return at the request boundary.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::MissingApiKey | Error::InvalidApiKey => Some(401),
            Error::Config(_) => None,
        }
    }

    /// `WWW-Authenticate` challenge to send with a 401.
    pub fn www_authenticate(&self) -> Option<&'static str> {
        self.is_unauthorized().then_some("Bearer")
    }
}

/// Result type alias for claude-gateway-auth operations.
pub type Result<T> = std::result::Result<T, Error>;
