//! Process-level auth configuration.

use secrecy::{ExposeSecret, SecretString};

use super::inbound::{bearer_token, constant_time_eq};
use super::strategy::strategy_for;
use super::{AuthInfo, AuthMethod, AuthStatus, EnvVarBundle};
use crate::config::{EnvSnapshot, vars};
use crate::{Error, Result};

/// Resolved authentication state for one environment snapshot.
///
/// The method is fixed at construction. To pick up a changed environment,
/// build a new resolver from a new snapshot.
#[derive(Debug)]
pub struct AuthResolver {
    env: EnvSnapshot,
    method: AuthMethod,
    api_key_override: Option<SecretString>,
}

impl AuthResolver {
    /// Resolve from an explicit snapshot.
    pub fn new(env: EnvSnapshot) -> Self {
        let method = AuthMethod::resolve(&env);
        Self {
            env,
            method,
            api_key_override: None,
        }
    }

    /// Resolve from the current process environment.
    pub fn from_env() -> Self {
        Self::new(EnvSnapshot::from_process())
    }

    /// Gate inbound requests with `key` instead of `API_KEY`.
    ///
    /// Typically supplied by a startup flag. Blank keys are ignored.
    pub fn with_api_key_override(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key_override = (!key.trim().is_empty()).then(|| SecretString::from(key));
        self
    }

    pub fn method(&self) -> AuthMethod {
        self.method
    }

    pub fn env(&self) -> &EnvSnapshot {
        &self.env
    }

    /// Validate the resolved method against the snapshot.
    pub fn validate(&self) -> AuthStatus {
        validate(self.method, &self.env)
    }

    /// Validation outcome paired with its status, for startup checks.
    pub fn validate_auth(&self) -> (bool, AuthStatus) {
        let status = self.validate();
        (status.valid, status)
    }

    /// Variables to forward to the SDK invocation.
    pub fn env_vars(&self) -> EnvVarBundle {
        env_vars(self.method, &self.env)
    }

    /// Diagnostics report: method, status and forwarded variable names.
    pub fn info(&self) -> AuthInfo {
        AuthInfo {
            method: self.method,
            status: self.validate(),
            environment_variables: self.env_vars().keys().map(str::to_string).collect(),
        }
    }

    /// Gating key for inbound requests: override, then `API_KEY`.
    pub fn api_key(&self) -> Option<SecretString> {
        self.api_key_override.clone().or_else(|| {
            self.env
                .get(vars::API_KEY)
                .map(|key| SecretString::from(key.to_string()))
        })
    }

    /// Whether inbound requests are gated at all.
    pub fn requires_api_key(&self) -> bool {
        self.api_key_override.is_some() || self.env.is_set(vars::API_KEY)
    }

    /// Check a credential presented by an inbound request.
    ///
    /// Without a configured gating key every request is allowed. A blank
    /// credential counts as missing.
    pub fn verify_inbound_request(&self, presented: Option<&str>) -> Result<()> {
        let Some(expected) = self.api_key() else {
            return Ok(());
        };
        let presented = presented
            .filter(|p| !p.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;
        if constant_time_eq(expected.expose_secret().as_bytes(), presented.as_bytes()) {
            Ok(())
        } else {
            Err(Error::InvalidApiKey)
        }
    }

    /// Check a raw `Authorization` header value.
    ///
    /// Anything other than a non-blank Bearer token counts as missing.
    pub fn verify_authorization_header(&self, header: Option<&str>) -> Result<()> {
        self.verify_inbound_request(header.and_then(bearer_token))
    }

    /// Log the resolved method and any validation errors.
    pub fn log_status(&self) {
        let status = self.validate();
        tracing::info!(
            method = %self.method,
            valid = status.valid,
            gated = self.requires_api_key(),
            "Claude Code authentication resolved"
        );
        for error in &status.errors {
            tracing::warn!(method = %self.method, "{}", error);
        }
    }
}

/// Validate `method`'s required inputs. Never fails; problems are collected.
pub fn validate(method: AuthMethod, env: &EnvSnapshot) -> AuthStatus {
    AuthStatus::new(method, strategy_for(method).validate(env))
}

/// Project the variables `method` forwards, whether or not they validate.
pub fn env_vars(method: AuthMethod, env: &EnvSnapshot) -> EnvVarBundle {
    strategy_for(method).env_vars(env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gated(key: &str) -> AuthResolver {
        AuthResolver::new(EnvSnapshot::new().with(vars::API_KEY, key))
    }

    #[test]
    fn test_method_fixed_at_construction() {
        let env = EnvSnapshot::new().with(vars::CLAUDE_AUTH_METHOD, "bedrock");
        let resolver = AuthResolver::new(env);
        assert_eq!(resolver.method(), AuthMethod::Bedrock);
        assert_eq!(resolver.validate().method, AuthMethod::Bedrock);
    }

    #[test]
    fn test_api_key_sources() {
        assert!(AuthResolver::new(EnvSnapshot::new()).api_key().is_none());

        let key = gated("env-api-key").api_key().unwrap();
        assert_eq!(key.expose_secret(), "env-api-key");

        let key = gated("env-key")
            .with_api_key_override("runtime-key")
            .api_key()
            .unwrap();
        assert_eq!(key.expose_secret(), "runtime-key");

        let key = gated("env-key").with_api_key_override("").api_key().unwrap();
        assert_eq!(key.expose_secret(), "env-key");

        let key = gated("env-key").with_api_key_override("   ").api_key().unwrap();
        assert_eq!(key.expose_secret(), "env-key");
    }

    #[test]
    fn test_whitespace_override_keeps_open_access() {
        let resolver = AuthResolver::new(EnvSnapshot::new()).with_api_key_override("   ");
        assert!(!resolver.requires_api_key());
        assert!(resolver.api_key().is_none());
        assert!(resolver.verify_inbound_request(None).is_ok());
    }

    #[test]
    fn test_open_access_without_key() {
        let resolver = AuthResolver::new(EnvSnapshot::new());
        assert!(!resolver.requires_api_key());
        assert!(resolver.verify_inbound_request(None).is_ok());
        assert!(resolver.verify_inbound_request(Some("anything")).is_ok());
    }

    #[test]
    fn test_gated_verification() {
        let resolver = gated("K");
        assert!(resolver.requires_api_key());
        assert!(resolver.verify_inbound_request(Some("K")).is_ok());
        assert!(matches!(
            resolver.verify_inbound_request(Some("X")),
            Err(Error::InvalidApiKey)
        ));
        assert!(matches!(
            resolver.verify_inbound_request(None),
            Err(Error::MissingApiKey)
        ));
    }

    #[test]
    fn test_blank_credential_is_missing() {
        let resolver = gated("K");
        for blank in ["", "   "] {
            assert!(matches!(
                resolver.verify_inbound_request(Some(blank)),
                Err(Error::MissingApiKey)
            ));
            let header = format!("Bearer {}", blank);
            assert!(matches!(
                resolver.verify_authorization_header(Some(&header)),
                Err(Error::MissingApiKey)
            ));
        }
    }

    #[test]
    fn test_override_gates_without_env() {
        let resolver = AuthResolver::new(EnvSnapshot::new()).with_api_key_override("runtime-key");
        assert!(resolver.verify_inbound_request(Some("runtime-key")).is_ok());
        assert!(resolver.verify_inbound_request(Some("env-key")).is_err());
    }

    #[test]
    fn test_authorization_header() {
        let resolver = gated("test-secret-key");
        assert!(
            resolver
                .verify_authorization_header(Some("Bearer test-secret-key"))
                .is_ok()
        );
        assert!(matches!(
            resolver.verify_authorization_header(Some("Bearer wrong-key")),
            Err(Error::InvalidApiKey)
        ));
        assert!(matches!(
            resolver.verify_authorization_header(Some("Basic dGVzdA==")),
            Err(Error::MissingApiKey)
        ));
        assert!(matches!(
            resolver.verify_authorization_header(None),
            Err(Error::MissingApiKey)
        ));
    }

    #[test]
    fn test_debug_hides_override() {
        let resolver =
            AuthResolver::new(EnvSnapshot::new()).with_api_key_override("runtime-secret");
        assert!(!format!("{:?}", resolver).contains("runtime-secret"));
    }
}
