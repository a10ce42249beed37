//! Direct Anthropic API key strategy.

use super::AuthStrategy;
use crate::auth::{AuthMethod, EnvVarBundle};
use crate::config::{EnvSnapshot, vars};

/// Keys shorter than this are rejected as placeholders.
pub const MIN_ANTHROPIC_API_KEY_LEN: usize = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicStrategy;

impl AuthStrategy for AnthropicStrategy {
    fn method(&self) -> AuthMethod {
        AuthMethod::Anthropic
    }

    fn validate(&self, env: &EnvSnapshot) -> Vec<String> {
        match env.get(vars::ANTHROPIC_API_KEY) {
            None => vec![format!(
                "{} environment variable is not set",
                vars::ANTHROPIC_API_KEY
            )],
            Some(key) if key.chars().count() < MIN_ANTHROPIC_API_KEY_LEN => vec![format!(
                "{} appears to be invalid (too short)",
                vars::ANTHROPIC_API_KEY
            )],
            Some(_) => Vec::new(),
        }
    }

    fn env_vars(&self, env: &EnvSnapshot) -> EnvVarBundle {
        let mut bundle = EnvVarBundle::new();
        bundle.forward(env, vars::ANTHROPIC_API_KEY);
        bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: &str) -> EnvSnapshot {
        EnvSnapshot::new().with(vars::ANTHROPIC_API_KEY, key)
    }

    #[test]
    fn test_valid_key() {
        assert!(
            AnthropicStrategy
                .validate(&with_key("sk-ant-REDACTED"))
                .is_empty()
        );
    }

    #[test]
    fn test_missing_key() {
        let errors = AnthropicStrategy.validate(&EnvSnapshot::new());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_short_key() {
        let errors = AnthropicStrategy.validate(&with_key("short"));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("too short"));
    }

    #[test]
    fn test_length_boundary() {
        let exact = "k".repeat(MIN_ANTHROPIC_API_KEY_LEN);
        assert!(AnthropicStrategy.validate(&with_key(&exact)).is_empty());

        let under = "k".repeat(MIN_ANTHROPIC_API_KEY_LEN - 1);
        assert_eq!(AnthropicStrategy.validate(&with_key(&under)).len(), 1);
    }

    #[test]
    fn test_env_vars() {
        let bundle = AnthropicStrategy.env_vars(&with_key("test-key-12345"));
        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.get(vars::ANTHROPIC_API_KEY), Some("test-key-12345"));

        assert!(AnthropicStrategy.env_vars(&EnvSnapshot::new()).is_empty());
    }
}
