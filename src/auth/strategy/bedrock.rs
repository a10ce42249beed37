//! AWS Bedrock strategy.

use super::AuthStrategy;
use super::env::missing_vars;
use crate::auth::{AuthMethod, EnvVarBundle};
use crate::config::{EnvSnapshot, vars};

const REQUIRED: [&str; 3] = [
    vars::AWS_ACCESS_KEY_ID,
    vars::AWS_SECRET_ACCESS_KEY,
    vars::AWS_REGION,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct BedrockStrategy;

impl AuthStrategy for BedrockStrategy {
    fn method(&self) -> AuthMethod {
        AuthMethod::Bedrock
    }

    fn validate(&self, env: &EnvSnapshot) -> Vec<String> {
        missing_vars(env, &REQUIRED, "Bedrock")
    }

    fn env_vars(&self, env: &EnvSnapshot) -> EnvVarBundle {
        let mut bundle = EnvVarBundle::new();
        bundle.insert(vars::CLAUDE_CODE_USE_BEDROCK, "1");
        for key in REQUIRED {
            bundle.forward(env, key);
        }
        bundle
    }
}
