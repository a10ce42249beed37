//! Google Vertex AI strategy.

use super::AuthStrategy;
use super::env::missing_vars;
use crate::auth::{AuthMethod, EnvVarBundle};
use crate::config::{EnvSnapshot, vars};

const REQUIRED: [&str; 2] = [vars::ANTHROPIC_VERTEX_PROJECT_ID, vars::CLOUD_ML_REGION];

#[derive(Debug, Clone, Copy, Default)]
pub struct VertexStrategy;

impl AuthStrategy for VertexStrategy {
    fn method(&self) -> AuthMethod {
        AuthMethod::Vertex
    }

    fn validate(&self, env: &EnvSnapshot) -> Vec<String> {
        missing_vars(env, &REQUIRED, "Vertex AI")
    }

    fn env_vars(&self, env: &EnvSnapshot) -> EnvVarBundle {
        let mut bundle = EnvVarBundle::new();
        bundle.insert(vars::CLAUDE_CODE_USE_VERTEX, "1");
        for key in REQUIRED {
            bundle.forward(env, key);
        }
        bundle
    }
}
