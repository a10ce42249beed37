//! Validation results and diagnostics reports.

use serde::Serialize;

use super::AuthMethod;

/// Outcome of validating the active auth method's inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthStatus {
    pub method: AuthMethod,
    pub valid: bool,
    pub errors: Vec<String>,
}

impl AuthStatus {
    /// Build a status; `valid` is derived from `errors`.
    pub fn new(method: AuthMethod, errors: Vec<String>) -> Self {
        Self {
            method,
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Read-only troubleshooting report for operators.
///
/// Lists the names of forwarded variables, never their values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthInfo {
    pub method: AuthMethod,
    pub status: AuthStatus,
    pub environment_variables: Vec<String>,
}

impl AuthInfo {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "method": self.method,
            "status": self.status,
            "environment_variables": self.environment_variables,
        })
    }
}
