//! Environment helpers shared by strategies.

use crate::config::EnvSnapshot;

/// One error per required variable that is unset or empty.
pub fn missing_vars(env: &EnvSnapshot, keys: &[&str], provider: &str) -> Vec<String> {
    keys.iter()
        .filter(|key| !env.is_set(key))
        .map(|key| format!("{} environment variable is required for {}", key, provider))
        .collect()
}
