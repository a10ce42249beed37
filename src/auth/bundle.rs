//! Environment forwarded to the SDK invocation.

use std::collections::{BTreeMap, HashMap};

use tokio::process::Command;

use crate::config::EnvSnapshot;

/// Variables merged into the SDK process environment before each query.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvVarBundle {
    vars: BTreeMap<String, String>,
}

impl EnvVarBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Copy `key` from the snapshot if it is set.
    pub fn forward(&mut self, env: &EnvSnapshot, key: &str) {
        if let Some(value) = env.get(key) {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variable names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay onto an existing environment map. Bundle values win.
    pub fn merge_into(&self, target: &mut HashMap<String, String>) {
        for (k, v) in &self.vars {
            target.insert(k.clone(), v.clone());
        }
    }

    /// Set the bundle on a subprocess command.
    pub fn apply_to<'a>(&self, command: &'a mut Command) -> &'a mut Command {
        command.envs(&self.vars)
    }
}

impl std::fmt::Debug for EnvVarBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.vars.keys().map(|k| (k, "[REDACTED]")))
            .finish()
    }
}
