//! Environment-variable overlay.
//!
//! Validation never reads process state on its own: callers hand it an
//! [`Environment`], either built explicitly (tests) or snapshotted from the
//! process with [`Environment::from_process`] (binaries).

use std::collections::HashMap;

/// Prefix shared by every configuration environment variable.
pub const ENV_PREFIX: &str = "URL_POINTERS_";

/// A key-value mapping of `URL_POINTERS_<FIELD>` variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// An environment with no variables set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the `URL_POINTERS_*` variables of the running process.
    pub fn from_process() -> Self {
        std::env::vars()
            .filter(|(name, _)| name.starts_with(ENV_PREFIX))
            .collect()
    }

    /// Variable name for a field, e.g. `PORT` → `URL_POINTERS_PORT`.
    pub fn var_name(field: &str) -> String {
        format!("{ENV_PREFIX}{field}")
    }

    /// Set the variable for `field`.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.vars.insert(Self::var_name(field), value.into());
    }

    /// Builder form of [`Environment::set`].
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Raw value of the variable for `field`, if set.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.vars.get(&Self::var_name(field)).map(String::as_str)
    }

    /// Whether no variable is set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Collects full variable names (already prefixed) and their values.
impl FromIterator<(String, String)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}
