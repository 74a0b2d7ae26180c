//! Error types for pointers-config

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pointers-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// A single rule a configuration failed to satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Violation {
    /// A key that is not part of the schema.
    UnknownProperty(String),
    /// A required field absent from both the input and the environment.
    Missing(&'static str),
    /// A field present with a value of the wrong shape.
    InvalidValue {
        /// Field name as it appears in the schema
        field: &'static str,
        /// Human-readable description of the accepted shape
        expected: &'static str,
    },
    /// A name in the provider selection that no provider answers to.
    UnknownProvider(String),
    /// Neither `users` nor `domains` carries an entry.
    EmptyAllowList,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnknownProperty(key) => write!(f, "unknown property {key}"),
            Violation::Missing(field) => write!(f, "missing {field}"),
            Violation::InvalidValue { field, expected } => {
                write!(f, "invalid {field}: expected {expected}")
            }
            Violation::UnknownProvider(name) => write!(f, "unknown auth provider {name}"),
            Violation::EmptyAllowList => {
                write!(f, r#"at least one of "users" or "domains" must be specified"#)
            }
        }
    }
}

/// Every violation found in one validation pass, in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Create an empty violation list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a violation.
    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Whether no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the violations in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// The individual messages, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("\n  "))
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The configuration broke one or more schema rules.
    #[error("Invalid configuration:\n  {0}")]
    Invalid(Violations),

    /// The configuration file could not be read.
    #[error("failed to load configuration: {source}")]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON.
    #[error("failed to load configuration: invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file holds JSON that is not an object.
    #[error("failed to load configuration: invalid JSON: expected an object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead
        found: &'static str,
    },

    /// A validated record did not fit its typed configuration.
    #[error("configuration schema mismatch: {0}")]
    Schema(String),
}

impl Error {
    /// The violations carried by an [`Error::Invalid`], if any.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Error::Invalid(violations) => Some(violations),
            _ => None,
        }
    }
}
