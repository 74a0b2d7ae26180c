//! Typed configuration records built on top of the validation engine.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::env::Environment;
use crate::error::{Error, Result};
use crate::logger::InfoLogger;
use crate::schema::Schema;
use crate::validate::validate;

/// The permitted user identifiers and email domains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    /// Identifiers permitted verbatim.
    pub users: Vec<String>,
    /// Domains whose addresses are permitted.
    pub domains: Vec<String>,
}

impl AllowList {
    /// Build an allow-list from optional user and domain lists.
    pub fn new(users: Option<&[String]>, domains: Option<&[String]>) -> Self {
        Self {
            users: users.map(<[String]>::to_vec).unwrap_or_default(),
            domains: domains.map(<[String]>::to_vec).unwrap_or_default(),
        }
    }

    /// Whether neither list has an entry.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.domains.is_empty()
    }
}

/// A configuration record validated against a fixed [`Schema`].
///
/// Implementors only supply the schema and the allow-list accessor; the
/// loading entry points are shared.
pub trait ConfigSchema: Serialize + DeserializeOwned + Sized {
    /// Schema the record is validated against.
    const SCHEMA: &'static Schema;

    /// The allow-list carried by this record.
    fn allow_list(&self) -> AllowList;

    /// Validate an in-memory object, filling absent fields from `env`.
    fn validate(raw: &Map<String, Value>, env: &Environment) -> Result<Self> {
        let output = validate(Self::SCHEMA, raw, env).map_err(Error::Invalid)?;
        serde_json::from_value(Value::Object(output)).map_err(|e| Error::Schema(e.to_string()))
    }

    /// Validate a JSON value, which must be an object.
    fn from_value(raw: &Value, env: &Environment) -> Result<Self> {
        match raw {
            Value::Object(map) => Self::validate(map, env),
            other => Err(Error::NotAnObject {
                found: json_type(other),
            }),
        }
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// Logs `reading configuration from <path>` before touching the file.
    fn from_file(path: &Path, env: &Environment, logger: &dyn InfoLogger) -> Result<Self> {
        logger.info(&format!("reading configuration from {}", path.display()));
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: Value = serde_json::from_str(&content)?;
        Self::from_value(&raw, env)
    }

    /// The record as `URL_POINTERS_<FIELD>` variables, in declaration order.
    ///
    /// Lists are comma-joined, so the output feeds back through the
    /// environment overlay. A list item the overlay would split or trim
    /// differently (a comma, surrounding whitespace, or an empty item)
    /// fails with [`Error::Schema`] instead of exporting a different config.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = serde_json::to_value(self).map_err(|e| Error::Schema(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(Error::Schema("record did not serialize to an object".into()));
        };
        map.into_iter()
            .map(|(name, value)| {
                let rendered = env_value(&name, &value)?;
                Ok((Environment::var_name(&name), rendered))
            })
            .collect()
    }
}

fn env_value(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Array(items) => {
            let items = items
                .iter()
                .map(|item| list_item(field, item))
                .collect::<Result<Vec<_>>>()?;
            Ok(items.join(","))
        }
        other => Ok(other.to_string()),
    }
}

fn list_item(field: &str, item: &Value) -> Result<String> {
    let text = match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.is_empty() || text.contains(',') || text.trim() != text {
        return Err(Error::Schema(format!(
            "{field} item {text:?} cannot be exported as a comma-separated variable"
        )));
    }
    Ok(text)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
