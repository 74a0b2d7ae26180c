//! The validation engine shared by every schema.
//!
//! Validation is exhaustive: each pass walks the whole schema and collects
//! every violation before deciding the outcome. Report order is
//!
//! 1. unknown properties, in input order;
//! 2. core fields, in declaration order;
//! 3. fields of selected providers, in declaration order;
//! 4. unknown provider names, in selection order;
//! 5. the allow-list rule.

use serde_json::{Map, Value};

use crate::env::Environment;
use crate::error::{Violation, Violations};
use crate::schema::{Field, FieldKind, Requirement, Schema};

/// Allow-list field holding permitted user identifiers.
pub const USERS_FIELD: &str = "users";

/// Allow-list field holding permitted email domains.
pub const DOMAINS_FIELD: &str = "domains";

/// A field's value after the environment overlay.
#[derive(Debug, Clone, PartialEq)]
enum Resolved {
    Absent,
    Present(Value),
    Invalid,
}

/// Validate `raw` against `schema`, filling absent fields from `env`.
///
/// On success returns an object holding exactly the recognized fields,
/// defaults included, keyed in declaration order.
pub fn validate(
    schema: &Schema,
    raw: &Map<String, Value>,
    env: &Environment,
) -> std::result::Result<Map<String, Value>, Violations> {
    let mut violations = Violations::new();

    for key in raw.keys() {
        if !schema.recognizes(key) {
            violations.push(Violation::UnknownProperty(key.clone()));
        }
    }

    let selector = schema.providers.map(|selection| selection.field);
    let resolved: Vec<(&Field, Resolved)> = schema
        .all_fields()
        .map(|field| {
            let mut value = resolve(field, raw, env);
            if Some(field.name) == selector {
                value = dedupe(value);
            }
            (field, value)
        })
        .collect();
    let lookup = |name: &str| {
        resolved
            .iter()
            .find(|(field, _)| field.name == name)
            .map(|(_, value)| value)
    };

    for (field, value) in resolved.iter().take(schema.fields.len()) {
        check(field, value, true, &mut violations);
    }

    if let Some(selection) = schema.providers {
        let selected = lookup(selection.field)
            .map(string_items)
            .unwrap_or_default();

        for provider in selection.providers {
            let chosen = selected.iter().any(|name| name == provider.name);
            for field in provider.fields {
                if let Some(value) = lookup(field.name) {
                    check(field, value, chosen, &mut violations);
                }
            }
        }

        for name in &selected {
            if selection.provider(name).is_none() {
                violations.push(Violation::UnknownProvider(name.clone()));
            }
        }
    }

    if schema.requires_allow_list {
        let has_entries = |name| lookup(name).is_some_and(|value| !string_items(value).is_empty());
        if !has_entries(USERS_FIELD) && !has_entries(DOMAINS_FIELD) {
            violations.push(Violation::EmptyAllowList);
        }
    }

    if !violations.is_empty() {
        log::debug!(
            "{} configuration rejected with {} violation(s)",
            schema.name,
            violations.len()
        );
        return Err(violations);
    }

    let mut output = Map::new();
    for (field, value) in resolved {
        match (value, field.requirement) {
            (Resolved::Present(value), _) => {
                output.insert(field.name.to_string(), value);
            }
            (Resolved::Absent, Requirement::Default(default)) => {
                output.insert(field.name.to_string(), Value::from(default));
            }
            _ => {}
        }
    }
    Ok(output)
}

fn check(field: &Field, value: &Resolved, enforce_required: bool, violations: &mut Violations) {
    match value {
        Resolved::Present(_) => {}
        Resolved::Invalid => violations.push(Violation::InvalidValue {
            field: field.name,
            expected: field.kind.expected(),
        }),
        Resolved::Absent => {
            if enforce_required && field.requirement == Requirement::Required {
                violations.push(Violation::Missing(field.name));
            }
        }
    }
}

/// The raw object always wins; `null` counts as absent.
fn resolve(field: &Field, raw: &Map<String, Value>, env: &Environment) -> Resolved {
    match raw.get(field.name) {
        Some(Value::Null) | None => match env.get(field.name) {
            Some(text) => parse_env(field.kind, text),
            None => Resolved::Absent,
        },
        Some(value) => check_value(field.kind, value),
    }
}

fn check_value(kind: FieldKind, value: &Value) -> Resolved {
    let checked = match kind {
        FieldKind::Port => value.as_u64().filter(|n| is_port(*n)).map(Value::from),
        FieldKind::Integer => value.as_u64().map(Value::from),
        FieldKind::String => value.as_str().map(Value::from),
        FieldKind::List => value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(Value::from))
                .collect::<Option<Vec<_>>>()
                .map(Value::Array)
        }),
    };
    checked.map_or(Resolved::Invalid, Resolved::Present)
}

fn parse_env(kind: FieldKind, text: &str) -> Resolved {
    let parsed = match kind {
        FieldKind::Port => text
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|n| is_port(*n))
            .map(Value::from),
        FieldKind::Integer => text.trim().parse::<u64>().ok().map(Value::from),
        FieldKind::String => Some(Value::from(text)),
        FieldKind::List => Some(Value::Array(
            text.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(Value::from)
                .collect(),
        )),
    };
    parsed.map_or(Resolved::Invalid, Resolved::Present)
}

fn is_port(n: u64) -> bool {
    n <= u64::from(u16::MAX)
}

fn dedupe(value: Resolved) -> Resolved {
    match value {
        Resolved::Present(Value::Array(items)) => {
            let mut unique: Vec<Value> = Vec::with_capacity(items.len());
            for item in items {
                if !unique.contains(&item) {
                    unique.push(item);
                }
            }
            Resolved::Present(Value::Array(unique))
        }
        other => other,
    }
}

fn string_items(value: &Resolved) -> Vec<String> {
    match value {
        Resolved::Present(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
