//! Declarative schema definitions consumed by the validation engine.
//!
//! A [`Schema`] lists the recognized fields in declaration order. The order
//! matters twice: it fixes the order of `missing ...` messages, and it fixes
//! the key order of the validated output.

/// Shape of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer in `0..=65535`.
    Port,
    /// Non-negative integer.
    Integer,
    /// Any string.
    String,
    /// Ordered list of strings; comma-separated when read from the environment.
    List,
}

impl FieldKind {
    /// Description used in `invalid <FIELD>: expected ...` messages.
    pub fn expected(self) -> &'static str {
        match self {
            FieldKind::Port => "a port number",
            FieldKind::Integer => "a non-negative integer",
            FieldKind::String => "a string",
            FieldKind::List => "a list of strings",
        }
    }
}

/// Whether a field must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Absent after the environment overlay is a violation.
    Required,
    /// May be absent; absent fields are left out of the output.
    Optional,
    /// May be absent; absent fields take this integer default.
    Default(u64),
}

/// One recognized configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Key as written in JSON and, prefixed, in the environment.
    pub name: &'static str,
    /// Value shape.
    pub kind: FieldKind,
    /// Whether and how the field may be omitted.
    pub requirement: Requirement,
}

impl Field {
    /// A required field.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            requirement: Requirement::Required,
        }
    }

    /// An optional field without a default.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            requirement: Requirement::Optional,
        }
    }

    /// An optional integer field with a default.
    pub const fn with_default(name: &'static str, kind: FieldKind, default: u64) -> Self {
        Self {
            name,
            kind,
            requirement: Requirement::Default(default),
        }
    }
}

/// A known auth provider and the fields it needs once selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderFields {
    /// Provider name as written in the selection list.
    pub name: &'static str,
    /// Fields required when the provider is selected.
    pub fields: &'static [Field],
}

/// Field that selects providers, plus the providers it may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderSelection {
    /// Name of the list field holding the selection.
    pub field: &'static str,
    /// Every provider the selection may name, in declaration order.
    pub providers: &'static [ProviderFields],
}

impl ProviderSelection {
    /// Look up a known provider by name.
    pub fn provider(&self, name: &str) -> Option<&ProviderFields> {
        self.providers.iter().find(|p| p.name == name)
    }
}

/// A complete configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Short name used in logs.
    pub name: &'static str,
    /// Core fields, in declaration order.
    pub fields: &'static [Field],
    /// Provider-driven fields, when providers are configuration-selected.
    pub providers: Option<ProviderSelection>,
    /// Whether at least one of `users` / `domains` must be non-empty.
    pub requires_allow_list: bool,
}

impl Schema {
    /// Find a recognized field, core or provider-specific.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.all_fields().find(|f| f.name == name)
    }

    /// Whether `name` is a recognized key.
    pub fn recognizes(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Core fields followed by every provider's fields, in declaration order.
    pub fn all_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        let provider_fields = self
            .providers
            .iter()
            .flat_map(|selection| selection.providers.iter())
            .flat_map(|provider| provider.fields.iter());
        self.fields.iter().chain(provider_fields)
    }

    /// Names of the providers this schema knows about.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers
            .map(|selection| selection.providers.iter().map(|p| p.name).collect())
            .unwrap_or_default()
    }
}
