//! Server-mode configuration: providers are selected by `AUTH_PROVIDERS`.

use serde::{Deserialize, Serialize};

use crate::config::{AllowList, ConfigSchema};
use crate::schema::{Field, FieldKind, ProviderFields, ProviderSelection, Schema};
use crate::validate::{DOMAINS_FIELD, USERS_FIELD};

/// Field names recognized by [`ServerConfig`].
pub mod fields {
    /// Listening port.
    pub const PORT: &str = "PORT";
    /// Ordered list of enabled auth providers.
    pub const AUTH_PROVIDERS: &str = "AUTH_PROVIDERS";
    /// Secret used to sign session cookies.
    pub const SESSION_SECRET: &str = "SESSION_SECRET";
    /// Session lifetime in seconds.
    pub const SESSION_MAX_AGE: &str = "SESSION_MAX_AGE";
    /// Port of the backing Redis store.
    pub const REDIS_PORT: &str = "REDIS_PORT";
    /// Google OAuth client ID.
    pub const GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
    /// Google OAuth client secret.
    pub const GOOGLE_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";
    /// Google OAuth callback URL.
    pub const GOOGLE_CALLBACK_URL: &str = "GOOGLE_CALLBACK_URL";
}

/// Default session lifetime, in seconds.
pub const DEFAULT_SESSION_MAX_AGE: u64 = 3600;

/// Default Redis port.
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Name of the Google OAuth provider.
pub const GOOGLE_PROVIDER: &str = "google";

/// Name of the stub provider used by test harnesses.
pub const TEST_PROVIDER: &str = "test";

const GOOGLE_FIELDS: &[Field] = &[
    Field::required(fields::GOOGLE_CLIENT_ID, FieldKind::String),
    Field::required(fields::GOOGLE_CLIENT_SECRET, FieldKind::String),
    Field::required(fields::GOOGLE_CALLBACK_URL, FieldKind::String),
];

/// Schema for [`ServerConfig`].
pub const SERVER_SCHEMA: Schema = Schema {
    name: "server",
    fields: &[
        Field::required(fields::PORT, FieldKind::Port),
        Field::required(fields::AUTH_PROVIDERS, FieldKind::List),
        Field::required(fields::SESSION_SECRET, FieldKind::String),
        Field::with_default(
            fields::SESSION_MAX_AGE,
            FieldKind::Integer,
            DEFAULT_SESSION_MAX_AGE,
        ),
        Field::with_default(
            fields::REDIS_PORT,
            FieldKind::Port,
            DEFAULT_REDIS_PORT as u64,
        ),
        Field::optional(USERS_FIELD, FieldKind::List),
        Field::optional(DOMAINS_FIELD, FieldKind::List),
    ],
    providers: Some(ProviderSelection {
        field: fields::AUTH_PROVIDERS,
        providers: &[
            ProviderFields {
                name: GOOGLE_PROVIDER,
                fields: GOOGLE_FIELDS,
            },
            ProviderFields {
                name: TEST_PROVIDER,
                fields: &[],
            },
        ],
    }),
    requires_allow_list: true,
};

/// Validated server-mode configuration.
///
/// Google credentials are present whenever `google` is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Listening port.
    #[serde(rename = "PORT")]
    pub port: u16,
    /// Enabled auth providers, deduplicated, in declaration order.
    #[serde(rename = "AUTH_PROVIDERS")]
    pub auth_providers: Vec<String>,
    /// Session signing secret.
    #[serde(rename = "SESSION_SECRET")]
    pub session_secret: String,
    /// Session lifetime in seconds.
    #[serde(rename = "SESSION_MAX_AGE")]
    pub session_max_age: u64,
    /// Redis port.
    #[serde(rename = "REDIS_PORT")]
    pub redis_port: u16,
    /// Permitted user identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
    /// Permitted email domains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    /// Google OAuth client ID.
    #[serde(rename = "GOOGLE_CLIENT_ID", default, skip_serializing_if = "Option::is_none")]
    pub google_client_id: Option<String>,
    /// Google OAuth client secret.
    #[serde(
        rename = "GOOGLE_CLIENT_SECRET",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub google_client_secret: Option<String>,
    /// Google OAuth callback URL.
    #[serde(
        rename = "GOOGLE_CALLBACK_URL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub google_callback_url: Option<String>,
}

impl ServerConfig {
    /// Whether `name` is among the enabled providers.
    pub fn uses_provider(&self, name: &str) -> bool {
        self.auth_providers.iter().any(|p| p == name)
    }
}

impl ConfigSchema for ServerConfig {
    const SCHEMA: &'static Schema = &SERVER_SCHEMA;

    fn allow_list(&self) -> AllowList {
        AllowList::new(self.users.as_deref(), self.domains.as_deref())
    }
}
