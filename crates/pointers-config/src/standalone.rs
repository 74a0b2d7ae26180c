//! Standalone configuration: a single-process deployment with Google
//! sign-in wired in unconditionally.

use serde::{Deserialize, Serialize};

use crate::config::{AllowList, ConfigSchema};
use crate::schema::{Field, FieldKind, Schema};
use crate::validate::{DOMAINS_FIELD, USERS_FIELD};

/// Field names recognized by [`StandaloneConfig`].
pub mod fields {
    /// Listening port.
    pub const PORT: &str = "PORT";
    /// Where Google sends the user after sign-in.
    pub const REDIRECT_URL: &str = "redirectUrl";
    /// Google OAuth client ID.
    pub const GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
    /// Google OAuth client secret.
    pub const GOOGLE_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";
    /// Secret used to sign session cookies.
    pub const SESSION_SECRET: &str = "SESSION_SECRET";
}

/// Schema for [`StandaloneConfig`].
pub const STANDALONE_SCHEMA: Schema = Schema {
    name: "standalone",
    fields: &[
        Field::required(fields::PORT, FieldKind::Port),
        Field::required(fields::REDIRECT_URL, FieldKind::String),
        Field::required(fields::GOOGLE_CLIENT_ID, FieldKind::String),
        Field::required(fields::GOOGLE_CLIENT_SECRET, FieldKind::String),
        Field::required(fields::SESSION_SECRET, FieldKind::String),
        Field::optional(USERS_FIELD, FieldKind::List),
        Field::optional(DOMAINS_FIELD, FieldKind::List),
    ],
    providers: None,
    requires_allow_list: true,
};

/// Validated standalone configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StandaloneConfig {
    /// Listening port.
    #[serde(rename = "PORT")]
    pub port: u16,
    /// OAuth redirect URL.
    #[serde(rename = "redirectUrl")]
    pub redirect_url: String,
    /// Google OAuth client ID.
    #[serde(rename = "GOOGLE_CLIENT_ID")]
    pub google_client_id: String,
    /// Google OAuth client secret.
    #[serde(rename = "GOOGLE_CLIENT_SECRET")]
    pub google_client_secret: String,
    /// Session signing secret.
    #[serde(rename = "SESSION_SECRET")]
    pub session_secret: String,
    /// Permitted user identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
    /// Permitted email domains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
}

impl ConfigSchema for StandaloneConfig {
    const SCHEMA: &'static Schema = &STANDALONE_SCHEMA;

    fn allow_list(&self) -> AllowList {
        AllowList::new(self.users.as_deref(), self.domains.as_deref())
    }
}
