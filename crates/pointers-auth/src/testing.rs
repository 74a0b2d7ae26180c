//! Shared fixtures for unit tests.

use pointers_config::ServerConfig;

/// A valid server config enabling `providers`, without Google credentials.
pub(crate) fn server_config(providers: &[&str]) -> ServerConfig {
    ServerConfig {
        port: 3000,
        auth_providers: providers.iter().map(|p| p.to_string()).collect(),
        session_secret: "secret".into(),
        session_max_age: 3600,
        redis_port: 6379,
        users: Some(vec!["mbland@acm.org".into()]),
        domains: None,
        google_client_id: None,
        google_client_secret: None,
        google_callback_url: None,
    }
}
