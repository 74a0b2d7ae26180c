//! Shared harness for url-pointers integration tests.

use std::sync::Arc;

use serde_json::{Value, json};

use url_pointers::auth::{Authenticator, IdentityStore, MemoryIdentityStore};
use url_pointers::config::{ConfigSchema, Environment, ServerConfig};

/// A server config object accepted by validation, before any overrides.
pub fn base_server_json() -> Value {
    json!({
        "PORT": 3000,
        "AUTH_PROVIDERS": ["google", "test"],
        "SESSION_SECRET": "session secret",
        "GOOGLE_CLIENT_ID": "client-id",
        "GOOGLE_CLIENT_SECRET": "client-secret",
        "GOOGLE_CALLBACK_URL": "https://pointers.example.com/auth/callback",
        "users": ["mbland@acm.org"],
        "domains": ["example.com"]
    })
}

/// Validate `raw` as a server config with an empty environment.
pub fn server_config(raw: &Value) -> ServerConfig {
    ServerConfig::from_value(raw, &Environment::new()).expect("config should validate")
}

/// A validated server config enabling `providers`, in order.
pub fn server_config_with(providers: &[&str]) -> ServerConfig {
    let mut raw = base_server_json();
    raw["AUTH_PROVIDERS"] = json!(providers);
    server_config(&raw)
}

/// Store plus the framework providers get assembled into.
pub struct TestHarness {
    /// Concrete store, for inspection.
    pub store: Arc<MemoryIdentityStore>,
    /// The host framework under test.
    pub framework: Authenticator,
}

impl TestHarness {
    /// An empty store and a framework with nothing registered.
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryIdentityStore::new()),
            framework: Authenticator::new(),
        }
    }

    /// The store as the trait object assembly takes.
    pub fn store(&self) -> Arc<dyn IdentityStore> {
        self.store.clone()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
