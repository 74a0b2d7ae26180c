//! url-pointers umbrella crate.
//!
//! Re-exports the configuration and auth crates, and wires the providers
//! this distribution ships with into a default [`ProviderRegistry`].

pub mod commands;

pub use pointers_auth as auth;
pub use pointers_auth_google as google;
pub use pointers_config as config;

use pointers_auth::ProviderRegistry;
use pointers_config::{GOOGLE_PROVIDER, TEST_PROVIDER};

/// Registry holding every provider the server schema accepts.
pub fn default_registry() -> ProviderRegistry {
    ProviderRegistry::new()
        .register(GOOGLE_PROVIDER, pointers_auth_google::strategy)
        .register(TEST_PROVIDER, pointers_auth::test_strategy::strategy)
}

/// Install the `tracing` subscriber for binaries.
///
/// Honors `RUST_LOG`, falling back to `default_filter`. Records emitted
/// through the `log` facade by the library crates are bridged in. Output
/// goes to stderr; stdout is reserved for command output.
pub fn init_logging(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    // A subscriber may already be installed, e.g. by a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
