//! Provider assembly against the default registry.

use url_pointers::auth::{AuthError, assemble};
use url_pointers::default_registry;

use crate::common::{TestHarness, server_config_with};

#[test]
fn test_registers_zero_providers() {
    let mut harness = TestHarness::new();
    let config = server_config_with(&[]);

    let store = harness.store();
    assemble(&mut harness.framework, store, &config, &default_registry()).unwrap();

    assert!(harness.framework.strategy_names().is_empty());
    assert!(harness.framework.has_session_hooks());
}

#[test]
fn test_registers_the_test_provider() {
    let mut harness = TestHarness::new();
    let config = server_config_with(&["test"]);

    let store = harness.store();
    assemble(&mut harness.framework, store, &config, &default_registry()).unwrap();

    assert_eq!(harness.framework.strategy_names(), vec!["test"]);
}

#[test]
fn test_registers_providers_in_declared_order() {
    let mut harness = TestHarness::new();
    let config = server_config_with(&["google", "test"]);

    let store = harness.store();
    assemble(&mut harness.framework, store, &config, &default_registry()).unwrap();

    assert_eq!(harness.framework.strategy_names(), vec!["google", "test"]);

    let mut harness = TestHarness::new();
    let config = server_config_with(&["test", "google"]);
    let store = harness.store();
    assemble(&mut harness.framework, store, &config, &default_registry()).unwrap();
    assert_eq!(harness.framework.strategy_names(), vec!["test", "google"]);
}

#[test]
fn test_fails_on_unknown_provider_without_registering_any() {
    let mut harness = TestHarness::new();
    // Validation rejects unknown names, so inject one after the fact.
    let mut config = server_config_with(&["test"]);
    config.auth_providers.push("bogus".into());

    let store = harness.store();
    let err = assemble(&mut harness.framework, store, &config, &default_registry())
        .unwrap_err();

    assert!(
        err.to_string().starts_with("Failed to load bogus provider: "),
        "{err}"
    );
    assert!(matches!(err, AuthError::ProviderLoad { ref provider, .. } if provider == "bogus"));
    assert!(harness.framework.strategy_names().is_empty());
    assert!(harness.framework.has_session_hooks());
}

#[test]
fn test_google_needs_its_credentials() {
    let mut harness = TestHarness::new();
    let mut config = server_config_with(&["google"]);
    config.google_callback_url = None;

    let store = harness.store();
    let err = assemble(&mut harness.framework, store, &config, &default_registry())
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to load google provider: missing GOOGLE_CALLBACK_URL"
    );
    assert!(harness.framework.strategy_names().is_empty());
}
