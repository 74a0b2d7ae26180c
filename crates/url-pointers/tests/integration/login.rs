//! End-to-end sign-in: authenticate, store the session key, restore it.

use std::sync::Arc;

use serde_json::json;

use url_pointers::auth::{
    AuthError, AuthFramework, Credentials, Identity, IdentityStore, TestStrategy, assemble,
};
use url_pointers::default_registry;

use crate::common::{TestHarness, server_config_with};

fn google_credentials(emails: &[&str]) -> Credentials {
    let emails: Vec<_> = emails
        .iter()
        .map(|value| json!({"value": value, "type": "account"}))
        .collect();
    Credentials {
        access_token: "access-token".into(),
        refresh_token: Some("refresh-token".into()),
        profile: json!({"id": "12345", "emails": emails}),
    }
}

fn assembled(providers: &[&str]) -> TestHarness {
    let mut harness = TestHarness::new();
    let config = server_config_with(providers);
    let store = harness.store();
    assemble(&mut harness.framework, store, &config, &default_registry()).unwrap();
    harness
}

#[tokio::test]
async fn test_google_login_and_restore() {
    let harness = assembled(&["google"]);

    let key = harness
        .framework
        .login("google", &google_credentials(&["mbland@foo.com", "mbland@acm.org"]))
        .await
        .unwrap()
        .expect("user should be admitted");

    assert_eq!(key, "mbland@acm.org");
    assert_eq!(harness.store.len().await, 1);

    let identity = harness.framework.restore(&key).await.unwrap();
    assert_eq!(identity, Identity::new("mbland@acm.org"));
}

#[tokio::test]
async fn test_google_login_by_domain() {
    let harness = assembled(&["google"]);

    let key = harness
        .framework
        .login("google", &google_credentials(&["anyone@example.com"]))
        .await
        .unwrap();

    assert_eq!(key.as_deref(), Some("anyone@example.com"));
}

#[tokio::test]
async fn test_google_login_refused() {
    let harness = assembled(&["google"]);

    let key = harness
        .framework
        .login("google", &google_credentials(&["intruder@evil.com"]))
        .await
        .unwrap();

    assert_eq!(key, None);
    assert!(harness.store.is_empty().await);
}

#[tokio::test]
async fn test_restore_unknown_session() {
    let harness = assembled(&[]);

    let err = harness.framework.restore("nobody@acm.org").await.unwrap_err();

    assert_eq!(err.to_string(), "user nobody@acm.org doesn't exist");
    assert!(matches!(err, AuthError::Store(_)));
}

#[tokio::test]
async fn test_unstubbed_test_provider() {
    let harness = assembled(&["test"]);

    let err = harness
        .framework
        .login("test", &Credentials::default())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "TestStrategy.authenticate() must be stubbed");
}

#[tokio::test]
async fn test_stubbed_test_provider() {
    let mut harness = assembled(&["test"]);
    harness
        .framework
        .use_strategy(Arc::new(TestStrategy::with_stub(|_| {
            Ok(Some(Identity::new("mbland@acm.org")))
        })));
    harness.store().find_or_create_user("mbland@acm.org").await.unwrap();

    let key = harness
        .framework
        .login("test", &Credentials::default())
        .await
        .unwrap();
    assert_eq!(key.as_deref(), Some("mbland@acm.org"));
    assert_eq!(harness.framework.strategy_names(), vec!["test"]);

    let identity = harness.framework.restore("mbland@acm.org").await.unwrap();
    assert_eq!(identity.id, "mbland@acm.org");
}

#[tokio::test]
async fn test_login_with_unregistered_strategy() {
    let harness = assembled(&["test"]);

    let err = harness
        .framework
        .login("google", &google_credentials(&["mbland@acm.org"]))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "unknown strategy 'google'");
}
