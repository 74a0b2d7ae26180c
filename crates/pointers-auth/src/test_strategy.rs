//! The `test` provider: a stub strategy for test harnesses.
//!
//! Unless built with a stub, `authenticate()` refuses to run, so the stub
//! can never sign anyone in by accident outside a test.

use std::sync::Arc;

use pointers_config::{ServerConfig, TEST_PROVIDER};

use crate::error::AuthError;
use crate::framework::AuthFramework;
use crate::identity::{Credentials, Identity};
use crate::store::IdentityStore;
use crate::strategy::{AuthFuture, Strategy};

/// Stubbed authentication behavior.
pub type StubFn = Arc<dyn Fn(&Credentials) -> Result<Option<Identity>, AuthError> + Send + Sync>;

/// Strategy registered under the `test` provider name.
#[derive(Clone, Default)]
pub struct TestStrategy {
    stub: Option<StubFn>,
}

impl TestStrategy {
    /// An unstubbed strategy; `authenticate()` fails with [`AuthError::NotStubbed`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A strategy whose `authenticate()` runs `stub`.
    pub fn with_stub<F>(stub: F) -> Self
    where
        F: Fn(&Credentials) -> Result<Option<Identity>, AuthError> + Send + Sync + 'static,
    {
        Self {
            stub: Some(Arc::new(stub)),
        }
    }

    /// Whether a stub is installed.
    pub fn is_stubbed(&self) -> bool {
        self.stub.is_some()
    }
}

impl Strategy for TestStrategy {
    fn name(&self) -> &str {
        TEST_PROVIDER
    }

    fn authenticate<'a>(&'a self, credentials: &'a Credentials) -> AuthFuture<'a> {
        Box::pin(async move {
            match &self.stub {
                Some(stub) => stub(credentials),
                None => Err(AuthError::NotStubbed),
            }
        })
    }
}

/// Build the `test` strategy. The store and config are not consulted.
pub fn strategy(
    _store: Arc<dyn IdentityStore>,
    _config: &ServerConfig,
) -> Result<Arc<dyn Strategy>, AuthError> {
    Ok(Arc::new(TestStrategy::new()))
}

/// Build the `test` strategy and register it with `framework`.
pub fn assemble(
    framework: &mut dyn AuthFramework,
    store: Arc<dyn IdentityStore>,
    config: &ServerConfig,
) -> Result<Arc<dyn Strategy>, AuthError> {
    let strategy = strategy(store, config)?;
    framework.use_strategy(strategy.clone());
    Ok(strategy)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::framework::Authenticator;
    use crate::store::MemoryIdentityStore;
    use crate::testing::server_config;

    #[tokio::test]
    async fn test_authenticate_fails_if_not_stubbed() {
        let strategy = TestStrategy::new();
        let err = strategy
            .authenticate(&Credentials::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "TestStrategy.authenticate() must be stubbed");
        assert!(!strategy.is_stubbed());
    }

    #[tokio::test]
    async fn test_stubbed_authenticate() {
        let strategy = TestStrategy::with_stub(|_| Ok(Some(Identity::new("mbland@acm.org"))));
        let identity = strategy
            .authenticate(&Credentials::default())
            .await
            .unwrap();
        assert_eq!(identity, Some(Identity::new("mbland@acm.org")));
    }

    #[test]
    fn test_registers_the_strategy_with_the_framework() {
        let mut framework = Authenticator::new();
        let store = Arc::new(MemoryIdentityStore::new());
        let strategy = assemble(&mut framework, store, &server_config(&[])).unwrap();

        assert_eq!(strategy.name(), "test");
        assert_eq!(framework.strategy_names(), vec!["test"]);
        assert!(Arc::ptr_eq(framework.strategy("test").unwrap(), &strategy));
    }
}
