//! Provider registry.
//!
//! Maps provider names (the values of `AUTH_PROVIDERS`) to loaders that
//! build the matching [`Strategy`]. The registry is populated explicitly;
//! nothing is discovered at runtime.

use std::collections::BTreeMap;
use std::sync::Arc;

use pointers_config::ServerConfig;

use crate::error::AuthError;
use crate::store::IdentityStore;
use crate::strategy::Strategy;

/// Builds a provider's strategy from the store and validated config.
pub type ProviderLoader = Box<
    dyn Fn(Arc<dyn IdentityStore>, &ServerConfig) -> Result<Arc<dyn Strategy>, AuthError>
        + Send
        + Sync,
>;

/// Name → loader map.
///
/// # Example
///
/// ```rust,ignore
/// let registry = ProviderRegistry::new()
///     .register("test", pointers_auth::test_strategy::strategy)
///     .register("google", pointers_auth_google::strategy);
///
/// assert_eq!(registry.names(), vec!["google", "test"]);
/// ```
#[derive(Default)]
pub struct ProviderRegistry {
    loaders: BTreeMap<String, ProviderLoader>,
}

impl ProviderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a loader, builder style. Replaces any loader under the same name.
    pub fn register<F>(mut self, name: impl Into<String>, loader: F) -> Self
    where
        F: Fn(Arc<dyn IdentityStore>, &ServerConfig) -> Result<Arc<dyn Strategy>, AuthError>
            + Send
            + Sync
            + 'static,
    {
        self.insert(name, loader);
        self
    }

    /// Add a loader in place. Replaces any loader under the same name.
    pub fn insert<F>(&mut self, name: impl Into<String>, loader: F)
    where
        F: Fn(Arc<dyn IdentityStore>, &ServerConfig) -> Result<Arc<dyn Strategy>, AuthError>
            + Send
            + Sync
            + 'static,
    {
        self.loaders.insert(name.into(), Box::new(loader));
    }

    /// Registered provider names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.loaders.keys().map(String::as_str).collect()
    }

    /// Whether a loader is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.loaders.contains_key(name)
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// Whether no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Resolve `name` and build its strategy.
    ///
    /// Fails with [`AuthError::ProviderLoad`] if `name` is unregistered or its
    /// loader fails with anything but a `ProviderLoad` of its own.
    pub fn load(
        &self,
        name: &str,
        store: Arc<dyn IdentityStore>,
        config: &ServerConfig,
    ) -> Result<Arc<dyn Strategy>, AuthError> {
        let loader = self.loaders.get(name).ok_or_else(|| {
            AuthError::provider_load(name, format!("no provider registered under '{name}'"))
        })?;

        loader(store, config).map_err(|e| match e {
            e @ AuthError::ProviderLoad { .. } => e,
            other => AuthError::provider_load(name, other),
        })
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
