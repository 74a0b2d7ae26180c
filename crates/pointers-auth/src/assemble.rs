//! Startup assembly: wire session hooks and configured providers into a
//! host framework.

use std::sync::Arc;

use pointers_config::ServerConfig;

use crate::error::AuthError;
use crate::framework::AuthFramework;
use crate::registry::ProviderRegistry;
use crate::session::{deserialize_identity, serialize_identity};
use crate::store::IdentityStore;
use crate::strategy::Strategy;

/// Register the session hooks, then every provider in `AUTH_PROVIDERS`.
///
/// The hooks are registered even when no provider is configured. Providers
/// are all resolved before any is registered, so a failure leaves the
/// framework with the hooks and no strategies.
pub fn assemble(
    framework: &mut dyn AuthFramework,
    store: Arc<dyn IdentityStore>,
    config: &ServerConfig,
    registry: &ProviderRegistry,
) -> Result<(), AuthError> {
    framework.serialize_user(serialize_identity(store.clone()));
    framework.deserialize_user(deserialize_identity(store.clone()));

    let strategies = config
        .auth_providers
        .iter()
        .map(|name| registry.load(name, store.clone(), config))
        .collect::<Result<Vec<Arc<dyn Strategy>>, AuthError>>()?;

    for strategy in strategies {
        framework.use_strategy(strategy);
    }
    log::info!(
        "assembled {} auth provider(s): {}",
        config.auth_providers.len(),
        config.auth_providers.join(", ")
    );
    Ok(())
}
