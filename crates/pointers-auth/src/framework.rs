//! The host-framework boundary.
//!
//! [`AuthFramework`] is the registration surface providers and the assembler
//! talk to. [`Authenticator`] is the in-process implementation: it keeps the
//! registered strategies and session hooks and drives them.

use std::sync::Arc;

use crate::error::AuthError;
use crate::identity::{Credentials, Identity};
use crate::session::{SessionDeserializer, SessionSerializer};
use crate::strategy::Strategy;

/// Where strategies and session hooks get registered.
pub trait AuthFramework {
    /// Register `strategy` under its name.
    fn use_strategy(&mut self, strategy: Arc<dyn Strategy>);

    /// Register the hook that turns an identity into a session key.
    fn serialize_user(&mut self, serializer: SessionSerializer);

    /// Register the hook that turns a session key back into an identity.
    fn deserialize_user(&mut self, deserializer: SessionDeserializer);
}

/// In-process [`AuthFramework`].
///
/// Registering a second strategy under an existing name replaces the
/// first, keeping its original position.
#[derive(Default)]
pub struct Authenticator {
    strategies: Vec<Arc<dyn Strategy>>,
    serializer: Option<SessionSerializer>,
    deserializer: Option<SessionDeserializer>,
}

impl Authenticator {
    /// An authenticator with nothing registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered strategy names, in registration order.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// The strategy registered under `name`.
    pub fn strategy(&self, name: &str) -> Option<&Arc<dyn Strategy>> {
        self.strategies.iter().find(|s| s.name() == name)
    }

    /// Whether both session hooks are registered.
    pub fn has_session_hooks(&self) -> bool {
        self.serializer.is_some() && self.deserializer.is_some()
    }

    /// Run the strategy registered under `name`.
    pub async fn authenticate(
        &self,
        name: &str,
        credentials: &Credentials,
    ) -> Result<Option<Identity>, AuthError> {
        let strategy = self
            .strategy(name)
            .ok_or_else(|| AuthError::UnknownStrategy(name.to_string()))?;

        let result = strategy.authenticate(credentials).await;
        match &result {
            Ok(Some(identity)) => log::info!("{name}: signed in {}", identity.id),
            Ok(None) => log::warn!("{name}: sign-in refused"),
            Err(e) => log::warn!("{name}: sign-in failed: {e}"),
        }
        result
    }

    /// Authenticate and, on success, produce the session key to store.
    ///
    /// Returns `Ok(None)` when the strategy refuses the user.
    pub async fn login(
        &self,
        name: &str,
        credentials: &Credentials,
    ) -> Result<Option<String>, AuthError> {
        let serializer = self.serializer.as_ref().ok_or(AuthError::HooksNotRegistered)?;
        let identity = self.authenticate(name, credentials).await?;
        Ok(identity.map(|identity| serializer.serialize(&identity)))
    }

    /// Restore the identity behind a stored session key.
    pub async fn restore(&self, key: &str) -> Result<Identity, AuthError> {
        let deserializer = self
            .deserializer
            .as_ref()
            .ok_or(AuthError::HooksNotRegistered)?;
        Ok(deserializer.deserialize(key).await?)
    }
}

impl AuthFramework for Authenticator {
    fn use_strategy(&mut self, strategy: Arc<dyn Strategy>) {
        log::info!("registering {} strategy", strategy.name());
        match self
            .strategies
            .iter_mut()
            .find(|s| s.name() == strategy.name())
        {
            Some(existing) => *existing = strategy,
            None => self.strategies.push(strategy),
        }
    }

    fn serialize_user(&mut self, serializer: SessionSerializer) {
        self.serializer = Some(serializer);
    }

    fn deserialize_user(&mut self, deserializer: SessionDeserializer) {
        self.deserializer = Some(deserializer);
    }
}
