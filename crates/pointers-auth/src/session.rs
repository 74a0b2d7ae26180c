//! Session identity codec.
//!
//! The session key written to session storage is the identity's `id`.
//! Restoring a session asks the identity store whether the user still
//! exists.

use std::sync::Arc;

use crate::identity::Identity;
use crate::store::{IdentityStore, StoreError};

/// Turns an authenticated identity into its session key.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionSerializer;

impl SessionSerializer {
    /// Session key for `identity`.
    pub fn serialize(&self, identity: &Identity) -> String {
        identity.id.clone()
    }
}

/// Turns a session key back into an identity.
#[derive(Clone)]
pub struct SessionDeserializer {
    store: Arc<dyn IdentityStore>,
}

impl SessionDeserializer {
    /// Restore the identity behind `key` if the store still knows it.
    pub async fn deserialize(&self, key: &str) -> Result<Identity, StoreError> {
        self.store.user_exists(key).await?;
        Ok(Identity::new(key))
    }
}

/// Serialize hook for `store`.
///
/// The session key is the identity's `id`, so the store is not consulted.
pub fn serialize_identity(_store: Arc<dyn IdentityStore>) -> SessionSerializer {
    SessionSerializer
}

/// Deserialize hook bound to `store`.
pub fn deserialize_identity(store: Arc<dyn IdentityStore>) -> SessionDeserializer {
    SessionDeserializer { store }
}
