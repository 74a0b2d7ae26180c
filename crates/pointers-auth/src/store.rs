//! Identity store boundary.
//!
//! The store owns durable user records. This crate only asks it two things:
//! find-or-create a user, and confirm a user still exists. Whatever the store
//! fails with crosses back unchanged.

use std::collections::BTreeSet;
use std::fmt;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::identity::Identity;

/// An error raised by an identity store, carried verbatim.
///
/// Wraps any error value, including bare strings; `Display` shows the
/// original message with nothing added.
#[derive(Debug)]
pub struct StoreError(Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    /// Wrap a store failure.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(error.into())
    }

    /// Borrow the wrapped error, e.g. to downcast it.
    pub fn get_ref(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

/// Async access to the durable user records.
///
/// Both operations must be idempotent. Concurrent calls for the same
/// identifier are the store's to serialize.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Return the identity for `id`, creating its record if needed.
    async fn find_or_create_user(&self, id: &str) -> Result<Identity, StoreError>;

    /// Succeed if a record for `id` exists.
    async fn user_exists(&self, id: &str) -> Result<(), StoreError>;
}

/// In-memory identity store.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    users: RwLock<BTreeSet<String>>,
}

impl MemoryIdentityStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `users`.
    pub fn with_users<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            users: RwLock::new(users.into_iter().map(Into::into).collect()),
        }
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether no user is stored.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn find_or_create_user(&self, id: &str) -> Result<Identity, StoreError> {
        let mut users = self.users.write().await;
        if users.insert(id.to_string()) {
            log::debug!("created user {id}");
        }
        Ok(Identity::new(id))
    }

    async fn user_exists(&self, id: &str) -> Result<(), StoreError> {
        if self.users.read().await.contains(id) {
            Ok(())
        } else {
            Err(StoreError::new(format!("user {id} doesn't exist")))
        }
    }
}
