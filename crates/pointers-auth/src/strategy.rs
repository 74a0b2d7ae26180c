//! The strategy trait every auth provider implements.

use std::future::Future;
use std::pin::Pin;

use crate::error::AuthError;
use crate::identity::{Credentials, Identity};

/// Type alias for the future returned by [`Strategy::authenticate`].
pub type AuthFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Option<Identity>, AuthError>> + Send + 'a>>;

/// A named, immutable authentication strategy.
///
/// Implement this for each provider (Google, the `test` stub, ...). The host
/// framework calls `authenticate()` once the provider handshake has produced
/// [`Credentials`]:
///
/// - `Ok(Some(identity))`: the user is signed in
/// - `Ok(None)`: the user is refused; not an error
/// - `Err(_)`: something broke along the way
pub trait Strategy: Send + Sync + 'static {
    /// Provider name the strategy is registered under.
    fn name(&self) -> &str;

    /// Authenticate from post-handshake credentials.
    fn authenticate<'a>(&'a self, credentials: &'a Credentials) -> AuthFuture<'a>;
}

impl std::fmt::Debug for dyn Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name()).finish()
    }
}
