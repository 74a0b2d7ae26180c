//! Pluggable authentication for url-pointers.
//!
//! Provides:
//! - [`Identity`] / [`Credentials`]: who signed in, and what the provider handed over
//! - [`IdentityStore`]: async boundary to the durable user records
//! - [`verify`]: allow-list check plus find-or-create through the store
//! - [`serialize_identity`] / [`deserialize_identity`]: session key codec
//! - [`Strategy`] / [`AuthFramework`]: provider and host-framework seams
//! - [`ProviderRegistry`] / [`assemble`]: startup wiring from `AUTH_PROVIDERS`
//! - [`TestStrategy`]: the stub `test` provider
//! - [`AuthError`]: auth-specific error types

mod assemble;
mod error;
mod framework;
mod identity;
mod registry;
mod session;
mod store;
mod strategy;
pub mod test_strategy;
mod verify;

#[cfg(test)]
mod testing;

pub use assemble::assemble;
pub use error::AuthError;
pub use framework::{AuthFramework, Authenticator};
pub use identity::{Credentials, Identity};
pub use registry::{ProviderLoader, ProviderRegistry};
pub use session::{
    SessionDeserializer, SessionSerializer, deserialize_identity, serialize_identity,
};
pub use store::{IdentityStore, MemoryIdentityStore, StoreError};
pub use strategy::{AuthFuture, Strategy};
pub use test_strategy::{StubFn, TestStrategy};
pub use verify::{domain_of, find_verified_identifier, verify};
