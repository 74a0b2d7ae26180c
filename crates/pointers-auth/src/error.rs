//! Auth-specific error types.

use crate::store::StoreError;

/// Errors that can occur while assembling or running authentication.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A configured provider could not be resolved or set up.
    #[error("Failed to load {provider} provider: {reason}")]
    ProviderLoad { provider: String, reason: String },

    /// The stub `test` strategy ran without a stub installed.
    #[error("TestStrategy.authenticate() must be stubbed")]
    NotStubbed,

    /// A provider handed over a profile this crate cannot read.
    #[error("invalid {provider} profile: {reason}")]
    InvalidProfile { provider: String, reason: String },

    /// No strategy is registered under the requested name.
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    /// The session serialize/deserialize hooks were never registered.
    #[error("session hooks are not registered")]
    HooksNotRegistered,

    /// The identity store failed; its error is passed through untouched.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Build a [`AuthError::ProviderLoad`].
    pub fn provider_load(provider: impl Into<String>, reason: impl ToString) -> Self {
        AuthError::ProviderLoad {
            provider: provider.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error should abort startup (vs. fail one request).
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            AuthError::ProviderLoad { .. } | AuthError::HooksNotRegistered
        )
    }
}
