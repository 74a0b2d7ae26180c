//! Google OAuth provider for url-pointers.
//!
//! Implements [`pointers_auth::Strategy`] for Google:
//! - Client credentials taken from the validated server or standalone config
//! - Profile `emails[].value` as candidate identifiers, in provider order
//! - Allow-list verification and find-or-create through the identity store
//!
//! The OAuth handshake itself belongs to the host framework; this crate
//! starts from the credentials and profile it hands over.

mod profile;

use std::sync::Arc;

use pointers_auth::{
    AuthError, AuthFramework, AuthFuture, Credentials, Identity, IdentityStore, StoreError,
    Strategy,
};
use pointers_config::server::fields;
use pointers_config::{AllowList, ConfigSchema, GOOGLE_PROVIDER, ServerConfig, StandaloneConfig};

pub use profile::{GoogleProfile, ProfileEmail};

/// Verify hook: allow-list check plus find-or-create.
#[derive(Clone)]
pub struct GoogleVerifier {
    store: Arc<dyn IdentityStore>,
    allow_list: AllowList,
}

impl GoogleVerifier {
    /// A verifier backed by `store` admitting `allow_list`.
    pub fn new(store: Arc<dyn IdentityStore>, allow_list: AllowList) -> Self {
        Self { store, allow_list }
    }

    /// The allow-list this verifier admits.
    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// Verify a signed-in Google user.
    ///
    /// The tokens are not inspected. `Ok(None)` means no profile address is
    /// on the allow-list.
    pub async fn verify(
        &self,
        _access_token: &str,
        _refresh_token: Option<&str>,
        profile: &GoogleProfile,
    ) -> Result<Option<Identity>, StoreError> {
        pointers_auth::verify(
            self.store.as_ref(),
            &self.allow_list,
            &profile.candidate_identifiers(),
        )
        .await
    }
}

/// Strategy registered under the `google` provider name.
#[derive(Clone)]
pub struct GoogleStrategy {
    client_id: String,
    client_secret: String,
    callback_url: String,
    verifier: GoogleVerifier,
}

impl GoogleStrategy {
    /// OAuth client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// OAuth callback URL.
    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// The verify hook.
    pub fn verifier(&self) -> &GoogleVerifier {
        &self.verifier
    }

    fn configured(
        client_id: &str,
        client_secret: &str,
        callback_url: &str,
        verifier: GoogleVerifier,
    ) -> Self {
        log::debug!("google provider configured with callback {callback_url}");
        Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            callback_url: callback_url.to_string(),
            verifier,
        }
    }
}

impl std::fmt::Debug for GoogleStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleStrategy")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("callback_url", &self.callback_url)
            .finish()
    }
}

impl Strategy for GoogleStrategy {
    fn name(&self) -> &str {
        GOOGLE_PROVIDER
    }

    fn authenticate<'a>(&'a self, credentials: &'a Credentials) -> AuthFuture<'a> {
        Box::pin(async move {
            let profile = GoogleProfile::from_value(&credentials.profile).map_err(|e| {
                AuthError::InvalidProfile {
                    provider: GOOGLE_PROVIDER.to_string(),
                    reason: e.to_string(),
                }
            })?;

            let identity = self
                .verifier
                .verify(
                    &credentials.access_token,
                    credentials.refresh_token.as_deref(),
                    &profile,
                )
                .await?;
            Ok(identity)
        })
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, AuthError> {
    value
        .as_deref()
        .ok_or_else(|| AuthError::provider_load(GOOGLE_PROVIDER, format!("missing {field}")))
}

/// Build the Google strategy from the validated server config.
///
/// Fails with `Failed to load google provider: missing <FIELD>` if a client
/// credential is absent.
pub fn strategy(
    store: Arc<dyn IdentityStore>,
    config: &ServerConfig,
) -> Result<Arc<dyn Strategy>, AuthError> {
    Ok(Arc::new(google_strategy(store, config)?))
}

/// Like [`strategy`], keeping the concrete type.
pub fn google_strategy(
    store: Arc<dyn IdentityStore>,
    config: &ServerConfig,
) -> Result<GoogleStrategy, AuthError> {
    let client_id = required(&config.google_client_id, fields::GOOGLE_CLIENT_ID)?;
    let client_secret = required(&config.google_client_secret, fields::GOOGLE_CLIENT_SECRET)?;
    let callback_url = required(&config.google_callback_url, fields::GOOGLE_CALLBACK_URL)?;

    Ok(GoogleStrategy::configured(
        client_id,
        client_secret,
        callback_url,
        GoogleVerifier::new(store, config.allow_list()),
    ))
}

/// Build the Google strategy from a validated standalone config.
///
/// Standalone deployments always sign in through Google; `redirectUrl` is
/// the OAuth callback.
pub fn google_strategy_standalone(
    store: Arc<dyn IdentityStore>,
    config: &StandaloneConfig,
) -> GoogleStrategy {
    GoogleStrategy::configured(
        &config.google_client_id,
        &config.google_client_secret,
        &config.redirect_url,
        GoogleVerifier::new(store, config.allow_list()),
    )
}

/// Build the Google strategy and register it with `framework`.
pub fn assemble(
    framework: &mut dyn AuthFramework,
    store: Arc<dyn IdentityStore>,
    config: &ServerConfig,
) -> Result<Arc<dyn Strategy>, AuthError> {
    let strategy = strategy(store, config)?;
    framework.use_strategy(strategy.clone());
    Ok(strategy)
}

// ============================================================================
// Tests
// ============================================================================
