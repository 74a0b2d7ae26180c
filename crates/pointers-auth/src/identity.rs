//! Authenticated identity and post-handshake credentials.

use serde::{Deserialize, Serialize};

/// An authenticated identity, owned by the identity store.
///
/// `id` is the verified identifier (usually an email address) and doubles
/// as the session key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// The verified identifier.
    pub id: String,
}

impl Identity {
    /// Create an identity for a verified identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// What a host framework hands a strategy once the provider handshake is done.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    /// Provider access token.
    pub access_token: String,
    /// Provider refresh token, when one was issued.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// The provider's profile document, as received.
    #[serde(default)]
    pub profile: serde_json::Value,
}

impl Credentials {
    /// Credentials carrying only a profile document.
    pub fn with_profile(profile: serde_json::Value) -> Self {
        Self {
            profile,
            ..Default::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_new() {
        let identity = Identity::new("mbland@acm.org");
        assert_eq!(identity.id, "mbland@acm.org");
    }

    #[test]
    fn test_identity_serializes_as_id_record() {
        let value = serde_json::to_value(Identity::new("mbland@acm.org")).unwrap();
        assert_eq!(value, json!({"id": "mbland@acm.org"}));
    }

    #[test]
    fn test_credentials_defaults() {
        let creds: Credentials = serde_json::from_value(json!({"access_token": "t"})).unwrap();
        assert_eq!(creds.refresh_token, None);
        assert!(creds.profile.is_null());
    }

    #[test]
    fn test_credentials_with_profile() {
        let creds = Credentials::with_profile(json!({"emails": []}));
        assert!(creds.access_token.is_empty());
        assert_eq!(creds.profile["emails"], json!([]));
    }
}
