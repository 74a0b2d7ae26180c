//! The slice of a Google profile this provider reads.

use serde::{Deserialize, Serialize};

/// One address from the profile's `emails` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEmail {
    /// The email address.
    pub value: String,
    /// Google's label for the address (e.g. `account`), when present.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A Google profile as handed over after the OAuth handshake.
///
/// Unknown profile fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleProfile {
    /// Profile email addresses, in provider order.
    #[serde(default)]
    pub emails: Vec<ProfileEmail>,
}

impl GoogleProfile {
    /// A profile listing `emails` in order.
    pub fn with_emails<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            emails: emails
                .into_iter()
                .map(|value| ProfileEmail {
                    value: value.into(),
                    kind: None,
                })
                .collect(),
        }
    }

    /// Parse a raw profile document.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }

    /// Candidate identifiers for verification, in provider order.
    pub fn candidate_identifiers(&self) -> Vec<&str> {
        self.emails.iter().map(|e| e.value.as_str()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_emails_in_order() {
        let profile = GoogleProfile::from_value(&json!({
            "id": "12345",
            "displayName": "Mike Bland",
            "emails": [
                {"value": "mbland@example.com", "type": "home"},
                {"value": "mbland@acm.org", "type": "account"}
            ]
        }))
        .unwrap();

        assert_eq!(
            profile.candidate_identifiers(),
            vec!["mbland@example.com", "mbland@acm.org"]
        );
        assert_eq!(profile.emails[1].kind.as_deref(), Some("account"));
    }

    #[test]
    fn test_missing_emails_is_empty() {
        let profile = GoogleProfile::from_value(&json!({"id": "12345"})).unwrap();
        assert!(profile.candidate_identifiers().is_empty());
    }

    #[test]
    fn test_rejects_malformed_emails() {
        assert!(GoogleProfile::from_value(&json!({"emails": "mbland@acm.org"})).is_err());
        assert!(GoogleProfile::from_value(&json!({"emails": [{"type": "account"}]})).is_err());
        assert!(GoogleProfile::from_value(&json!(null)).is_err());
    }

    #[test]
    fn test_with_emails() {
        let profile = GoogleProfile::with_emails(["mbland@acm.org"]);
        assert_eq!(profile.emails[0].value, "mbland@acm.org");
        assert_eq!(profile.emails[0].kind, None);
    }
}
