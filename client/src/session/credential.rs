use serde::{Deserialize, Serialize};

/// The client-held proof of an authenticated session.
///
/// Exactly one credential is active per session context, or none
/// (anonymous). The token is the only mandatory part; the derived
/// identifiers are convenience copies extracted at save time so screens
/// can show "logged in as …" without re-decoding the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub token: String,
    /// Subject claim — email for email-born accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    /// Numeric-looking subject ids are Telegram channel ids and are kept
    /// separately from emails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Optional @-handle for Telegram-born accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_handle: Option<String>,
}

impl Credential {
    /// Build a credential from a bare token, deriving the identifier
    /// fields from the token's subject claim when it decodes.
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let sub = shared::types::decode_claims(&token).and_then(|c| c.sub);
        let (subject_id, channel_id) = match sub {
            Some(s) if s.chars().all(|c| c.is_ascii_digit()) && !s.is_empty() => {
                (None, Some(s))
            }
            Some(s) => (Some(s), None),
            None => (None, None),
        };
        Credential {
            token,
            subject_id,
            channel_id,
            channel_handle: None,
        }
    }

    /// Structural plausibility check used when adopting a persisted
    /// credential: an empty token is never adopted.
    pub fn is_plausible(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_with_sub(sub: &str) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"{}"}}"#, sub));
        format!("h.{}.s", payload)
    }

    #[test]
    fn email_subject_lands_in_subject_id() {
        let c = Credential::from_token(token_with_sub("alice@example.com"));
        assert_eq!(c.subject_id.as_deref(), Some("alice@example.com"));
        assert!(c.channel_id.is_none());
    }

    #[test]
    fn numeric_subject_is_a_channel_id() {
        let c = Credential::from_token(token_with_sub("7700123456"));
        assert_eq!(c.channel_id.as_deref(), Some("7700123456"));
        assert!(c.subject_id.is_none());
    }

    #[test]
    fn undecodable_token_still_yields_a_credential() {
        let c = Credential::from_token("opaque-token");
        assert_eq!(c.token, "opaque-token");
        assert!(c.subject_id.is_none() && c.channel_id.is_none());
        assert!(c.is_plausible());
    }

    #[test]
    fn blank_token_is_not_plausible() {
        assert!(!Credential::from_token("   ").is_plausible());
    }
}
