use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Claims the client consumes from a bearer token's payload segment.
///
/// The backend signs its tokens, but this client never holds the key and
/// never verifies the signature — decoded claims are **unauthenticated
/// hints** used only to pick which screens to show. Authorization is
/// enforced by the backend on every request; a tampered `role` claim buys
/// an attacker nothing beyond rendering a screen whose data calls will
/// all come back 403.
///
/// Only the fields actually read by the client are modeled; everything
/// else in the payload is ignored at the decode boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Role name issued at login (`USER`, `ADMIN`, `SUPER_ADMIN`).
    #[serde(default)]
    pub role: Option<Role>,

    /// Standard subject claim — the account's email or channel id.
    #[serde(default)]
    pub sub: Option<String>,
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Account role as issued by the backend.
///
/// `Other` carries any role name the client does not know about so a new
/// backend role degrades to exact-match semantics instead of a decode
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
    Other(String),
}

impl Role {
    /// Wire name, e.g. `"SUPER_ADMIN"`.
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Other(name) => name,
        }
    }

    /// Role-hierarchy check: does `self` satisfy a route that requires
    /// `required`?
    ///
    /// `ADMIN` is satisfied by `ADMIN` or `SUPER_ADMIN`; `SUPER_ADMIN`
    /// only by itself; any other required role needs an exact match.
    pub fn satisfies(&self, required: &Role) -> bool {
        match required {
            Role::Admin => matches!(self, Role::Admin | Role::SuperAdmin),
            Role::SuperAdmin => matches!(self, Role::SuperAdmin),
            other => self == other,
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "USER" => Role::User,
            "ADMIN" => Role::Admin,
            "SUPER_ADMIN" => Role::SuperAdmin,
            _ => Role::Other(name),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Payload decode
// ---------------------------------------------------------------------------

/// Decode the payload segment of a compact token into [`TokenClaims`].
///
/// Fails soft: an empty token, fewer than two dot-separated segments, a
/// payload that is not base64url, bytes that are not UTF-8, or text that
/// is not a JSON object all yield `None` — never an error. The signature
/// segment is ignored entirely (see [`TokenClaims`]).
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;

    // Restore the standard alphabet, then pad to a multiple of 4 so the
    // strict decoder accepts unpadded base64url payloads.
    let standard = payload.replace('-', "+").replace('_', "/");
    let padded = match standard.len() % 4 {
        0 => standard,
        n => standard + &"=".repeat(4 - n),
    };

    let bytes = BASE64_STANDARD.decode(padded.as_bytes()).ok()?;
    let text = std::str::from_utf8(&bytes).ok()?;

    serde_json::from_str::<TokenClaims>(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_with_payload(json: &str) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(json))
    }

    #[test]
    fn decodes_role_and_sub() {
        let token = token_with_payload(r#"{"role":"ADMIN","sub":"alice@example.com"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role, Some(Role::Admin));
        assert_eq!(claims.sub.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn unknown_payload_fields_are_ignored() {
        let token = token_with_payload(r#"{"role":"USER","exp":1893456000,"iat":1700000000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role, Some(Role::User));
    }

    #[test]
    fn missing_role_claim_is_none_not_error() {
        let token = token_with_payload(r#"{"sub":"bob"}"#);
        let claims = decode_claims(&token).unwrap();
        assert!(claims.role.is_none());
    }

    #[test]
    fn unknown_role_name_round_trips_through_other() {
        let token = token_with_payload(r#"{"role":"COURIER"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role, Some(Role::Other("COURIER".to_string())));
    }

    #[test]
    fn empty_token_yields_no_claims() {
        assert!(decode_claims("").is_none());
    }

    #[test]
    fn single_segment_yields_no_claims() {
        assert!(decode_claims("not-a-token").is_none());
    }

    #[test]
    fn non_base64_payload_yields_no_claims() {
        assert!(decode_claims("header.!!!!.sig").is_none());
    }

    #[test]
    fn non_utf8_payload_yields_no_claims() {
        // 0xFF 0xFE is not valid UTF-8.
        let payload = URL_SAFE_NO_PAD.encode([0xFF_u8, 0xFE]);
        assert!(decode_claims(&format!("h.{}.s", payload)).is_none());
    }

    #[test]
    fn non_json_payload_yields_no_claims() {
        let token = token_with_payload("just some text");
        assert!(decode_claims(&token).is_none());
    }

    #[test]
    fn unpadded_base64url_payload_decodes() {
        // URL_SAFE_NO_PAD already emits no padding; the decoder must
        // restore it.
        let token = token_with_payload(r#"{"role":"SUPER_ADMIN"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role, Some(Role::SuperAdmin));
    }

    #[test]
    fn role_hierarchy() {
        assert!(Role::SuperAdmin.satisfies(&Role::Admin));
        assert!(Role::Admin.satisfies(&Role::Admin));
        assert!(!Role::User.satisfies(&Role::Admin));
        assert!(!Role::Admin.satisfies(&Role::SuperAdmin));
        assert!(Role::SuperAdmin.satisfies(&Role::SuperAdmin));
        let courier = Role::Other("COURIER".to_string());
        assert!(courier.satisfies(&courier));
        assert!(!Role::SuperAdmin.satisfies(&courier));
    }
}
