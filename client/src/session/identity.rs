use shared::types::{Role, decode_claims};

use super::credential::Credential;

/// Resolve the caller's role from the active credential.
///
/// No credential, an undecodable token, or a payload without a `role`
/// claim all resolve to `None` — an anonymous-equivalent caller, not an
/// error. The result is an unauthenticated hint (see
/// [`shared::types::TokenClaims`]); routing decisions made from it are
/// cosmetic and the backend re-checks everything.
pub fn role_of(credential: Option<&Credential>) -> Option<Role> {
    decode_claims(&credential?.token)?.role
}
