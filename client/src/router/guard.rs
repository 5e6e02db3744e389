use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

use crate::session::{Credential, role_of};

use super::table::{Route, RouteRequirement, names};

// ---------------------------------------------------------------------------
// Access evaluation
// ---------------------------------------------------------------------------

/// Terminal decision for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// Send the caller to the named route instead.
    Redirect(&'static str),
}

/// Evaluate a route's requirement against the current credential.
///
/// First match wins:
///   1. auth required, nobody logged in      → redirect to login
///   2. guest-only, somebody logged in       → redirect home
///   3. role required, hierarchy unsatisfied → redirect home
///   4. otherwise                            → allow
///
/// This is advisory only — it keeps unauthorized screens from rendering.
/// The backend enforces authorization on every request regardless, because
/// the role used here comes from unverified token claims.
pub fn evaluate(requirement: &RouteRequirement, credential: Option<&Credential>) -> Access {
    if requirement.requires_auth && credential.is_none() {
        return Access::Redirect(names::LOGIN);
    }

    if requirement.guest_only && credential.is_some() {
        return Access::Redirect(names::HOME);
    }

    if let Some(required) = &requirement.required_role {
        return match role_of(credential) {
            Some(role) if role.satisfies(required) => Access::Allow,
            _ => Access::Redirect(names::HOME),
        };
    }

    Access::Allow
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Tracks the current route and applies access decisions.
///
/// Cloneable handle, same sharing model as
/// [`SessionStore`](crate::session::SessionStore): the API client holds a
/// clone so the 401/403 policy can drop the user at login from anywhere.
#[derive(Clone, Debug)]
pub struct Navigator(Arc<RwLock<String>>);

impl Navigator {
    pub fn new(initial: &str) -> Self {
        Navigator(Arc::new(RwLock::new(initial.to_string())))
    }

    pub fn current(&self) -> String {
        self.0.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Unconditional jump, no guard evaluation.
    pub fn go(&self, name: &str) {
        debug!("Navigating to '{}'", name);
        *self.0.write().unwrap_or_else(|e| e.into_inner()) = name.to_string();
    }

    /// Guarded navigation: evaluate the target's requirement and move to
    /// either the target or the redirect destination. Returns the decision
    /// so callers can react (e.g. surface "please log in").
    pub fn navigate(&self, route: &Route, credential: Option<&Credential>) -> Access {
        let access = evaluate(&route.requirement, credential);
        match access {
            Access::Allow => self.go(route.name),
            Access::Redirect(target) => {
                warn!("Navigation to '{}' redirected to '{}'", route.name, target);
                self.go(target);
            }
        }
        access
    }

    /// Send the user to the login screen unless they are already there.
    ///
    /// This is the 401/403 landing path; the idempotence guard is what
    /// prevents a redirect loop when the login screen itself triggers an
    /// unauthorized response. Returns whether a navigation occurred.
    pub fn force_login(&self) -> bool {
        let mut current = self.0.write().unwrap_or_else(|e| e.into_inner());
        if *current == names::LOGIN {
            debug!("Already at login; not redirecting again");
            return false;
        }
        warn!("Session rejected; redirecting '{}' to login", *current);
        *current = names::LOGIN.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::table::app_routes;
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn credential_with_role(role: &str) -> Credential {
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"role":"{}"}}"#, role));
        Credential::from_token(format!("h.{}.s", payload))
    }

    fn requirement(route: &str) -> RouteRequirement {
        app_routes().find(route).unwrap().requirement.clone()
    }

    #[test]
    fn auth_required_and_anonymous_redirects_to_login() {
        let access = evaluate(&requirement(names::HOME), None);
        assert_eq!(access, Access::Redirect(names::LOGIN));
    }

    #[test]
    fn guest_only_and_authenticated_redirects_home() {
        let credential = credential_with_role("USER");
        let access = evaluate(&requirement(names::LOGIN), Some(&credential));
        assert_eq!(access, Access::Redirect(names::HOME));
    }

    #[test]
    fn super_admin_satisfies_admin_gate() {
        let credential = credential_with_role("SUPER_ADMIN");
        let access = evaluate(&requirement(names::ADMIN_USERS), Some(&credential));
        assert_eq!(access, Access::Allow);
    }

    #[test]
    fn plain_user_fails_admin_gate_toward_home() {
        let credential = credential_with_role("USER");
        let access = evaluate(&requirement(names::ADMIN_USERS), Some(&credential));
        assert_eq!(access, Access::Redirect(names::HOME));
    }

    #[test]
    fn admin_does_not_satisfy_super_admin_gate() {
        let requirement = RouteRequirement {
            requires_auth: true,
            guest_only: false,
            required_role: Some(shared::types::Role::SuperAdmin),
        };
        let credential = credential_with_role("ADMIN");
        assert_eq!(
            evaluate(&requirement, Some(&credential)),
            Access::Redirect(names::HOME)
        );
    }

    #[test]
    fn roleless_token_fails_role_gate() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"x"}"#);
        let credential = Credential::from_token(format!("h.{}.s", payload));
        assert_eq!(
            evaluate(&requirement(names::ADMIN_USERS), Some(&credential)),
            Access::Redirect(names::HOME)
        );
    }

    #[test]
    fn open_route_allows_everyone() {
        assert_eq!(evaluate(&requirement(names::VERIFY), None), Access::Allow);
        let credential = credential_with_role("USER");
        assert_eq!(
            evaluate(&requirement(names::VERIFY), Some(&credential)),
            Access::Allow
        );
    }

    #[test]
    fn navigator_applies_redirects() {
        let table = app_routes();
        let nav = Navigator::new(names::HOME);
        let access = nav.navigate(table.find(names::ADMIN_USERS).unwrap(), None);
        assert_eq!(access, Access::Redirect(names::LOGIN));
        assert_eq!(nav.current(), names::LOGIN);
    }

    #[test]
    fn force_login_is_idempotent_at_login() {
        let nav = Navigator::new(names::ALL_ORDERS);
        assert!(nav.force_login());
        assert_eq!(nav.current(), names::LOGIN);
        // Already at login — no second redirect.
        assert!(!nav.force_login());
        assert_eq!(nav.current(), names::LOGIN);
    }
}
