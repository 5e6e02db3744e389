use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

use shared::types::Role;

use super::cookie;
use super::credential::Credential;
use super::identity;

/// A cheaply-cloneable session context.
///
/// All clones share the same underlying credential slot, so the auth
/// store, the API client and the route evaluator observe every
/// `save`/`clear` immediately. This is the *only* holder of session
/// state — it is constructed once at startup and threaded into whatever
/// needs it rather than living in a global.
///
/// Mutation goes through exactly three paths: an explicit `save` (login /
/// deep-link adoption), an explicit `clear` (logout), and the 401/403
/// response policy in the API client, which also calls `clear`.
#[derive(Clone, Debug)]
pub struct SessionStore(Arc<SessionInner>);

#[derive(Debug)]
struct SessionInner {
    credential: RwLock<Option<Credential>>,
    cookie_name: String,
    state_file: PathBuf,
}

impl SessionStore {
    /// Construct the store and restore any persisted session.
    ///
    /// A persisted record is adopted only when it is structurally
    /// plausible (non-empty token); anything else starts anonymous.
    pub fn new(cookie_name: &str, state_file: impl Into<PathBuf>) -> Self {
        let state_file = state_file.into();
        let restored = cookie::read_state_file(&state_file, cookie_name)
            .filter(Credential::is_plausible);

        match &restored {
            Some(_) => info!("Restored persisted session from {}", state_file.display()),
            None => debug!("Starting anonymous"),
        }

        SessionStore(Arc::new(SessionInner {
            credential: RwLock::new(restored),
            cookie_name: cookie_name.to_string(),
            state_file,
        }))
    }

    /// The active credential, if any.
    pub fn current(&self) -> Option<Credential> {
        self.read().clone()
    }

    /// Bearer token of the active credential.
    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|c| c.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// Role derived from the active credential's token claims.
    pub fn role(&self) -> Option<Role> {
        identity::role_of(self.read().as_ref())
    }

    /// Replace the active credential and persist it.
    ///
    /// Persistence failures are logged but do not fail the caller — the
    /// in-memory session is already live and losing the cookie only costs
    /// a re-login after restart.
    pub fn save(&self, credential: Credential) {
        if let Err(e) =
            cookie::write_state_file(&self.0.state_file, &self.0.cookie_name, &credential)
        {
            warn!(
                "Failed to persist session to {}: {}",
                self.0.state_file.display(),
                e
            );
        }
        *self.write() = Some(credential);
        debug!("Session credential saved");
    }

    /// Drop the active credential from memory and storage.
    pub fn clear(&self) {
        if let Err(e) = cookie::remove_state_file(&self.0.state_file) {
            warn!(
                "Failed to remove persisted session {}: {}",
                self.0.state_file.display(),
                e
            );
        }
        *self.write() = None;
        debug!("Session credential cleared");
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<Credential>> {
        self.0.credential.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Credential>> {
        self.0.credential.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn admin_token() -> String {
        format!("h.{}.s", URL_SAFE_NO_PAD.encode(r#"{"role":"ADMIN","sub":"a@b.c"}"#))
    }

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new("authData", dir.path().join("auth.cookie"))
    }

    #[test]
    fn starts_anonymous_without_a_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.role().is_none());
    }

    #[test]
    fn save_persists_across_restarts() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = store_in(&dir);
            store.save(Credential::from_token(admin_token()));
            assert!(store.is_authenticated());
        }
        // A fresh store over the same state file restores the session.
        let store = store_in(&dir);
        assert!(store.is_authenticated());
        assert_eq!(store.role(), Some(Role::Admin));
        assert_eq!(store.current().unwrap().subject_id.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn clear_removes_memory_and_storage() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(Credential::from_token(admin_token()));
        store.clear();
        assert!(!store.is_authenticated());

        let restarted = store_in(&dir);
        assert!(!restarted.is_authenticated());
    }

    #[test]
    fn clones_share_the_credential_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let observer = store.clone();
        store.save(Credential::from_token("tok"));
        assert!(observer.is_authenticated());
        observer.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn implausible_persisted_credential_is_not_adopted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.cookie");
        let blank = Credential {
            token: "   ".to_string(),
            subject_id: None,
            channel_id: None,
            channel_handle: None,
        };
        crate::session::cookie::write_state_file(&path, "authData", &blank).unwrap();

        let store = SessionStore::new("authData", path);
        assert!(!store.is_authenticated());
    }
}
