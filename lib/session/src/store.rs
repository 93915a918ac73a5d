//! The session store: a single-owner state machine over the active session.
//!
//! The store owns the only mutable handle to the session. Every successful
//! operation writes the durable `user` record synchronously before
//! returning, then notifies subscribers; the route-admission layer reads
//! snapshots via [`SessionStore::state`] and never mutates.

use handwave_storage::{KeyValueStore as _, SharedStore};

use crate::credentials::CredentialVerifier;
use crate::error::AuthenticationError;
use crate::user::User;

/// Durable storage key for the active session record.
const USER_KEY: &str = "user";

/// Snapshot of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No active session.
    NoSession,
    /// Active session for a guest identity.
    Guest,
    /// Active session for a regular, non-privileged identity.
    Regular,
    /// Active session for an allowlisted privileged identity.
    Admin,
}

impl SessionState {
    /// Returns true if any session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::NoSession)
    }

    /// Returns true for an admin session.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Owns the active session and the rules for establishing one.
///
/// At most one session is active at a time; any login-family call replaces
/// the previous session atomically from the caller's perspective.
pub struct SessionStore {
    storage: SharedStore,
    verifier: Box<dyn CredentialVerifier>,
    /// When set, a login that matches no allowlisted account silently
    /// succeeds as a fresh regular account (the original demo behavior).
    /// When clear, it fails with `InvalidCredentials`.
    permissive_login: bool,
    current: Option<User>,
    subscribers: Vec<Box<dyn Fn(SessionState)>>,
}

impl SessionStore {
    /// Creates the store, hydrating the active session from durable storage.
    ///
    /// A missing or malformed `user` record yields no session; malformed
    /// records are logged and treated as absent.
    #[must_use]
    pub fn new(
        storage: SharedStore,
        verifier: Box<dyn CredentialVerifier>,
        permissive_login: bool,
    ) -> Self {
        let current = Self::hydrate(&storage);
        Self {
            storage,
            verifier,
            permissive_login,
            current,
            subscribers: Vec::new(),
        }
    }

    fn hydrate(storage: &SharedStore) -> Option<User> {
        let raw = storage.borrow().get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                tracing::info!(user_id = %user.id(), "restored session from storage");
                Some(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "malformed stored session; treating as absent");
                None
            }
        }
    }

    /// Authenticates with an email/password pair.
    ///
    /// An exact allowlist match establishes an admin session with the
    /// allowlisted identity. Otherwise, with permissive login enabled the
    /// pair is accepted as a brand-new regular account whose display name
    /// is the local part of the email; with it disabled the call fails.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::InvalidCredentials`] when the pair
    /// matches no allowlisted account and permissive login is disabled.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthenticationError> {
        if let Some(identity) = self.verifier.verify(email, password) {
            let user = User::privileged(identity.id, identity.name, identity.email);
            tracing::info!(user_id = %user.id(), "privileged login");
            return Ok(self.establish(user));
        }

        if !self.permissive_login {
            tracing::info!(email, "login rejected: no allowlist match");
            return Err(AuthenticationError::InvalidCredentials);
        }

        let name = local_part(email).to_string();
        let user = User::regular(name, email.to_string());
        tracing::info!(user_id = %user.id(), "permissive login as new regular user");
        Ok(self.establish(user))
    }

    /// Registers a new regular account and establishes its session.
    ///
    /// Always succeeds. The password is accepted for interface parity but
    /// never stored; credential storage is an external concern.
    pub fn signup(&mut self, name: String, email: String, _password: &str) -> User {
        let user = User::regular(name, email);
        tracing::info!(user_id = %user.id(), "signup");
        self.establish(user)
    }

    /// Establishes a guest session under the given display name.
    ///
    /// Always succeeds; guests have no email and no privileges.
    pub fn login_as_guest(&mut self, name: String) -> User {
        let user = User::guest(name);
        tracing::info!(user_id = %user.id(), "guest login");
        self.establish(user)
    }

    /// Clears the active session and its durable record.
    ///
    /// Idempotent: calling with no active session is a no-op (subscribers
    /// are not re-notified).
    pub fn logout(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.current = None;
        self.storage.borrow_mut().remove(USER_KEY);
        tracing::info!("logged out");
        self.notify();
    }

    /// Returns the active user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Returns a snapshot of the session state machine.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match &self.current {
            None => SessionState::NoSession,
            Some(user) if user.is_guest() => SessionState::Guest,
            Some(user) if user.is_admin() => SessionState::Admin,
            Some(_) => SessionState::Regular,
        }
    }

    /// Registers a subscriber invoked after every state change.
    ///
    /// Subscribers observe only fully-applied states: the durable write
    /// completes before notification.
    pub fn subscribe(&mut self, subscriber: impl Fn(SessionState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Replaces the active session, persists it, and notifies subscribers.
    fn establish(&mut self, user: User) -> User {
        self.persist(&user);
        self.current = Some(user.clone());
        self.notify();
        user
    }

    fn persist(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.borrow_mut().set(USER_KEY, &json),
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode session record");
            }
        }
    }

    fn notify(&self) {
        let state = self.state();
        for subscriber in &self.subscribers {
            subscriber(state);
        }
    }
}

/// Returns the substring of `email` before the first `@`, or the whole
/// string when there is none.
fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticAllowlist;
    use handwave_storage::{KeyValueStore, MemoryStore, SharedStore, shared};
    use std::cell::Cell;
    use std::rc::Rc;

    fn store_with(storage: SharedStore, permissive: bool) -> SessionStore {
        SessionStore::new(storage, Box::new(StaticAllowlist::builtin()), permissive)
    }

    #[test]
    fn boot_with_empty_storage_has_no_session() {
        let store = store_with(shared(MemoryStore::new()), false);
        assert_eq!(store.state(), SessionState::NoSession);
        assert!(store.current_user().is_none());
    }

    #[test]
    fn allowlisted_login_is_admin() {
        let mut store = store_with(shared(MemoryStore::new()), false);
        let user = store
            .login("admin@videocall.com", "Admin@2024")
            .expect("allowlisted login");
        assert!(user.is_admin());
        assert!(!user.is_guest());
        assert_eq!(user.id().as_str(), "admin-1");
        assert_eq!(store.state(), SessionState::Admin);
    }

    #[test]
    fn unknown_credentials_fail_by_default() {
        let mut store = store_with(shared(MemoryStore::new()), false);
        let err = store
            .login("carol@example.com", "whatever")
            .expect_err("strict login should fail");
        assert_eq!(err, AuthenticationError::InvalidCredentials);
        assert_eq!(store.state(), SessionState::NoSession);
    }

    #[test]
    fn permissive_login_synthesizes_regular_user() {
        let mut store = store_with(shared(MemoryStore::new()), true);
        let user = store
            .login("carol@example.com", "whatever")
            .expect("permissive login");
        assert!(!user.is_admin());
        assert!(!user.is_guest());
        assert_eq!(user.name(), "carol");
        assert_eq!(user.email(), Some("carol@example.com"));
        assert_eq!(store.state(), SessionState::Regular);
    }

    #[test]
    fn permissive_login_still_elevates_allowlisted_pair() {
        let mut store = store_with(shared(MemoryStore::new()), true);
        let user = store
            .login("admin@videocall.com", "Admin@2024")
            .expect("allowlisted login");
        assert!(user.is_admin());
    }

    #[test]
    fn signup_always_succeeds_as_regular() {
        let mut store = store_with(shared(MemoryStore::new()), false);
        let user = store.signup("Dana".to_string(), "dana@example.com".to_string(), "pw");
        assert!(!user.is_admin());
        assert!(!user.is_guest());
        assert_eq!(user.name(), "Dana");
        assert_eq!(store.state(), SessionState::Regular);
    }

    #[test]
    fn guest_login_is_guest_state() {
        let mut store = store_with(shared(MemoryStore::new()), false);
        let user = store.login_as_guest("Visitor".to_string());
        assert!(user.is_guest());
        assert!(user.email().is_none());
        assert_eq!(store.state(), SessionState::Guest);
    }

    #[test]
    fn logout_clears_any_state_and_is_idempotent() {
        let storage = shared(MemoryStore::new());
        let mut store = store_with(storage.clone(), false);
        store.login_as_guest("Visitor".to_string());

        store.logout();
        assert_eq!(store.state(), SessionState::NoSession);
        assert_eq!(storage.borrow().get("user"), None);

        // No session: logout is a no-op.
        store.logout();
        assert_eq!(store.state(), SessionState::NoSession);
    }

    #[test]
    fn session_survives_rehydration() {
        let storage = shared(MemoryStore::new());
        {
            let mut store = store_with(storage.clone(), false);
            store.login_as_guest("Visitor".to_string());
        }

        let rebooted = store_with(storage, false);
        assert_eq!(rebooted.state(), SessionState::Guest);
        assert_eq!(rebooted.current_user().map(User::name), Some("Visitor"));
    }

    #[test]
    fn new_login_replaces_prior_session() {
        let mut store = store_with(shared(MemoryStore::new()), false);
        store.login_as_guest("Visitor".to_string());
        store
            .login("admin@videocall.com", "Admin@2024")
            .expect("allowlisted login");
        assert_eq!(store.state(), SessionState::Admin);
    }

    #[test]
    fn malformed_stored_session_is_treated_as_absent() {
        let storage = shared(MemoryStore::with_entries([("user", "{not json")]));
        let store = store_with(storage, false);
        assert_eq!(store.state(), SessionState::NoSession);
    }

    #[test]
    fn subscribers_observe_fully_applied_state() {
        let storage = shared(MemoryStore::new());
        let mut store = store_with(storage.clone(), false);

        let seen = Rc::new(Cell::new(None));
        let seen_by_sub = seen.clone();
        let storage_in_sub = storage.clone();
        store.subscribe(move |state| {
            // The durable write must land before notification.
            if state.is_authenticated() {
                assert!(storage_in_sub.borrow().get("user").is_some());
            }
            seen_by_sub.set(Some(state));
        });

        store.login_as_guest("Visitor".to_string());
        assert_eq!(seen.get(), Some(SessionState::Guest));

        store.logout();
        assert_eq!(seen.get(), Some(SessionState::NoSession));
    }

    #[test]
    fn email_without_at_sign_uses_whole_string_as_name() {
        let mut store = store_with(shared(MemoryStore::new()), true);
        let user = store.login("carol", "pw").expect("permissive login");
        assert_eq!(user.name(), "carol");
    }
}
