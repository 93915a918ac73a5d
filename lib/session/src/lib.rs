//! Session and authentication state for the handwave client.
//!
//! This crate provides:
//! - User identity (`User` type and its persisted JSON shape)
//! - Credential verification (`CredentialVerifier`, `StaticAllowlist`)
//! - Session state machine (`SessionStore`, `SessionState`)
//! - Authentication error types
//!
//! # Access Control Model
//!
//! The client recognizes four session states: no session, guest, regular
//! user, and admin. Admin sessions are established only by matching the
//! static privileged-credential allowlist; guests and regular users are
//! synthesized locally, without a backing identity provider.
//!
//! # Example
//!
//! ```
//! use handwave_session::{SessionState, SessionStore, StaticAllowlist};
//! use handwave_storage::{MemoryStore, shared};
//!
//! let storage = shared(MemoryStore::new());
//! let mut store = SessionStore::new(storage, Box::new(StaticAllowlist::builtin()), false);
//! assert_eq!(store.state(), SessionState::NoSession);
//!
//! let user = store.login_as_guest("Dana".to_string());
//! assert!(user.is_guest());
//! assert_eq!(store.state(), SessionState::Guest);
//!
//! store.logout();
//! assert_eq!(store.state(), SessionState::NoSession);
//! ```

pub mod credentials;
pub mod error;
pub mod store;
pub mod user;

// Re-export main types at crate root
pub use credentials::{CredentialRecord, CredentialVerifier, PrivilegedIdentity, StaticAllowlist};
pub use error::AuthenticationError;
pub use store::{SessionState, SessionStore};
pub use user::User;
