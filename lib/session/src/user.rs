//! User domain type and its persisted shape.
//!
//! A User is the identity behind an active session. Users are synthesized
//! locally (guest, signup, fallback login) or taken from the privileged
//! allowlist; there is no backing identity provider.

use chrono::{DateTime, Utc};
use handwave_core::UserId;
use serde::{Deserialize, Serialize};

/// Identity record for the active session.
///
/// The serialized form is the durable `user` record, so field names follow
/// the documented storage schema (camelCase). `isAdmin` and `avatar` may be
/// absent in stored records and default accordingly.
///
/// A guest is never admin: the constructors keep the two flags mutually
/// exclusive even though the type does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier, unique within the session's lifetime.
    id: UserId,
    /// Display name.
    name: String,
    /// Email address, if the user has one (guests do not).
    #[serde(default)]
    email: Option<String>,
    /// Avatar URL, if set.
    #[serde(default)]
    avatar: Option<String>,
    /// True for sessions created without credentials.
    is_guest: bool,
    /// True only for allowlisted privileged identities.
    #[serde(default)]
    is_admin: bool,
    /// When the user record was synthesized.
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a regular, non-privileged user with a fresh ID.
    #[must_use]
    pub fn regular(name: String, email: String) -> Self {
        Self {
            id: UserId::generate(),
            name,
            email: Some(email),
            avatar: None,
            is_guest: false,
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    /// Creates a guest user with a fresh ID and no email.
    #[must_use]
    pub fn guest(name: String) -> Self {
        Self {
            id: UserId::generate(),
            name,
            email: None,
            avatar: None,
            is_guest: true,
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    /// Creates an admin user from an allowlisted identity.
    ///
    /// The ID and name come from the allowlist record, not from a fresh
    /// generation, so repeated logins yield the same identity.
    #[must_use]
    pub fn privileged(id: UserId, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email: Some(email),
            avatar: None,
            is_guest: false,
            is_admin: true,
            created_at: Utc::now(),
        }
    }

    /// Returns the user's ID.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the avatar URL, if set.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Returns true if this is a guest identity.
    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.is_guest
    }

    /// Returns true if this is a privileged identity.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Returns when the user record was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sets the avatar URL.
    pub fn set_avatar(&mut self, avatar: Option<String>) {
        self.avatar = avatar;
    }
}
