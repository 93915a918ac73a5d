//! Strongly-typed user identifier.
//!
//! Freshly generated IDs use ULID (Universally Unique Lexicographically
//! Sortable Identifier) format with a `usr_` prefix. IDs loaded from the
//! privileged-credential allowlist or from durable storage are opaque
//! strings and are carried verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Unique identifier for a user.
///
/// IDs are unique within a session's lifetime. Generated IDs are
/// ULID-backed; allowlisted IDs are fixed opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a user ID with a freshly generated ULID.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("usr_{}", Ulid::new()))
    }

    /// Creates a user ID from an existing opaque string.
    #[must_use]
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_has_prefix() {
        let id = UserId::generate();
        assert!(id.as_str().starts_with("usr_"));
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = UserId::generate();
        let b = UserId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn id_from_str_is_verbatim() {
        let id: UserId = "admin-1".into();
        assert_eq!(id.as_str(), "admin-1");
        assert_eq!(id.to_string(), "admin-1");
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = UserId::new("admin-1".to_string());
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"admin-1\"");
        let parsed: UserId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }

    #[test]
    fn id_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(UserId::generate());
        set.insert(UserId::new("admin-1".to_string()));
        set.insert(UserId::new("admin-1".to_string()));
        assert_eq!(set.len(), 2);
    }
}
