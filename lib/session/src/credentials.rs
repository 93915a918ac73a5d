//! Credential verification against the static privileged allowlist.
//!
//! The allowlist is a fixed, process-wide set of privileged accounts; it is
//! an external configuration surface, not something users can edit at
//! runtime. It is deliberately hidden behind [`CredentialVerifier`] so a
//! real identity provider can replace it without touching session logic.

use handwave_core::UserId;

/// A privileged account entry: matching `(email, password)` exactly
/// elevates the login to an admin session with this identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Fixed user ID carried into the admin session.
    pub id: String,
    /// Exact-match login email.
    pub email: String,
    /// Exact-match login password. Plain text: this is demo configuration,
    /// not credential storage.
    pub password: String,
    /// Display name for the admin identity.
    pub name: String,
}

/// The identity a successful verification yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegedIdentity {
    /// The allowlisted user ID.
    pub id: UserId,
    /// The allowlisted display name.
    pub name: String,
    /// The login email.
    pub email: String,
}

/// Pluggable credential check.
///
/// The session store consults this on every `login`; `None` means the pair
/// is not privileged (what happens next depends on the permissive-login
/// setting, see [`SessionStore`](crate::SessionStore)).
pub trait CredentialVerifier {
    /// Returns the privileged identity for an exact `(email, password)`
    /// match, or `None`.
    fn verify(&self, email: &str, password: &str) -> Option<PrivilegedIdentity>;
}

/// Static allowlist implementation of [`CredentialVerifier`].
#[derive(Debug, Clone, Default)]
pub struct StaticAllowlist {
    records: Vec<CredentialRecord>,
}

impl StaticAllowlist {
    /// Creates an allowlist from explicit records.
    #[must_use]
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        Self { records }
    }

    /// Returns the built-in demo allowlist.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![CredentialRecord {
            id: "admin-1".to_string(),
            email: "admin@videocall.com".to_string(),
            password: "Admin@2024".to_string(),
            name: "Administrator".to_string(),
        }])
    }

    /// Returns the allowlisted records.
    #[must_use]
    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }
}

impl CredentialVerifier for StaticAllowlist {
    fn verify(&self, email: &str, password: &str) -> Option<PrivilegedIdentity> {
        self.records
            .iter()
            .find(|r| r.email == email && r.password == password)
            .map(|r| PrivilegedIdentity {
                id: UserId::new(r.id.clone()),
                name: r.name.clone(),
                email: r.email.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_allowlist_verifies_exact_pair() {
        let allowlist = StaticAllowlist::builtin();
        let identity = allowlist
            .verify("admin@videocall.com", "Admin@2024")
            .expect("should verify");
        assert_eq!(identity.id.as_str(), "admin-1");
        assert_eq!(identity.name, "Administrator");
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let allowlist = StaticAllowlist::builtin();
        assert!(allowlist.verify("admin@videocall.com", "admin@2024").is_none());
    }

    #[test]
    fn unknown_email_does_not_verify() {
        let allowlist = StaticAllowlist::builtin();
        assert!(allowlist.verify("user@example.com", "Admin@2024").is_none());
    }

    #[test]
    fn empty_allowlist_verifies_nothing() {
        let allowlist = StaticAllowlist::new(Vec::new());
        assert!(allowlist.verify("admin@videocall.com", "Admin@2024").is_none());
    }

    #[test]
    fn custom_records_are_matched() {
        let allowlist = StaticAllowlist::new(vec![CredentialRecord {
            id: "ops-7".to_string(),
            email: "ops@videocall.com".to_string(),
            password: "s3cret".to_string(),
            name: "Operations".to_string(),
        }]);
        let identity = allowlist.verify("ops@videocall.com", "s3cret").expect("verify");
        assert_eq!(identity.id.as_str(), "ops-7");
    }
}
