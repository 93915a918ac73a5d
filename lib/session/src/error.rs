//! Error types for the session crate.
//!
//! Only credential verification can fail, and only when permissive login
//! is disabled. Guest login, signup, and logout are total.

use std::fmt;

/// Errors from authentication operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    /// The `(email, password)` pair matched no allowlisted account and
    /// permissive login is disabled.
    InvalidCredentials,
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => {
                write!(f, "invalid email or password")
            }
        }
    }
}

impl std::error::Error for AuthenticationError {}
