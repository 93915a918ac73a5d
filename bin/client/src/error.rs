//! Error types for the client binary.

use std::fmt;

/// Errors from loading client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The environment held configuration that failed to parse.
    Load { reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { reason } => {
                write!(f, "failed to load configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_display_carries_reason() {
        let err = ConfigError::Load {
            reason: "invalid type for auth.permissive_login".to_string(),
        };
        assert!(err.to_string().contains("failed to load configuration"));
        assert!(err.to_string().contains("permissive_login"));
    }
}
