use thiserror::Error;

use crate::error::ErrorCategory;

/// Domain error type.
///
/// Raised while turning raw user input into domain values, before any
/// generator runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidServiceName { .. } => vec![
                "Service names must be valid TypeScript identifiers".into(),
                "Use letters, digits, '_' or '$', not starting with a digit".into(),
                "Examples: Product, UserProfile, auth".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidServiceName { .. } => ErrorCategory::Validation,
        }
    }
}
