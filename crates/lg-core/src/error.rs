//! Unified error handling for lg Core.
//!
//! Wraps domain and application errors behind a single type so that the CLI
//! has one thing to match on when choosing a message and an exit code.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for lg Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LgError {
    /// Errors from the domain layer (invalid input values).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (generator failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl LgError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the run failed before any file was touched.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::Domain(_) | Self::Application(ApplicationError::TargetNotFound { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type LgResult<T> = Result<T, LgError>;
