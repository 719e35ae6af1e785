//! Application layer errors.
//!
//! These errors represent failures while running a generator. Invalid input
//! values are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateKey;
use crate::error::ErrorCategory;

/// Errors that occur while generating files.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A file the layout command overwrites does not exist.
    #[error("File {} not found", .path.display())]
    TargetNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// The catalog has no entry for a key.
    #[error("Template '{key}' is missing from the catalog")]
    TemplateMissing { key: TemplateKey },

    /// Rendering a fragment failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// In-memory adapter lock poisoned.
    #[error("Storage lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetNotFound { path } => vec![
                format!("Expected file: {}", path.display()),
                "Run lg-cli from the root of an Angular project".into(),
                "Or set project.app_dir in lg.toml if sources live elsewhere".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were kept; restore them from the .backup copies if needed".into(),
            ],
            Self::TemplateMissing { key } => vec![
                format!("No template registered for '{}'", key),
                "This is likely a packaging error".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::TemplateMissing { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
