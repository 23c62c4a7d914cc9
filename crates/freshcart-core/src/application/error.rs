//! Application layer errors.
//!
//! These errors represent failures in orchestration, not rule violations.
//! A value failing its rules is reported through `ValidationResult`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A notifier could not deliver a notice.
    #[error("Failed to deliver notice: {reason}")]
    NotifierFailed { reason: String },

    /// Notice log access failed (lock poisoned).
    #[error("Notice log is unavailable")]
    NoticeLockError,

    /// A submission file could not be read.
    #[error("Failed to read submission {path}: {reason}")]
    SubmissionLoad { path: PathBuf, reason: String },

    /// A submission file was read but is not a flat table of values.
    #[error("Failed to parse submission {path}: {reason}")]
    SubmissionParse { path: PathBuf, reason: String },

    /// A submission file has an extension no loader understands.
    #[error("Unsupported submission format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SubmissionLoad { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::SubmissionParse { .. } => vec![
                "Submissions are flat objects of field names to values".into(),
                r#"Example (JSON): {"email": "user@example.com", "password": "..."}"#.into(),
                "Nested tables and arrays are not supported".into(),
            ],
            Self::UnsupportedFormat { .. } => vec![
                "Use a .json or .toml file".into(),
                "Or pass values directly with --set key=value".into(),
            ],
            Self::NoticeLockError => vec![
                "The notice log is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::NotifierFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SubmissionLoad { .. } => ErrorCategory::NotFound,
            Self::SubmissionParse { .. } | Self::UnsupportedFormat { .. } => {
                ErrorCategory::Validation
            }
            Self::NotifierFailed { .. } | Self::NoticeLockError => ErrorCategory::Internal,
        }
    }
}
