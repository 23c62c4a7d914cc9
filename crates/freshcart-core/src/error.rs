//! Root error type of the crate.
//!
//! A value failing validation is never an error. `FreshcartError` covers the
//! operational failures: asking for a kind or form that does not exist, or
//! an adapter that could not deliver.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

#[derive(Debug, Error, Clone)]
pub enum FreshcartError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl FreshcartError {
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
            Self::Domain(e) => e.category().into(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller passed something malformed.
    Validation,
    /// A kind, form or file that does not exist.
    NotFound,
    Internal,
}

impl From<crate::domain::ErrorCategory> for ErrorCategory {
    fn from(category: crate::domain::ErrorCategory) -> Self {
        use crate::domain::ErrorCategory as Domain;
        match category {
            Domain::Validation => Self::Validation,
            Domain::NotFound => Self::NotFound,
            Domain::Internal => Self::Internal,
        }
    }
}

/// Convenient result type alias.
pub type FreshcartResult<T> = Result<T, FreshcartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_categories_map_through() {
        let err: FreshcartError = DomainError::UnknownForm("wishlist".into()).into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("wishlist")));
    }

    #[test]
    fn bad_month_is_validation() {
        let err: FreshcartError = DomainError::InvalidYearMonth {
            input: "2025-13".into(),
            reason: "month must be between 1 and 12".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().starts_with("Domain error: invalid month"));
    }

    #[test]
    fn notifier_failures_are_internal() {
        let err = FreshcartError::from(ApplicationError::NotifierFailed {
            reason: "closed".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().starts_with("Application error:"));
    }
}
