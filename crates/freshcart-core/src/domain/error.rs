// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================
//
// A value failing its rules is NOT an error: validators report that through
// `ValidationResult`. The variants below cover callers asking for things the
// domain does not know about.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Lookup Errors (404-level equivalent)
    // ========================================================================
    #[error("unknown field kind '{0}'")]
    UnknownFieldKind(String),

    #[error("unknown form '{0}'")]
    UnknownForm(String),

    // ========================================================================
    // Input Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid month '{input}': {reason}")]
    InvalidYearMonth { input: String, reason: String },

    #[error("invalid submission entry '{entry}': expected key=value")]
    InvalidSubmissionEntry { entry: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownFieldKind(kind) => vec![
                format!("'{}' is not a known field kind", kind),
                "Known kinds: email, password, mobile (phone), name, required, card-number,".into(),
                "  expiry-date, cvv, zip-code, address, city, state".into(),
                "Try: freshcart rules".into(),
            ],
            Self::UnknownForm(form) => vec![
                format!("'{}' is not a known form", form),
                "Known forms: login, admin-login, registration, checkout, profile,".into(),
                "  password-change, admin-profile, store-settings".into(),
            ],
            Self::InvalidYearMonth { .. } => vec![
                "Months are written YYYY-MM, e.g. 2025-03".into(),
            ],
            Self::InvalidSubmissionEntry { entry } => vec![
                format!("Could not split '{}' into a key and a value", entry),
                "Example: --set email=user@example.com".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownFieldKind(_) | Self::UnknownForm(_) => ErrorCategory::NotFound,
            Self::InvalidYearMonth { .. } | Self::InvalidSubmissionEntry { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
