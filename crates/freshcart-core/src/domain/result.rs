//! The outcome of a single validator call.

use serde::Serialize;
use std::fmt;

/// Result of checking one value against one field kind.
///
/// Invariant: `message` is empty if and only if `is_valid` is true. Both
/// constructors enforce it and the fields are private, so a value built in
/// this crate can never break it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    message: String,
}

impl ValidationResult {
    /// A passing result with an empty message.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    /// A failing result.
    ///
    /// # Panics
    /// Panics if `message` is empty. Every rule in this crate carries a
    /// non-empty message, so this only fires on a programming error.
    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(
            !message.is_empty(),
            "an invalid ValidationResult needs a message"
        );
        Self {
            is_valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The failure reason, or `""` for a valid result.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The failure reason, if any.
    pub fn failure(&self) -> Option<&str> {
        (!self.is_valid).then_some(self.message.as_str())
    }

    /// Convert into a `Result`, keeping the message as the error.
    pub fn into_result(self) -> Result<(), String> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            f.write_str("valid")
        } else {
            f.write_str(&self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_has_empty_message() {
        let r = ValidationResult::valid();
        assert!(r.is_valid());
        assert_eq!(r.message(), "");
        assert_eq!(r.failure(), None);
    }

    #[test]
    fn invalid_keeps_message() {
        let r = ValidationResult::invalid("CVV is required");
        assert!(!r.is_valid());
        assert_eq!(r.failure(), Some("CVV is required"));
        assert_eq!(r.into_result(), Err("CVV is required".to_string()));
    }

    #[test]
    #[should_panic]
    fn invalid_rejects_empty_message() {
        ValidationResult::invalid("");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&ValidationResult::invalid("bad")).unwrap();
        assert_eq!(json, r#"{"isValid":false,"message":"bad"}"#);
    }
}
