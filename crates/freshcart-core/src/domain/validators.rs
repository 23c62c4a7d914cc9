//! One validator per field kind.
//!
//! Each function takes the raw user input and returns a fresh
//! [`ValidationResult`]. None of them panic, allocate shared state, or
//! touch I/O, except [`validate_expiry_date`], which reads the local clock.
//! Use [`validate_expiry_date_at`] when the month must be controlled.
//!
//! ```
//! use freshcart_core::domain::validators::{validate_card_number, validate_name};
//!
//! assert!(validate_card_number("4532 0151 1283 0366").is_valid());
//! assert_eq!(
//!     validate_name("B", "Last Name").message(),
//!     "Last Name must be at least 2 characters long"
//! );
//! ```

use crate::domain::{
    FieldKind, ValidationResult, YearMonth,
    rules::{self, Rule, Subject},
};

impl FieldKind {
    /// The ordered rules this kind evaluates.
    pub fn rules(&self) -> &'static [Rule] {
        rules::rules_for(*self)
    }

    /// Validate `value` as this kind.
    ///
    /// `label` replaces [`FieldKind::default_label`] wherever a message names
    /// the field. `today` is the month expiry dates are compared against;
    /// other kinds ignore it.
    pub fn validate(&self, value: &str, label: Option<&str>, today: YearMonth) -> ValidationResult {
        let label = label.unwrap_or(self.default_label());
        rules::evaluate(self.rules(), &Subject::new(value, today), label)
    }

    /// The rule `value` trips first, or `None` when it is valid.
    pub fn failing_rule(&self, value: &str, today: YearMonth) -> Option<&'static Rule> {
        rules::first_failure(self.rules(), &Subject::new(value, today))
    }
}

// Only the expiry rules read the month, and they have their own entry points.
fn check(kind: FieldKind, value: &str) -> ValidationResult {
    kind.validate(value, None, YearMonth::UNIX_EPOCH)
}

pub fn validate_email(email: &str) -> ValidationResult {
    check(FieldKind::Email, email)
}

pub fn validate_password(password: &str) -> ValidationResult {
    check(FieldKind::Password, password)
}

pub fn validate_mobile_number(mobile: &str) -> ValidationResult {
    check(FieldKind::MobileNumber, mobile)
}

/// Same rules as [`validate_mobile_number`]; the checkout and admin settings
/// forms call it by this name.
pub fn validate_phone(phone: &str) -> ValidationResult {
    validate_mobile_number(phone)
}

/// Validate a person name, naming the field `field_name` in messages.
pub fn validate_name(name: &str, field_name: &str) -> ValidationResult {
    FieldKind::Name.validate(name, Some(field_name), YearMonth::UNIX_EPOCH)
}

/// Fails only on empty or whitespace-only input.
pub fn validate_required(value: &str, field_name: &str) -> ValidationResult {
    FieldKind::Required.validate(value, Some(field_name), YearMonth::UNIX_EPOCH)
}

/// Spaces are ignored, so `"4532 0151 1283 0366"` is accepted.
pub fn validate_card_number(card_number: &str) -> ValidationResult {
    check(FieldKind::CardNumber, card_number)
}

/// Validate `MM/YY` against the current local month.
pub fn validate_expiry_date(expiry: &str) -> ValidationResult {
    validate_expiry_date_at(expiry, YearMonth::current())
}

/// Validate `MM/YY` against `today`. A card expiring this month passes.
pub fn validate_expiry_date_at(expiry: &str, today: YearMonth) -> ValidationResult {
    FieldKind::ExpiryDate.validate(expiry, None, today)
}

pub fn validate_cvv(cvv: &str) -> ValidationResult {
    check(FieldKind::Cvv, cvv)
}

pub fn validate_zip_code(zip_code: &str) -> ValidationResult {
    check(FieldKind::ZipCode, zip_code)
}

pub fn validate_address(address: &str) -> ValidationResult {
    check(FieldKind::Address, address)
}

pub fn validate_city(city: &str) -> ValidationResult {
    check(FieldKind::City, city)
}

pub fn validate_state(state: &str) -> ValidationResult {
    check(FieldKind::State, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_2025() -> YearMonth {
        YearMonth::new(2025, 3).unwrap()
    }

    // ========================================================================
    // Required handling
    // ========================================================================

    #[test]
    fn blank_input_is_required_for_every_kind() {
        for kind in FieldKind::ALL {
            for blank in ["", "   ", "\t\n"] {
                let result = kind.validate(blank, None, march_2025());
                assert!(!result.is_valid(), "{kind} accepted {blank:?}");
                assert!(
                    result.message().ends_with("is required"),
                    "{kind}: {}",
                    result.message()
                );
            }
        }
    }

    #[test]
    fn default_labels_in_required_messages() {
        assert_eq!(validate_email("").message(), "Email address is required");
        assert_eq!(validate_password("").message(), "Password is required");
        assert_eq!(validate_mobile_number("").message(), "Mobile number is required");
        assert_eq!(validate_card_number("   ").message(), "Card number is required");
        assert_eq!(validate_expiry_date("").message(), "Expiry date is required");
        assert_eq!(validate_cvv("").message(), "CVV is required");
        assert_eq!(validate_zip_code("").message(), "ZIP code is required");
        assert_eq!(validate_address(" ").message(), "Address is required");
        assert_eq!(validate_city("").message(), "City is required");
        assert_eq!(validate_state("").message(), "State is required");
    }

    #[test]
    fn caller_label_overrides_required_message() {
        let r = FieldKind::ZipCode.validate("", Some("Postal code"), march_2025());
        assert_eq!(r.message(), "Postal code is required");
        assert_eq!(validate_required(" ", "Store Name").message(), "Store Name is required");
        assert!(validate_required("x", "Store Name").is_valid());
    }

    // ========================================================================
    // Email
    // ========================================================================

    #[test]
    fn email_examples() {
        assert!(validate_email("user@example.com").is_valid());
        assert!(validate_email("first.last+tag@mail.example.co").is_valid());
        assert_eq!(
            validate_email("user@@example").message(),
            "Please enter a valid email address"
        );
        assert!(!validate_email("user@example.c").is_valid());
        assert!(!validate_email(" user@example.com").is_valid());
    }

    #[test]
    fn email_too_long() {
        let email = format!("{}@example.com", "a".repeat(243));
        assert_eq!(email.len(), 255);
        assert_eq!(validate_email(&email).message(), "Email address is too long");

        let email = format!("{}@example.com", "a".repeat(242));
        assert!(validate_email(&email).is_valid());
    }

    // ========================================================================
    // Password
    // ========================================================================

    #[test]
    fn password_examples() {
        assert!(validate_password("Abcdef1!").is_valid());
        assert!(!validate_password("abcdefgh").is_valid());
        assert_eq!(
            validate_password("Aaaa111!").message(),
            "Password contains common patterns and is not secure"
        );
        assert_eq!(
            validate_password("Admin123!").message(),
            "Password contains common patterns and is not secure"
        );
        assert!(!validate_password("MyQWERTY9$x").is_valid());
    }

    #[test]
    fn password_first_missing_class_is_reported() {
        assert_eq!(
            validate_password("Abc1!").message(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            validate_password("ABCDEFG1!").message(),
            "Password must contain at least one lowercase letter"
        );
        assert_eq!(
            validate_password("abcdefgh").message(),
            "Password must contain at least one uppercase letter"
        );
        assert_eq!(
            validate_password("Abcdefgh!").message(),
            "Password must contain at least one number"
        );
        assert_eq!(
            validate_password("Abcdefg1").message(),
            "Password must contain at least one special character"
        );
    }

    #[test]
    fn password_length_bounds() {
        let at_limit = format!("Ab1!{}", "xy".repeat(62));
        assert_eq!(at_limit.chars().count(), 128);
        assert!(validate_password(&at_limit).is_valid());

        let over = format!("{at_limit}z");
        assert_eq!(
            validate_password(&over).message(),
            "Password must be less than 128 characters"
        );
    }

    // ========================================================================
    // Mobile
    // ========================================================================

    #[test]
    fn mobile_examples() {
        assert!(validate_mobile_number("(415) 555-2671").is_valid());
        assert!(validate_mobile_number("+44 20 7946 0958").is_valid());
        assert!(validate_phone("+1 (555) 000-0000").is_valid());
        assert_eq!(
            validate_mobile_number("1111111111").message(),
            "Mobile number cannot be all the same digit"
        );
        assert_eq!(
            validate_mobile_number("+1111111111").message(),
            "Mobile number cannot be all the same digit"
        );
        assert_eq!(
            validate_mobile_number("phone: 12").message(),
            "Mobile number must be at least 10 digits"
        );
    }

    // ========================================================================
    // Names
    // ========================================================================

    #[test]
    fn name_examples() {
        assert!(validate_name("Al", "First Name").is_valid());
        assert!(validate_name("Mary-Jane O'Neil Jr.", "Name").is_valid());
        assert_eq!(
            validate_name("B", "Last Name").message(),
            "Last Name must be at least 2 characters long"
        );
        assert_eq!(
            validate_name(&"x".repeat(51), "Name").message(),
            "Name cannot exceed 50 characters"
        );
        assert_eq!(
            validate_name("R2-D2", "First Name").message(),
            "First Name can only contain letters, spaces, hyphens, and apostrophes"
        );
        assert_eq!(
            validate_name("Anne--Marie", "First Name").message(),
            "First Name cannot contain consecutive spaces or special characters"
        );
    }

    #[test]
    fn name_consecutive_check_sees_untrimmed_value() {
        // Trimmed it is fine, but the raw input carries a double space.
        assert_eq!(
            validate_name("  Al", "First Name").message(),
            "First Name cannot contain consecutive spaces or special characters"
        );
        assert!(validate_name(" Al ", "First Name").is_valid());
    }

    // ========================================================================
    // Payment
    // ========================================================================

    #[test]
    fn card_number_examples() {
        assert!(validate_card_number("4532015112830366").is_valid());
        assert_eq!(
            validate_card_number("4532015112830367").message(),
            "Invalid card number"
        );
        assert!(validate_card_number("4532 0151 1283 0366").is_valid());
        assert_eq!(
            validate_card_number("4532-0151-1283-0366").message(),
            "Card number must be 13-19 digits"
        );
        assert_eq!(
            validate_card_number("411111111111").message(),
            "Card number must be 13-19 digits"
        );
    }

    #[test]
    fn expiry_examples() {
        let today = march_2025();
        assert!(validate_expiry_date_at("03/25", today).is_valid());
        assert!(validate_expiry_date_at("01/26", today).is_valid());
        assert_eq!(validate_expiry_date_at("02/25", today).message(), "Card has expired");
        assert_eq!(validate_expiry_date_at("12/24", today).message(), "Card has expired");
        assert_eq!(
            validate_expiry_date_at("13/25", today).message(),
            "Expiry date must be in MM/YY format"
        );
        assert_eq!(
            validate_expiry_date_at("3/25", today).message(),
            "Expiry date must be in MM/YY format"
        );
    }

    #[test]
    fn expiry_uses_current_month_by_default() {
        let now = YearMonth::current();
        let this_month = format!("{:02}/{:02}", now.month(), now.short_year());
        assert!(validate_expiry_date(&this_month).is_valid());
    }

    #[test]
    fn cvv_and_zip() {
        assert!(validate_cvv("123").is_valid());
        assert!(validate_cvv("1234").is_valid());
        assert_eq!(validate_cvv("12").message(), "CVV must be 3 or 4 digits");
        assert!(validate_zip_code("12345").is_valid());
        assert!(validate_zip_code("12345-6789").is_valid());
        assert_eq!(
            validate_zip_code("1234").message(),
            "Please enter a valid ZIP code (12345 or 12345-6789)"
        );
        assert!(!validate_zip_code("12345-678").is_valid());
    }

    // ========================================================================
    // Address
    // ========================================================================

    #[test]
    fn address_city_state() {
        assert!(validate_address("1 Main St").is_valid());
        assert_eq!(
            validate_address("  1 A  ").message(),
            "Address must be at least 5 characters long"
        );
        assert_eq!(
            validate_address(&"x".repeat(201)).message(),
            "Address cannot exceed 200 characters"
        );
        assert!(validate_city("St. John's").is_valid());
        assert_eq!(
            validate_city("X").message(),
            "City name must be at least 2 characters long"
        );
        assert_eq!(
            validate_city("Area 51").message(),
            "City name can only contain letters, spaces, hyphens, and apostrophes"
        );
        assert!(validate_state("CA").is_valid());
        assert!(validate_state("Rhode Island & Providence 1").is_valid());
        assert_eq!(
            validate_state("C").message(),
            "State must be at least 2 characters long"
        );
    }

    // ========================================================================
    // Properties
    // ========================================================================

    #[test]
    fn results_are_idempotent_and_consistent() {
        let inputs = [
            "", " ", "user@example.com", "Abcdef1!", "4532015112830366", "03/25", "123",
            "12345", "Al", "(415) 555-2671", "x",
        ];
        for kind in FieldKind::ALL {
            for input in inputs {
                let first = kind.validate(input, None, march_2025());
                let second = kind.validate(input, None, march_2025());
                assert_eq!(first, second);
                assert_eq!(first.is_valid(), first.message().is_empty());
            }
        }
    }

    #[test]
    fn failing_rule_names_the_check() {
        let rule = FieldKind::CardNumber
            .failing_rule("4532015112830367", march_2025())
            .unwrap();
        assert_eq!(rule.id(), "card-number.checksum");
        assert!(FieldKind::Cvv.failing_rule("123", march_2025()).is_none());
    }
}
