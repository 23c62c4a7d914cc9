//! Ordered rule tables, one per [`FieldKind`].
//!
//! # Design
//!
//! Every kind owns a `static` slice of [`Rule`]s. A rule is a plain predicate
//! plus the message shown when it fails. [`evaluate`] walks the slice in order
//! and stops at the first failing rule, so the order of the entries below IS
//! the user-visible priority of the messages. Change it only on purpose.
//!
//! Subjects carry the raw, untrimmed input. Whether a rule trims, strips
//! whitespace or keeps the value verbatim is decided per rule, because the
//! storefront forms are not consistent about it (names trim for length but
//! check consecutive spaces on the raw value, for instance).

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{FieldKind, ValidationResult, YearMonth};

// ── Rule model ────────────────────────────────────────────────────────────────

/// What a rule predicate sees.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    raw: &'a str,
    today: YearMonth,
}

impl<'a> Subject<'a> {
    pub fn new(raw: &'a str, today: YearMonth) -> Self {
        Self { raw, today }
    }

    /// The value exactly as the user typed it.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn trimmed(&self) -> &'a str {
        self.raw.trim()
    }

    /// The month expiry dates are compared against.
    pub fn today(&self) -> YearMonth {
        self.today
    }
}

pub type Predicate = fn(&Subject<'_>) -> bool;

/// A failure message, optionally prefixed with the field label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Shown verbatim.
    Fixed(&'static str),
    /// Appended to the field label: `Labelled(" is required")`.
    Labelled(&'static str),
}

impl Message {
    pub fn render(&self, label: &str) -> String {
        match self {
            Self::Fixed(text) => (*text).to_string(),
            Self::Labelled(suffix) => format!("{label}{suffix}"),
        }
    }
}

/// One check in a kind's rule list.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    id: &'static str,
    passes: Predicate,
    message: Message,
}

impl Rule {
    pub const fn new(id: &'static str, passes: Predicate, message: Message) -> Self {
        Self {
            id,
            passes,
            message,
        }
    }

    /// Stable identifier, `<kind>.<check>`.
    pub const fn id(&self) -> &'static str {
        self.id
    }

    pub const fn message(&self) -> Message {
        self.message
    }

    pub fn passes(&self, subject: &Subject<'_>) -> bool {
        (self.passes)(subject)
    }
}

// ── Evaluator ─────────────────────────────────────────────────────────────────

/// The first rule in `rules` that `subject` fails, if any.
pub fn first_failure<'r>(rules: &'r [Rule], subject: &Subject<'_>) -> Option<&'r Rule> {
    rules.iter().find(|rule| !rule.passes(subject))
}

/// Run `rules` in order; the first failure wins.
pub fn evaluate(rules: &[Rule], subject: &Subject<'_>, label: &str) -> ValidationResult {
    match first_failure(rules, subject) {
        Some(rule) => {
            tracing::trace!(rule = rule.id(), "rule failed");
            ValidationResult::invalid(rule.message().render(label))
        }
        None => ValidationResult::valid(),
    }
}

/// The rule list for `kind`.
pub fn rules_for(kind: FieldKind) -> &'static [Rule] {
    match kind {
        FieldKind::Email => EMAIL_RULES,
        FieldKind::Password => PASSWORD_RULES,
        FieldKind::MobileNumber => MOBILE_RULES,
        FieldKind::Name => NAME_RULES,
        FieldKind::Required => REQUIRED_RULES,
        FieldKind::CardNumber => CARD_NUMBER_RULES,
        FieldKind::ExpiryDate => EXPIRY_DATE_RULES,
        FieldKind::Cvv => CVV_RULES,
        FieldKind::ZipCode => ZIP_CODE_RULES,
        FieldKind::Address => ADDRESS_RULES,
        FieldKind::City => CITY_RULES,
        FieldKind::State => STATE_RULES,
    }
}

// ── Patterns ──────────────────────────────────────────────────────────────────
//
// Digit classes are spelled `[0-9]`: `\d` in the regex crate is Unicode-aware
// and would accept Arabic-Indic or full-width digits.

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

static US_MOBILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^1?[2-9][0-9]{2}[2-9][0-9]{2}[0-9]{4}$")
        .expect("Failed to compile US mobile regex")
});

static INTERNATIONAL_MOBILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-9][0-9]{1,14}$").expect("Failed to compile international mobile regex")
});

static EXPIRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("Failed to compile expiry regex")
});

static CVV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("Failed to compile CVV regex"));

static ZIP_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("Failed to compile ZIP code regex")
});

/// Characters that satisfy the password "special character" rule.
pub const PASSWORD_SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Substrings that make a password "common", matched case-insensitively.
pub const WEAK_PASSWORD_FRAGMENTS: [&str; 5] = ["123456", "654321", "qwerty", "password", "admin"];

// ── Shared predicates ─────────────────────────────────────────────────────────

const REQUIRED: Message = Message::Labelled(" is required");

fn present(s: &Subject<'_>) -> bool {
    !s.trimmed().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// True if `value` has `min` or more consecutive characters of the class.
fn has_run(value: &str, min: usize, in_class: impl Fn(char) -> bool) -> bool {
    let mut run = 0;
    for c in value.chars() {
        run = if in_class(c) { run + 1 } else { 0 };
        if run >= min {
            return true;
        }
    }
    false
}

/// True if the same character appears `min` or more times in a row.
///
/// Line terminators never count, matching how `.` behaves in the patterns
/// the storefront shipped with.
fn has_repeated_char(value: &str, min: usize) -> bool {
    let mut previous = None;
    let mut run = 0;
    for c in value.chars() {
        if matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}') {
            previous = None;
            run = 0;
            continue;
        }
        run = if previous == Some(c) { run + 1 } else { 1 };
        previous = Some(c);
        if run >= min {
            return true;
        }
    }
    false
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || matches!(c, '-' | '\'' | '.')
}

fn mobile_digits(s: &Subject<'_>) -> String {
    s.raw().chars().filter(char::is_ascii_digit).collect()
}

fn card_digits(s: &Subject<'_>) -> String {
    s.raw().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Luhn (mod 10) check over a string of ASCII digits.
///
/// Walking from the rightmost digit, every second digit is doubled and 9 is
/// subtracted when the doubled value exceeds 9; the total must be a multiple
/// of 10. Empty input and non-digit characters fail.
pub fn luhn_checksum_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    let mut sum = 0;
    for (position, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if position % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

// ── Email ─────────────────────────────────────────────────────────────────────

pub static EMAIL_RULES: &[Rule] = &[
    Rule::new("email.required", present, REQUIRED),
    Rule::new(
        "email.format",
        |s| EMAIL_PATTERN.is_match(s.raw()),
        Message::Fixed("Please enter a valid email address"),
    ),
    Rule::new(
        "email.length",
        |s| char_len(s.raw()) <= 254,
        Message::Fixed("Email address is too long"),
    ),
];

// ── Password ──────────────────────────────────────────────────────────────────

const COMMON_PATTERNS: Message =
    Message::Fixed("Password contains common patterns and is not secure");

pub static PASSWORD_RULES: &[Rule] = &[
    Rule::new("password.required", present, REQUIRED),
    Rule::new(
        "password.min-length",
        |s| char_len(s.raw()) >= 8,
        Message::Fixed("Password must be at least 8 characters long"),
    ),
    Rule::new(
        "password.max-length",
        |s| char_len(s.raw()) <= 128,
        Message::Fixed("Password must be less than 128 characters"),
    ),
    Rule::new(
        "password.lowercase",
        |s| s.raw().chars().any(|c| c.is_ascii_lowercase()),
        Message::Fixed("Password must contain at least one lowercase letter"),
    ),
    Rule::new(
        "password.uppercase",
        |s| s.raw().chars().any(|c| c.is_ascii_uppercase()),
        Message::Fixed("Password must contain at least one uppercase letter"),
    ),
    Rule::new(
        "password.digit",
        |s| s.raw().chars().any(|c| c.is_ascii_digit()),
        Message::Fixed("Password must contain at least one number"),
    ),
    Rule::new(
        "password.special",
        |s| s.raw().chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c)),
        Message::Fixed("Password must contain at least one special character"),
    ),
    // Repeats are checked before weak fragments; both share one message.
    Rule::new(
        "password.repeated",
        |s| !has_repeated_char(s.raw(), 3),
        COMMON_PATTERNS,
    ),
    Rule::new(
        "password.common",
        |s| {
            let lowered = s.raw().to_ascii_lowercase();
            !WEAK_PASSWORD_FRAGMENTS
                .iter()
                .any(|fragment| lowered.contains(fragment))
        },
        COMMON_PATTERNS,
    ),
];

// ── Mobile number ─────────────────────────────────────────────────────────────

pub static MOBILE_RULES: &[Rule] = &[
    Rule::new("mobile.required", present, REQUIRED),
    Rule::new(
        "mobile.min-digits",
        |s| mobile_digits(s).len() >= 10,
        Message::Fixed("Mobile number must be at least 10 digits"),
    ),
    Rule::new(
        "mobile.max-digits",
        |s| mobile_digits(s).len() <= 15,
        Message::Fixed("Mobile number cannot exceed 15 digits"),
    ),
    Rule::new(
        "mobile.format",
        |s| {
            let digits = mobile_digits(s);
            US_MOBILE_PATTERN.is_match(&digits) || INTERNATIONAL_MOBILE_PATTERN.is_match(&digits)
        },
        Message::Fixed("Please enter a valid mobile number"),
    ),
    Rule::new(
        "mobile.repeated-digit",
        |s| {
            let digits = mobile_digits(s);
            let mut chars = digits.chars();
            match chars.next() {
                Some(first) => !chars.all(|c| c == first),
                None => true,
            }
        },
        Message::Fixed("Mobile number cannot be all the same digit"),
    ),
];

// ── Person name ───────────────────────────────────────────────────────────────

pub static NAME_RULES: &[Rule] = &[
    Rule::new("name.required", present, REQUIRED),
    Rule::new(
        "name.min-length",
        |s| char_len(s.trimmed()) >= 2,
        Message::Labelled(" must be at least 2 characters long"),
    ),
    Rule::new(
        "name.max-length",
        |s| char_len(s.trimmed()) <= 50,
        Message::Labelled(" cannot exceed 50 characters"),
    ),
    Rule::new(
        "name.characters",
        |s| s.trimmed().chars().all(is_name_char),
        Message::Labelled(" can only contain letters, spaces, hyphens, and apostrophes"),
    ),
    // Checked on the raw value, so leading or trailing double spaces count.
    Rule::new(
        "name.consecutive",
        |s| {
            !has_run(s.raw(), 2, char::is_whitespace)
                && !has_run(s.raw(), 2, |c| matches!(c, '-' | '\''))
        },
        Message::Labelled(" cannot contain consecutive spaces or special characters"),
    ),
];

// ── Generic required ──────────────────────────────────────────────────────────

pub static REQUIRED_RULES: &[Rule] = &[Rule::new("required.present", present, REQUIRED)];

// ── Card number ───────────────────────────────────────────────────────────────

pub static CARD_NUMBER_RULES: &[Rule] = &[
    Rule::new("card-number.required", present, REQUIRED),
    Rule::new(
        "card-number.format",
        |s| {
            let digits = card_digits(s);
            (13..=19).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
        },
        Message::Fixed("Card number must be 13-19 digits"),
    ),
    Rule::new(
        "card-number.checksum",
        |s| luhn_checksum_valid(&card_digits(s)),
        Message::Fixed("Invalid card number"),
    ),
];

// ── Expiry date ───────────────────────────────────────────────────────────────

fn not_expired(s: &Subject<'_>) -> bool {
    let Some((month, year)) = s.raw().split_once('/') else {
        return false;
    };
    let (Ok(month), Ok(year)) = (month.parse::<u32>(), year.parse::<u32>()) else {
        return false;
    };
    let today = s.today();
    let current_year = today.short_year();
    // The current month is still valid: cards expire at the end of it.
    !(year < current_year || (year == current_year && month < today.month()))
}

pub static EXPIRY_DATE_RULES: &[Rule] = &[
    Rule::new("expiry-date.required", present, REQUIRED),
    Rule::new(
        "expiry-date.format",
        |s| EXPIRY_PATTERN.is_match(s.raw()),
        Message::Fixed("Expiry date must be in MM/YY format"),
    ),
    Rule::new(
        "expiry-date.not-expired",
        not_expired,
        Message::Fixed("Card has expired"),
    ),
];

// ── CVV / ZIP ─────────────────────────────────────────────────────────────────

pub static CVV_RULES: &[Rule] = &[
    Rule::new("cvv.required", present, REQUIRED),
    Rule::new(
        "cvv.format",
        |s| CVV_PATTERN.is_match(s.raw()),
        Message::Fixed("CVV must be 3 or 4 digits"),
    ),
];

pub static ZIP_CODE_RULES: &[Rule] = &[
    Rule::new("zip-code.required", present, REQUIRED),
    Rule::new(
        "zip-code.format",
        |s| ZIP_CODE_PATTERN.is_match(s.raw()),
        Message::Fixed("Please enter a valid ZIP code (12345 or 12345-6789)"),
    ),
];

// ── Address / City / State ────────────────────────────────────────────────────

pub static ADDRESS_RULES: &[Rule] = &[
    Rule::new("address.required", present, REQUIRED),
    Rule::new(
        "address.min-length",
        |s| char_len(s.trimmed()) >= 5,
        Message::Fixed("Address must be at least 5 characters long"),
    ),
    Rule::new(
        "address.max-length",
        |s| char_len(s.trimmed()) <= 200,
        Message::Fixed("Address cannot exceed 200 characters"),
    ),
];

pub static CITY_RULES: &[Rule] = &[
    Rule::new("city.required", present, REQUIRED),
    Rule::new(
        "city.min-length",
        |s| char_len(s.trimmed()) >= 2,
        Message::Fixed("City name must be at least 2 characters long"),
    ),
    Rule::new(
        "city.max-length",
        |s| char_len(s.trimmed()) <= 50,
        Message::Fixed("City name cannot exceed 50 characters"),
    ),
    Rule::new(
        "city.characters",
        |s| s.trimmed().chars().all(is_name_char),
        Message::Fixed("City name can only contain letters, spaces, hyphens, and apostrophes"),
    ),
];

pub static STATE_RULES: &[Rule] = &[
    Rule::new("state.required", present, REQUIRED),
    Rule::new(
        "state.min-length",
        |s| char_len(s.trimmed()) >= 2,
        Message::Fixed("State must be at least 2 characters long"),
    ),
    Rule::new(
        "state.max-length",
        |s| char_len(s.trimmed()) <= 50,
        Message::Fixed("State cannot exceed 50 characters"),
    ),
];
