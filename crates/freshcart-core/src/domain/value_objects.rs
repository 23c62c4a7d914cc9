//! Domain value objects: FieldKind and YearMonth.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! `FieldKind` holds NO rule logic. The ordered rule lists live in
//! `rules.rs`; this file only defines the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Kinds
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `default_label` and `FromStr` arms here
//! 3. Add a rule list in `rules.rs` and hook it into `rules_for`
//! 4. Done

use crate::domain::error::DomainError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── FieldKind ─────────────────────────────────────────────────────────────────

/// A semantic field type with its own rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Email,
    Password,
    MobileNumber,
    Name,
    Required,
    CardNumber,
    ExpiryDate,
    Cvv,
    ZipCode,
    Address,
    City,
    State,
}

impl FieldKind {
    /// Every kind, in the order `freshcart rules` lists them.
    pub const ALL: [FieldKind; 12] = [
        Self::Email,
        Self::Password,
        Self::MobileNumber,
        Self::Name,
        Self::Required,
        Self::CardNumber,
        Self::ExpiryDate,
        Self::Cvv,
        Self::ZipCode,
        Self::Address,
        Self::City,
        Self::State,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::MobileNumber => "mobile",
            Self::Name => "name",
            Self::Required => "required",
            Self::CardNumber => "card-number",
            Self::ExpiryDate => "expiry-date",
            Self::Cvv => "cvv",
            Self::ZipCode => "zip-code",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
        }
    }

    /// Field name used in "<Field> is required" when the caller gives none.
    pub const fn default_label(&self) -> &'static str {
        match self {
            Self::Email => "Email address",
            Self::Password => "Password",
            Self::MobileNumber => "Mobile number",
            Self::Name => "Name",
            Self::Required => "This field",
            Self::CardNumber => "Card number",
            Self::ExpiryDate => "Expiry date",
            Self::Cvv => "CVV",
            Self::ZipCode => "ZIP code",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
        }
    }

    /// Whether a caller label shows up beyond the "is required" message.
    ///
    /// Only person names and generic required fields are parameterized; the
    /// other kinds keep fixed wording for their format messages.
    pub const fn takes_label(&self) -> bool {
        matches!(self, Self::Name | Self::Required)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "mobile" | "mobile-number" | "phone" => Ok(Self::MobileNumber),
            "name" => Ok(Self::Name),
            "required" => Ok(Self::Required),
            "card-number" | "card" => Ok(Self::CardNumber),
            "expiry-date" | "expiry" => Ok(Self::ExpiryDate),
            "cvv" => Ok(Self::Cvv),
            "zip-code" | "zip" => Ok(Self::ZipCode),
            "address" => Ok(Self::Address),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            other => Err(DomainError::UnknownFieldKind(other.to_string())),
        }
    }
}

// ── YearMonth ─────────────────────────────────────────────────────────────────

/// A calendar month, the granularity card expiry works at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// January 1970, for rule lists that never look at the month.
    pub const UNIX_EPOCH: YearMonth = YearMonth {
        year: 1970,
        month: 1,
    };

    /// Build a month; `month` is 1-based.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidYearMonth {
                input: format!("{year:04}-{month:02}"),
                reason: "month must be between 1 and 12".into(),
            });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time.
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The year as printed on a card (`2025` → `25`).
    pub const fn short_year(&self) -> u32 {
        self.year.rem_euclid(100) as u32
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = DomainError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidYearMonth {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| invalid("expected YYYY-MM"))?;
        if year.len() != 4 {
            return Err(invalid("year must have four digits"));
        }
        let year: i32 = year.parse().map_err(|_| invalid("year is not a number"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| invalid("month is not a number"))?;

        Self::new(year, month).map_err(|_| invalid("month must be between 1 and 12"))
    }
}
