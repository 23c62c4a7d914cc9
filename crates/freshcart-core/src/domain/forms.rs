//! Storefront form schemas.
//!
//! A form is an ordered list of [`Step`]s over a flat key/value
//! [`FormSubmission`]. Running a schema walks the steps in order and stops at
//! the first one that fails, exactly like a single field's rule list.
//!
//! Steps can be gated by a [`Condition`]: checkout only validates the card
//! fields while the payment method is `card`.

use crate::domain::{DomainError, FieldKind, YearMonth};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

const VALIDATION_ERROR: &str = "Validation Error";
const PAYMENT_VALIDATION_ERROR: &str = "Payment Validation Error";

// ── FormKind ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Login,
    AdminLogin,
    Registration,
    Checkout,
    Profile,
    PasswordChange,
    AdminProfile,
    StoreSettings,
}

impl FormKind {
    pub const ALL: [FormKind; 8] = [
        Self::Login,
        Self::AdminLogin,
        Self::Registration,
        Self::Checkout,
        Self::Profile,
        Self::PasswordChange,
        Self::AdminProfile,
        Self::StoreSettings,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::AdminLogin => "admin-login",
            Self::Registration => "registration",
            Self::Checkout => "checkout",
            Self::Profile => "profile",
            Self::PasswordChange => "password-change",
            Self::AdminProfile => "admin-profile",
            Self::StoreSettings => "store-settings",
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        match self {
            Self::Login => &LOGIN,
            Self::AdminLogin => &ADMIN_LOGIN,
            Self::Registration => &REGISTRATION,
            Self::Checkout => &CHECKOUT,
            Self::Profile => &PROFILE,
            Self::PasswordChange => &PASSWORD_CHANGE,
            Self::AdminProfile => &ADMIN_PROFILE,
            Self::StoreSettings => &STORE_SETTINGS,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "login" => Ok(Self::Login),
            "admin-login" => Ok(Self::AdminLogin),
            "registration" | "register" | "signup" => Ok(Self::Registration),
            "checkout" => Ok(Self::Checkout),
            "profile" => Ok(Self::Profile),
            "password-change" | "change-password" => Ok(Self::PasswordChange),
            "admin-profile" => Ok(Self::AdminProfile),
            "store-settings" | "settings" => Ok(Self::StoreSettings),
            other => Err(DomainError::UnknownForm(other.to_string())),
        }
    }
}

// ── Submission ────────────────────────────────────────────────────────────────

/// The values a user typed into a form, keyed by field.
///
/// Missing keys read as the empty string, the same as an untouched input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission {
    values: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay every entry of `other` on top of this submission.
    pub fn merge(&mut self, other: FormSubmission) {
        self.values.extend(other.values);
    }

    /// Split a `key=value` entry. Only the first `=` separates, so values
    /// may contain `=` themselves.
    pub fn parse_entry(entry: &str) -> Result<(String, String), DomainError> {
        match entry.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(DomainError::InvalidSubmissionEntry {
                entry: entry.to_string(),
            }),
        }
    }

    /// Build a submission from `key=value` entries. Later keys win.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .map(|entry| Self::parse_entry(entry.as_ref()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSubmission {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ── Steps ─────────────────────────────────────────────────────────────────────

/// Gate on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// Run only while `key` equals `value`. An absent or blank `key` reads as
    /// `default`.
    Equals {
        key: &'static str,
        value: &'static str,
        default: &'static str,
    },
}

impl Condition {
    pub fn holds(&self, submission: &FormSubmission) -> bool {
        match self {
            Self::Always => true,
            Self::Equals {
                key,
                value,
                default,
            } => {
                let actual = submission.get(key).trim();
                let actual = if actual.is_empty() { *default } else { actual };
                actual.eq_ignore_ascii_case(value)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Validate the value as `kind`, naming it `label` when given.
    Field {
        kind: FieldKind,
        label: Option<&'static str>,
    },
    /// The value must equal the value under `other`.
    Matches {
        other: &'static str,
        message: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    key: &'static str,
    check: Check,
    title: &'static str,
    condition: Condition,
}

impl Step {
    pub const fn field(key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            check: Check::Field { kind, label: None },
            title: VALIDATION_ERROR,
            condition: Condition::Always,
        }
    }

    pub const fn labelled(key: &'static str, kind: FieldKind, label: &'static str) -> Self {
        Self {
            key,
            check: Check::Field {
                kind,
                label: Some(label),
            },
            title: VALIDATION_ERROR,
            condition: Condition::Always,
        }
    }

    pub const fn required(key: &'static str, label: &'static str) -> Self {
        Self::labelled(key, FieldKind::Required, label)
    }

    pub const fn matches(key: &'static str, other: &'static str, message: &'static str) -> Self {
        Self {
            key,
            check: Check::Matches { other, message },
            title: VALIDATION_ERROR,
            condition: Condition::Always,
        }
    }

    pub const fn titled(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    pub const fn when(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }

    pub const fn check(&self) -> &Check {
        &self.check
    }

    pub const fn title(&self) -> &'static str {
        self.title
    }

    pub const fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Name shown for this step in reports.
    pub fn label(&self) -> &'static str {
        match self.check {
            Check::Field { kind, label } => label.unwrap_or(kind.default_label()),
            Check::Matches { .. } => self.key,
        }
    }

    /// The failure message, or `None` when the step passes.
    pub fn failure(&self, submission: &FormSubmission, today: YearMonth) -> Option<String> {
        let value = submission.get(self.key);
        match self.check {
            Check::Field { kind, label } => kind
                .validate(value, label, today)
                .failure()
                .map(str::to_string),
            Check::Matches { other, message } => {
                (value != submission.get(other)).then(|| message.to_string())
            }
        }
    }
}

// ── Schema ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    form: FormKind,
    steps: &'static [Step],
    success_title: &'static str,
    success_message: &'static str,
}

impl FormSchema {
    pub const fn form(&self) -> FormKind {
        self.form
    }

    pub const fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// Every key any step reads, in first-use order.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = Vec::new();
        for step in self.steps {
            let referenced = match step.check {
                Check::Matches { other, .. } => [Some(step.key), Some(other)],
                Check::Field { .. } => [Some(step.key), None],
            };
            let gate = match step.condition {
                Condition::Equals { key, .. } => Some(key),
                Condition::Always => None,
            };
            for key in referenced.into_iter().chain([gate]).flatten() {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
        keys
    }

    /// Walk the steps in order and stop at the first failure.
    pub fn run(&self, submission: &FormSubmission, today: YearMonth) -> FormReport {
        let mut steps_checked = 0;

        for step in self.steps {
            if !step.condition.holds(submission) {
                debug!(form = %self.form, key = step.key, "step skipped");
                continue;
            }
            steps_checked += 1;

            if let Some(message) = step.failure(submission, today) {
                debug!(form = %self.form, key = step.key, %message, "form rejected");
                return FormReport {
                    form: self.form,
                    steps_checked,
                    outcome: FormOutcome::Rejected {
                        key: step.key.to_string(),
                        label: step.label().to_string(),
                        title: step.title.to_string(),
                        message,
                    },
                };
            }
        }

        FormReport {
            form: self.form,
            steps_checked,
            outcome: FormOutcome::Accepted {
                title: self.success_title.to_string(),
                message: self.success_message.to_string(),
            },
        }
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FormOutcome {
    Accepted {
        title: String,
        message: String,
    },
    Rejected {
        key: String,
        label: String,
        title: String,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    form: FormKind,
    steps_checked: usize,
    outcome: FormOutcome,
}

impl FormReport {
    pub fn form(&self) -> FormKind {
        self.form
    }

    pub fn steps_checked(&self) -> usize {
        self.steps_checked
    }

    pub fn outcome(&self) -> &FormOutcome {
        &self.outcome
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, FormOutcome::Accepted { .. })
    }

    /// Key of the failing step, if any.
    pub fn rejected_key(&self) -> Option<&str> {
        match &self.outcome {
            FormOutcome::Rejected { key, .. } => Some(key),
            FormOutcome::Accepted { .. } => None,
        }
    }

    pub fn title(&self) -> &str {
        match &self.outcome {
            FormOutcome::Accepted { title, .. } | FormOutcome::Rejected { title, .. } => title,
        }
    }

    pub fn message(&self) -> &str {
        match &self.outcome {
            FormOutcome::Accepted { message, .. } | FormOutcome::Rejected { message, .. } => {
                message
            }
        }
    }
}

// ── Schemas ───────────────────────────────────────────────────────────────────

const PAY_BY_CARD: Condition = Condition::Equals {
    key: "payment_method",
    value: "card",
    default: "card",
};

static LOGIN: FormSchema = FormSchema {
    form: FormKind::Login,
    steps: &[
        Step::field("email", FieldKind::Email),
        Step::required("password", "Password"),
    ],
    success_title: "Success",
    success_message: "Login successful!",
};

static ADMIN_LOGIN: FormSchema = FormSchema {
    form: FormKind::AdminLogin,
    steps: &[
        Step::field("email", FieldKind::Email),
        Step::field("password", FieldKind::Password),
    ],
    success_title: "Success",
    success_message: "Admin login successful!",
};

static REGISTRATION: FormSchema = FormSchema {
    form: FormKind::Registration,
    steps: &[
        Step::labelled("first_name", FieldKind::Name, "First Name"),
        Step::labelled("last_name", FieldKind::Name, "Last Name"),
        Step::field("email", FieldKind::Email),
        Step::field("phone", FieldKind::MobileNumber),
        Step::field("address", FieldKind::Address),
        Step::field("password", FieldKind::Password),
        Step::matches("confirm_password", "password", "Passwords do not match"),
    ],
    success_title: "Registration Successful",
    success_message: "Your account has been created successfully!",
};

static CHECKOUT: FormSchema = FormSchema {
    form: FormKind::Checkout,
    steps: &[
        Step::required("first_name", "First Name"),
        Step::required("last_name", "Last Name"),
        Step::required("address", "Address"),
        Step::required("city", "City"),
        Step::required("state", "State"),
        Step::required("zip", "ZIP Code"),
        Step::required("phone", "Phone"),
        Step::required("email", "Email"),
        Step::field("email", FieldKind::Email),
        Step::field("phone", FieldKind::MobileNumber),
        Step::field("zip", FieldKind::ZipCode),
        Step::field("card_number", FieldKind::CardNumber)
            .titled(PAYMENT_VALIDATION_ERROR)
            .when(PAY_BY_CARD),
        Step::field("expiry", FieldKind::ExpiryDate)
            .titled(PAYMENT_VALIDATION_ERROR)
            .when(PAY_BY_CARD),
        Step::field("cvv", FieldKind::Cvv)
            .titled(PAYMENT_VALIDATION_ERROR)
            .when(PAY_BY_CARD),
        Step::required("card_name", "Name on Card")
            .titled(PAYMENT_VALIDATION_ERROR)
            .when(PAY_BY_CARD),
    ],
    success_title: "Order Placed",
    success_message: "Your order has been placed successfully!",
};

static PROFILE: FormSchema = FormSchema {
    form: FormKind::Profile,
    steps: &[
        Step::labelled("first_name", FieldKind::Name, "First Name"),
        Step::labelled("last_name", FieldKind::Name, "Last Name"),
        Step::field("email", FieldKind::Email),
        Step::field("phone", FieldKind::MobileNumber),
        Step::field("address", FieldKind::Address),
    ],
    success_title: "Success",
    success_message: "Profile updated successfully!",
};

static PASSWORD_CHANGE: FormSchema = FormSchema {
    form: FormKind::PasswordChange,
    steps: &[
        Step::required("current_password", "Current password"),
        Step::field("new_password", FieldKind::Password),
        Step::matches(
            "confirm_password",
            "new_password",
            "New passwords do not match",
        ),
    ],
    success_title: "Success",
    success_message: "Password changed successfully!",
};

static ADMIN_PROFILE: FormSchema = FormSchema {
    form: FormKind::AdminProfile,
    steps: &[
        Step::required("name", "Name"),
        Step::field("email", FieldKind::Email),
        Step::field("phone", FieldKind::MobileNumber),
    ],
    success_title: "Success",
    success_message: "Profile updated successfully!",
};

static STORE_SETTINGS: FormSchema = FormSchema {
    form: FormKind::StoreSettings,
    steps: &[
        Step::required("store_name", "Store Name"),
        Step::required("currency", "Currency"),
        Step::required("timezone", "Timezone"),
    ],
    success_title: "Success",
    success_message: "Store settings updated successfully!",
};
