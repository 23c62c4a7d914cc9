//! Headless model of a validated text input.
//!
//! The input re-validates while the user types once it has been touched (or
//! as soon as it holds text), but only shows feedback after the first blur.

use crate::domain::{FieldKind, ValidationResult, YearMonth};
use serde::Serialize;

/// What the input should render next to the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum FieldDisplay {
    /// Never blurred; no feedback yet.
    Untouched,
    /// Touched, but nothing to flag either way (e.g. an empty optional value).
    Neutral,
    Valid,
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    kind: FieldKind,
    label: Option<String>,
    today: YearMonth,
    value: String,
    touched: bool,
    result: Option<ValidationResult>,
}

impl FieldState {
    pub fn new(kind: FieldKind, today: YearMonth) -> Self {
        Self {
            kind,
            label: None,
            today,
            value: String::new(),
            touched: false,
            result: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// The last validation, if one has run.
    pub fn result(&self) -> Option<&ValidationResult> {
        self.result.as_ref()
    }

    /// Store a new value typed by the user.
    pub fn change(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if self.touched || !self.value.is_empty() {
            self.revalidate();
        }
    }

    /// The input lost focus.
    pub fn blur(&mut self) {
        self.touched = true;
        self.revalidate();
    }

    pub fn display(&self) -> FieldDisplay {
        if !self.touched {
            return FieldDisplay::Untouched;
        }
        match &self.result {
            Some(result) if !result.is_valid() => FieldDisplay::Invalid(result.message().to_string()),
            Some(_) if !self.value.is_empty() => FieldDisplay::Valid,
            _ => FieldDisplay::Neutral,
        }
    }

    fn revalidate(&mut self) {
        self.result = Some(
            self.kind
                .validate(&self.value, self.label.as_deref(), self.today),
        );
    }
}
