//! Transient popup shown after a form submission.

use crate::domain::forms::{FormOutcome, FormReport};
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::fmt;

/// How long a notice stays up unless told otherwise.
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Success,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    severity: Severity,
    title: String,
    message: String,
    duration_ms: u64,
    auto_close: bool,
}

impl Notice {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
            duration_ms: DEFAULT_NOTICE_DURATION_MS,
            auto_close: true,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, message)
    }

    /// The popup a page shows for `report`: an error carrying the failing
    /// step's title, or the form's success message.
    pub fn from_report(report: &FormReport) -> Self {
        match report.outcome() {
            FormOutcome::Accepted { title, message } => Self::success(title, message),
            FormOutcome::Rejected { title, message, .. } => Self::error(title, message),
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Keep the notice up until dismissed.
    pub fn sticky(mut self) -> Self {
        self.auto_close = false;
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    /// When an auto-closing notice shown at `shown_at` goes away.
    pub fn expires_at(&self, shown_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if !self.auto_close {
            return None;
        }
        let millis = i64::try_from(self.duration_ms).unwrap_or(i64::MAX);
        shown_at.checked_add_signed(TimeDelta::try_milliseconds(millis)?)
    }

    pub fn is_expired(&self, shown_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.expires_at(shown_at).is_some_and(|at| now >= at)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
