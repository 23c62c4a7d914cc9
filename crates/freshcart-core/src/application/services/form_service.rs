//! Form Service - validation use cases.
//!
//! Validates single values and whole form submissions against the month the
//! injected clock reports, and hands submission notices to the notifier.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Clock, Notifier},
    domain::{FieldKind, FormKind, FormReport, FormSubmission, Notice, ValidationResult},
    error::FreshcartResult,
};

/// Main validation service.
pub struct FormService {
    clock: Box<dyn Clock>,
    notifier: Box<dyn Notifier>,
    notice_duration_ms: u64,
}

impl FormService {
    /// Create a new form service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use freshcart_core::application::{FormService, ports::*};
    /// # let clock: Box<dyn Clock> = unimplemented!();
    /// # let notifier: Box<dyn Notifier> = unimplemented!();
    ///
    /// let service = FormService::new(
    ///     clock,    // impl Clock
    ///     notifier, // impl Notifier
    /// );
    /// ```
    pub fn new(clock: Box<dyn Clock>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            clock,
            notifier,
            notice_duration_ms: crate::domain::DEFAULT_NOTICE_DURATION_MS,
        }
    }

    /// How long emitted notices stay up.
    pub fn with_notice_duration_ms(mut self, duration_ms: u64) -> Self {
        self.notice_duration_ms = duration_ms;
        self
    }

    /// Validate one value as `kind`.
    #[instrument(skip(self, kind, value), fields(kind = %kind))]
    pub fn check(&self, kind: FieldKind, value: &str, label: Option<&str>) -> ValidationResult {
        let result = kind.validate(value, label, self.clock.today());
        debug!(valid = result.is_valid(), "value checked");
        result
    }

    /// Run `form` against `submission` and notify the outcome.
    ///
    /// A rejected submission is still `Ok`: the report says what failed.
    /// Only a notifier failure is an error.
    #[instrument(skip(self, form, submission), fields(form = %form, fields = submission.len()))]
    pub fn submit(&self, form: FormKind, submission: &FormSubmission) -> FreshcartResult<FormReport> {
        let today = self.clock.today();
        let report = form.schema().run(submission, today);

        match report.rejected_key() {
            Some(key) => info!(key, message = report.message(), "submission rejected"),
            None => info!(steps = report.steps_checked(), "submission accepted"),
        }

        let notice = Notice::from_report(&report).with_duration_ms(self.notice_duration_ms);
        self.notifier.notify(&notice)?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::output::{MockClock, MockNotifier};
    use crate::domain::{Severity, YearMonth};
    use crate::error::FreshcartError;
    use mockall::predicate::*;

    fn march_clock() -> Box<MockClock> {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .returning(|| YearMonth::new(2025, 3).unwrap());
        Box::new(clock)
    }

    #[test]
    fn check_uses_clock_month() {
        let service = FormService::new(march_clock(), Box::new(MockNotifier::new()));

        assert!(service.check(FieldKind::ExpiryDate, "03/25", None).is_valid());
        assert_eq!(
            service.check(FieldKind::ExpiryDate, "02/25", None).message(),
            "Card has expired"
        );
    }

    #[test]
    fn check_never_notifies() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().never();
        let service = FormService::new(march_clock(), Box::new(notifier));

        let result = service.check(FieldKind::Name, "B", Some("Last Name"));
        assert_eq!(result.message(), "Last Name must be at least 2 characters long");
    }

    #[test]
    fn submit_notifies_rejection() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(function(|n: &Notice| {
                n.severity() == Severity::Error
                    && n.title() == "Validation Error"
                    && n.message() == "Email address is required"
                    && n.duration_ms() == 2_000
            }))
            .times(1)
            .returning(|_| Ok(()));

        let service =
            FormService::new(march_clock(), Box::new(notifier)).with_notice_duration_ms(2_000);
        let report = service
            .submit(FormKind::Login, &FormSubmission::new())
            .unwrap();

        assert_eq!(report.rejected_key(), Some("email"));
    }

    #[test]
    fn submit_notifies_success() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.severity() == Severity::Success && n.message() == "Login successful!")
            .times(1)
            .returning(|_| Ok(()));

        let service = FormService::new(march_clock(), Box::new(notifier));
        let submission = FormSubmission::new()
            .with("email", "user@example.com")
            .with("password", "anything");

        assert!(service.submit(FormKind::Login, &submission).unwrap().is_accepted());
    }

    #[test]
    fn notifier_failure_propagates() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().returning(|_| {
            Err(ApplicationError::NotifierFailed {
                reason: "terminal closed".into(),
            }
            .into())
        });

        let service = FormService::new(march_clock(), Box::new(notifier));
        let err = service
            .submit(FormKind::Login, &FormSubmission::new())
            .unwrap_err();

        assert!(matches!(
            err,
            FreshcartError::Application(ApplicationError::NotifierFailed { .. })
        ));
    }
}
