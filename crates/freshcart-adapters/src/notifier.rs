//! Notifier adapters.

use std::sync::{Arc, RwLock};

use freshcart_core::{
    application::{ApplicationError, ports::Notifier},
    domain::{Notice, Severity},
    error::FreshcartResult,
};
use tracing::{info, warn};

/// Records every notice, for tests and batch summaries.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    inner: Arc<RwLock<Vec<Notice>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices so far, oldest first.
    pub fn notices(&self) -> FreshcartResult<Vec<Notice>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::NoticeLockError)?;
        Ok(inner.clone())
    }

    pub fn last(&self) -> FreshcartResult<Option<Notice>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::NoticeLockError)?;
        Ok(inner.last().cloned())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) -> FreshcartResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::NoticeLockError)?;
        inner.clear();
        Ok(())
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: &Notice) -> FreshcartResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::NoticeLockError)?;
        inner.push(notice.clone());
        Ok(())
    }
}

/// Emits notices as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) -> FreshcartResult<()> {
        match notice.severity() {
            Severity::Error | Severity::Warning => warn!(
                severity = %notice.severity(),
                title = notice.title(),
                message = notice.message(),
                "notice"
            ),
            Severity::Success | Severity::Info => info!(
                severity = %notice.severity(),
                title = notice.title(),
                message = notice.message(),
                "notice"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify(&Notice::error("Validation Error", "CVV is required")).unwrap();
        notifier.notify(&Notice::success("Success", "Saved")).unwrap();

        let notices = notifier.notices().unwrap();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].message(), "CVV is required");
        assert_eq!(notifier.last().unwrap().unwrap().title(), "Success");
    }

    #[test]
    fn clones_share_the_log() {
        let notifier = MemoryNotifier::new();
        let handle = notifier.clone();
        notifier.notify(&Notice::success("a", "b")).unwrap();
        assert_eq!(handle.len(), 1);

        handle.clear().unwrap();
        assert!(notifier.is_empty());
    }

    #[test]
    fn log_notifier_never_fails() {
        assert!(LogNotifier::new().notify(&Notice::error("x", "y")).is_ok());
    }
}
