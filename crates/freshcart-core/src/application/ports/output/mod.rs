//! Driven (output) ports - implemented by infrastructure.
//!
//! The `freshcart-adapters` crate provides implementations.

use crate::domain::{Notice, YearMonth};
use crate::error::FreshcartResult;

/// Port for the current calendar month.
///
/// Implemented by:
/// - `freshcart_adapters::clock::SystemClock` (production)
/// - `freshcart_adapters::clock::FixedClock` (tests, `--today`)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> YearMonth;
}

/// Port for showing a notice to the user.
///
/// Implemented by:
/// - `freshcart_adapters::notifier::MemoryNotifier` (testing)
/// - `freshcart_adapters::notifier::LogNotifier` (tracing events)
/// - the CLI's terminal output
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice) -> FreshcartResult<()>;
}
