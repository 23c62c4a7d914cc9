//! Infrastructure adapters for FreshCart validation.
//!
//! This crate implements the ports defined in
//! `freshcart-core::application::ports`, plus the file loader the CLI uses
//! to read form submissions. All I/O lives here.

pub mod clock;
pub mod notifier;
pub mod submission_loader;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use notifier::{LogNotifier, MemoryNotifier};
pub use submission_loader::{SubmissionFormat, SubmissionLoader};
