//! Application layer for FreshCart validation.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (FormService)
//! - **Ports**: Interface definitions (traits) for the clock and notices
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::FormService;

// Re-export port traits (for adapter implementation)
pub use ports::{Clock, Notifier};

pub use error::ApplicationError;
