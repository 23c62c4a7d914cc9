// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for FreshCart validation.
//!
//! Pure rule evaluation with no I/O. The clock and the popup sink are ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: every validator is a synchronous function
//! - **No I/O**: only [`YearMonth::current`] reads the local clock
//! - **Value semantics**: results are created fresh and never cached
//! - **First failure wins**: rule lists and form schemas stop at the first
//!   failing entry
//!
// Public API - what the world sees
pub mod error;
pub mod field_state;
pub mod forms;
pub mod notice;
pub mod result;
pub mod rules;
pub mod validators;
pub mod value_objects;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use field_state::{FieldDisplay, FieldState};
pub use forms::{
    Check, Condition, FormKind, FormOutcome, FormReport, FormSchema, FormSubmission, Step,
};
pub use notice::{DEFAULT_NOTICE_DURATION_MS, Notice, Severity};
pub use result::ValidationResult;
pub use rules::{Message, Rule, luhn_checksum_valid};
pub use value_objects::{FieldKind, YearMonth};
