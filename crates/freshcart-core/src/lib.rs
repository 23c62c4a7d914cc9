//! FreshCart Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the FreshCart
//! storefront's field validation engine, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         freshcart-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (FormService)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Clock, Notifier)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    freshcart-adapters (Infrastructure)  │
//! │  (SystemClock, MemoryNotifier, loader)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (validators, rules, forms, notices)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use freshcart_core::prelude::*;
//!
//! let march = YearMonth::new(2025, 3).unwrap();
//! let submission = FormSubmission::new()
//!     .with("first_name", "Al")
//!     .with("last_name", "B");
//!
//! let report = FormKind::Registration.schema().run(&submission, march);
//! assert_eq!(report.message(), "Last Name must be at least 2 characters long");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FormService,
        ports::{Clock, Notifier},
    };
    pub use crate::domain::validators::*;
    pub use crate::domain::{
        FieldDisplay, FieldKind, FieldState, FormKind, FormReport, FormSubmission, Notice,
        Severity, ValidationResult, YearMonth,
    };
    pub use crate::error::{FreshcartError, FreshcartResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
