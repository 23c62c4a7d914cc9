//! Application ports (traits) for external dependencies.
//!
//! Adapters in `freshcart-adapters` and the CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Clock`: the month card expiry is compared against
//!   - `Notifier`: where submission notices go
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Clock, Notifier};
