//! Application services - orchestrate use cases.

pub mod form_service;

pub use form_service::FormService;
