//! Service layer for sandwich-map
//!
//! Centralizes business logic between HTTP/CLI handlers and storage/geocoding.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod bagel_service;
mod error;
mod price_input;
mod price_service;
#[cfg(test)]
mod price_service_tests;
#[cfg(test)]
mod test_support;

pub use bagel_service::BagelService;
pub use error::ServiceError;
pub use price_input::{FormSubmission, ADDRESS_NOT_FOUND_MESSAGE};
pub use price_service::{PriceService, SearchOutcome};
