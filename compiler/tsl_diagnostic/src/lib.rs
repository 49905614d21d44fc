//! Diagnostic system for the TSL compiler frontend.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (the context that makes it wrong)
//!
//! Diagnostics are collected in a [`DiagnosticQueue`], which applies the
//! error limit and deduplication from [`DiagnosticConfig`].

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{circular_reference, invalid_log_argument, Diagnostic, Label};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
