//! Error types.
//!
//! Compilation fails fast with a [`SchemaError`] (or the [`ResolutionError`]
//! it wraps). Evaluation never errors: a rejected value is reported as
//! [`ValidationErrors`], a non-empty list of [`ValidationError`]s.

mod compile_error;
mod validation_error;

pub use compile_error::{ResolutionError, SchemaError};
pub use validation_error::{ValidationError, ValidationErrors};
