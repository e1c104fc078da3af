//! Wire types for feature-store code provenance metadata.
//!
//! This crate implements the code-tracking slice of the feature-store
//! metadata API: the [`Code`] record that captures which application
//! executed against a feature group and when, the [`RunType`]
//! enumeration of execution environments, and the paginated response
//! envelope the service wraps collections in.
//!
//! # Overview
//!
//! A `Code` record ties one code execution to a feature group: the
//! execution time in epoch milliseconds, the feature-group commit it
//! corresponds to, the platform-assigned application id, and optionally
//! the executed source text. All fields are independently optional.
//!
//! Decoding is tolerant by default. Unknown keys are ignored so newer
//! servers keep working with older clients, `null` and omitted fields
//! are equivalent, and integer fields accept both quoted and unquoted
//! forms. Responses arrive either as a bare record or inside the shared
//! `href`/`count`/`items` envelope; [`RestResponse`] decodes both,
//! keyed on the presence of `count`.
//!
//! # Module Organization
//!
//! - [`types`] - Wire types (Code, RunType, the response envelope)
//! - [`error`] - Decode error type and crate-wide `Result` alias

pub mod error;
pub mod types;

// Re-exports for ergonomic access
pub use error::{Error, Result};
pub use types::*;
