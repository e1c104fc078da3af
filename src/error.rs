//! Error types for metadata payload decoding.
//!
//! The record types in this crate are plain values: no operation on a
//! constructed record fails. The only failure mode at this layer is a
//! payload that cannot be parsed into the expected shape, surfaced
//! unchanged from the serialization layer.

use thiserror::Error;

/// Errors surfaced while decoding metadata service payloads.
///
/// # Examples
///
/// ```
/// use fstore_metadata::{Code, Error};
///
/// let err = serde_json::from_str::<Code>("{not json")
///     .map_err(Error::from)
///     .unwrap_err();
/// assert!(err.to_string().starts_with("malformed payload"));
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// The incoming text could not be parsed as the expected record
    /// shape, or a structural element had the wrong type.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
