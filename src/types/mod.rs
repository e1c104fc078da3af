//! Wire-format types for feature-store code metadata.
//!
//! The entity lives in [`code`], the shared response envelope in
//! [`envelope`]. Everything here is plain data with serde
//! implementations; no module performs I/O.

pub mod code;
pub mod envelope;
pub(crate) mod lenient;

pub use code::{Code, RunType};
pub use envelope::{Listing, RestResponse};
