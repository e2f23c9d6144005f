//! # jph-core
//!
//! Error definitions shared across the jpholiday workspace.
//!
//! Holiday queries themselves never fail; the error type covers the few
//! fallible edges of the library: building dates from raw parts or text, and
//! validating an overlay configuration before it is applied to a calendar.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
