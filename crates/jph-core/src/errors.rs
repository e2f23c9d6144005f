//! Error types for the jpholiday crates.
//!
//! A single `thiserror`-derived enum is shared by every crate in the
//! workspace. The [`ensure!`] and [`fail!`] macros are shorthands for the
//! common "check or bail out" patterns.

use thiserror::Error;

/// The error type used throughout jpholiday.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A (year, month, day) triple that is not a real calendar date.
    #[error("date error: {0}")]
    Date(String),

    /// Text that could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout jpholiday.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use jph_core::{ensure, errors::Error};
/// fn non_empty(name: &str) -> jph_core::errors::Result<&str> {
///     ensure!(!name.is_empty(), "name must not be empty");
///     Ok(name)
/// }
/// assert!(non_empty("元日").is_ok());
/// assert_eq!(
///     non_empty(""),
///     Err(Error::InvalidArgument("name must not be empty".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Parse(...))` immediately.
///
/// # Example
/// ```
/// use jph_core::{fail, errors::Error};
/// fn always_err() -> jph_core::errors::Result<()> {
///     fail!("unexpected token {:?}", "2026/01/01");
/// }
/// assert!(matches!(always_err(), Err(Error::Parse(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Parse(format!($($msg)*)))
    };
}
