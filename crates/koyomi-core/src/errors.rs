//! Error types for koyomi.
//!
//! Calendar computation itself cannot fail; the only errors are caller errors
//! (a month outside 1–12, a year outside the supported range, or an invalid
//! event payload).  They are collected in a single `thiserror`-derived enum.

use thiserror::Error;

/// The top-level error type used throughout koyomi.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Month number outside 1–12.
    #[error("month {0} out of range [1, 12]")]
    InvalidMonth(u32),

    /// Year outside the range the calendar supports.
    #[error("year {year} out of range [{min}, {max}]")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// A request payload failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Shorthand `Result` type used throughout koyomi.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use koyomi_core::{ensure, errors::Error};
/// fn non_empty(s: &str) -> koyomi_core::errors::Result<&str> {
///     ensure!(!s.is_empty(), "value must not be empty");
///     Ok(s)
/// }
/// assert!(non_empty("a").is_ok());
/// assert_eq!(
///     non_empty(""),
///     Err(Error::InvalidInput("value must not be empty".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}
