//! Error types for the liturgical calendar crates.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Precondition checks are
//! written with the [`ensure!`](crate::ensure) macro.
//!
//! A lookup that simply finds nothing (no feast on a date, no readings for a
//! week) is not an error; those APIs return `None` or an empty list.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid date or date arithmetic outside the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Malformed textual input, e.g. a date string that is not `YYYY-MM-DD`.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Error::Precondition` if the condition is false.
///
/// # Example
/// ```
/// use lit_core::{ensure, errors::Error};
/// fn month(m: u8) -> lit_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(12).is_ok());
/// assert_eq!(
///     month(13),
///     Err(Error::Precondition("month 13 out of range [1, 12]".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_day(day: u8) -> Result<u8> {
        crate::ensure!(day >= 1, "day must be positive, got {day}");
        Ok(day)
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(checked_day(3), Ok(3));
        let err = checked_day(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "precondition not satisfied: day must be positive, got 0"
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Date("year 0 out of range".into()).to_string(),
            "date error: year 0 out of range"
        );
        assert_eq!(
            Error::Parse("expected YYYY-MM-DD".into()).to_string(),
            "parse error: expected YYYY-MM-DD"
        );
    }
}
