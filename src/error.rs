//! Error types for ISO 8601 duration parsing.
//!
//! Every parse failure is reported as a single [`Error`] carrying an
//! [`ErrorKind`] and the 1-based column of the character that caused it.
//! There is no recovery and no partial result: the first error aborts the
//! parse.
//!
//! ## Columns
//!
//! - Errors raised while consuming a character point at that character.
//! - Errors raised at end of input report the number of characters consumed,
//!   so the empty string fails at column 0 and `"P"` fails at column 1.
//!
//! ## Examples
//!
//! ```rust
//! use iso8601_duration::{from_str, ErrorKind};
//!
//! let err = from_str("P1A").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnknownDesignator);
//! assert_eq!(err.column(), 3);
//! assert!(err.to_string().contains("at column 3"));
//! ```

use thiserror::Error;

/// The category of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Input ended where more characters were required
    #[error("unexpected end of input in duration string")]
    UnexpectedEof,

    /// The underlying reader failed before the input ended
    #[error("failed to read the next byte of the duration string")]
    UnexpectedReaderError,

    /// A character outside the ASCII range was found
    #[error("unexpected non-ASCII character in duration string")]
    UnexpectedNonAsciiRune,

    /// A number was not followed by a unit designator
    #[error("missing unit designator")]
    MissingDesignator,

    /// A number was followed by a letter that is not a designator
    #[error("unknown designator, expected Y, M, W or D, or after T one of H, M or S")]
    UnknownDesignator,

    /// The same designator appeared twice
    #[error("duplicate designator")]
    DuplicateDesignator,

    /// A designator (or `T`) was not preceded by a number
    #[error("missing number before unit designator")]
    MissingNumber,

    /// A number does not fit into 64 bits
    #[error("number before designator is too large")]
    DesignatorNumberTooLarge,

    /// The string does not start with `P` (after an optional sign)
    #[error("missing P designator at the start of the duration string")]
    MissingPDesignatorAtStart,

    /// A number has more digits than [`ParseOptions::max_digits`] allows
    ///
    /// [`ParseOptions::max_digits`]: crate::ParseOptions::max_digits
    #[error("too many digits before designator")]
    TooManyDigitsForDesignator,

    /// A week value was combined with other designators under
    /// [`ParseOptions::strict_weeks`]
    ///
    /// [`ParseOptions::strict_weeks`]: crate::ParseOptions::strict_weeks
    #[error("weeks cannot be combined with other designators")]
    WeeksMixedWithOtherDesignators,
}

/// A positioned parse error.
///
/// # Examples
///
/// ```rust
/// use iso8601_duration::{Error, ErrorKind};
///
/// let err = Error::new(ErrorKind::MissingNumber, 4);
/// assert_eq!(
///     err.to_string(),
///     "missing number before unit designator, at column 4"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{kind}, at column {column}")]
pub struct Error {
    kind: ErrorKind,
    column: usize,
}

impl Error {
    /// Creates an error of the given kind at a 1-based column.
    #[must_use]
    pub const fn new(kind: ErrorKind, column: usize) -> Self {
        Error { kind, column }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the column the error was detected at.
    ///
    /// Column 0 only occurs for empty input.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_column() {
        let err = Error::new(ErrorKind::DuplicateDesignator, 7);
        assert_eq!(err.to_string(), "duplicate designator, at column 7");
    }

    #[test]
    fn test_accessors() {
        let err = Error::new(ErrorKind::UnexpectedEof, 0);
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert_eq!(err.column(), 0);
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&Error::new(ErrorKind::MissingDesignator, 2));
    }
}
