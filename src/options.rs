//! Configuration options for duration parsing.
//!
//! The default options accept the permissive canonical grammar: any
//! combination of designators is allowed as long as none repeats, and
//! numbers may have any number of digits up to the 64-bit limit.
//!
//! Older revisions of the grammar were stricter. [`ParseOptions`] can
//! restore those rules when compatibility with them is required.
//!
//! ## Examples
//!
//! ```rust
//! use iso8601_duration::{from_str_with_options, ErrorKind, ParseOptions};
//!
//! let options = ParseOptions::new().with_strict_weeks(true);
//! let err = from_str_with_options("P15W2D", &options).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::WeeksMixedWithOtherDesignators);
//!
//! let options = ParseOptions::new().with_max_digits(2);
//! let err = from_str_with_options("P111Y", &options).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TooManyDigitsForDesignator);
//! ```

/// Options controlling how strictly durations are parsed.
///
/// # Examples
///
/// ```rust
/// use iso8601_duration::ParseOptions;
///
/// // Permissive canonical grammar
/// let options = ParseOptions::new();
/// assert!(!options.strict_weeks);
/// assert_eq!(options.max_digits, None);
///
/// // Historical grammar
/// let options = ParseOptions::strict();
/// assert!(options.strict_weeks);
/// assert_eq!(options.max_digits, Some(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject a week value combined with any other designator.
    pub strict_weeks: bool,
    /// Maximum number of digits before a designator.
    pub max_digits: Option<usize>,
}

impl ParseOptions {
    /// Creates the default, permissive options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options matching the historical grammar: weeks stand alone
    /// and numbers have at most two digits.
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            strict_weeks: true,
            max_digits: Some(2),
        }
    }

    /// Sets whether weeks must stand alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iso8601_duration::ParseOptions;
    ///
    /// let options = ParseOptions::new().with_strict_weeks(true);
    /// assert!(options.strict_weeks);
    /// ```
    #[must_use]
    pub fn with_strict_weeks(mut self, strict_weeks: bool) -> Self {
        self.strict_weeks = strict_weeks;
        self
    }

    /// Limits the number of digits allowed before each designator.
    #[must_use]
    pub fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = Some(max_digits);
        self
    }
}
