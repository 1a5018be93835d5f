//! # iso8601_duration
//!
//! A parser and canonical serializer for ISO 8601 durations such as
//! `P3Y6M4DT12H30M5S`, with conversions to and from [`chrono`] types.
//!
//! ## Key Features
//!
//! - **Finite-state parser**: a single forward pass with no backtracking
//! - **Exact errors**: every failure reports its kind and the column it
//!   occurred at
//! - **Canonical output**: formatting a [`Duration`] and parsing it back
//!   always yields the same value
//! - **Overflow safe**: numbers and conversions are checked against 64-bit
//!   limits instead of wrapping
//! - **Serde Compatible**: durations serialize as their canonical string
//!
//! ## Quick Start
//!
//! ```rust
//! use iso8601_duration::{from_str, Duration};
//!
//! let duration = from_str("PT1H30M12S").unwrap();
//! assert_eq!(duration, Duration::new().with_hours(1).with_minutes(30).with_seconds(12));
//! assert_eq!(duration.to_string(), "PT1H30M12S");
//! ```
//!
//! ### Elapsed Time and Timestamps
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use iso8601_duration::{from_str, from_time_delta};
//!
//! let duration = from_str("PT1H30M12S").unwrap();
//! assert_eq!(
//!     duration.to_time_delta(),
//!     Some(TimeDelta::hours(1) + TimeDelta::minutes(30) + TimeDelta::seconds(12))
//! );
//!
//! let epoch = Utc.timestamp_opt(0, 0).unwrap();
//! let later = duration.apply(epoch).unwrap();
//! assert_eq!(later.format("%H:%M:%S").to_string(), "01:30:12");
//!
//! let back = from_time_delta(TimeDelta::minutes(12) + TimeDelta::seconds(43));
//! assert_eq!(back.to_string(), "PT12M43S");
//! ```
//!
//! ### Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use iso8601_duration::Duration;
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Arrival {
//!     #[serde(rename = "in")]
//!     within: Duration,
//! }
//!
//! let arrival = Arrival { within: Duration::new().with_minutes(12).with_seconds(43) };
//! let json = serde_json::to_string(&arrival).unwrap();
//! assert_eq!(json, r#"{"in":"PT12M43S"}"#);
//! assert_eq!(serde_json::from_str::<Arrival>(&json).unwrap(), arrival);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API
//! - No global state; all types are plain `Send + Sync` values
//!
//! ## Grammar
//!
//! See the [`grammar`] module for the accepted syntax and the canonical form.

pub mod duration;
pub mod error;
pub mod grammar;
pub mod options;
pub mod parser;

pub use duration::{Duration, Unit};
pub use error::{Error, ErrorKind, Result};
pub use options::ParseOptions;
pub use parser::Parser;

use chrono::TimeDelta;
use std::io;

/// Parses an ISO 8601 duration string.
///
/// # Examples
///
/// ```rust
/// use iso8601_duration::{from_str, ErrorKind};
///
/// let duration = from_str("P3Y6M4DT12H30M5S").unwrap();
/// assert_eq!(duration.days(), 4);
///
/// let err = from_str("P1YD").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MissingNumber);
/// assert_eq!(err.column(), 4);
/// ```
///
/// # Errors
///
/// Returns the first grammar error, positioned at the offending column.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Duration> {
    Parser::new().parse_str(s)
}

/// Parses an ISO 8601 duration string with custom options.
///
/// # Examples
///
/// ```rust
/// use iso8601_duration::{from_str_with_options, ParseOptions};
///
/// let options = ParseOptions::strict();
/// assert!(from_str_with_options("P15W", &options).is_ok());
/// assert!(from_str_with_options("P15W2D", &options).is_err());
/// ```
///
/// # Errors
///
/// Returns the first grammar error, including the errors the options
/// enable.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: &ParseOptions) -> Result<Duration> {
    Parser::with_options(options.clone()).parse_str(s)
}

/// Parses an ISO 8601 duration from bytes.
///
/// # Examples
///
/// ```rust
/// use iso8601_duration::from_slice;
///
/// let duration = from_slice(b"P2W").unwrap();
/// assert_eq!(duration.weeks(), 2);
/// ```
///
/// # Errors
///
/// Returns [`ErrorKind::UnexpectedNonAsciiRune`] for any byte outside the
/// ASCII range, or the first grammar error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Duration> {
    Parser::new().parse_slice(v)
}

/// Parses an ISO 8601 duration from an I/O stream, reading it to the end.
///
/// # Examples
///
/// ```rust
/// use iso8601_duration::from_reader;
/// use std::io::Cursor;
///
/// let duration = from_reader(Cursor::new("-PT90S")).unwrap();
/// assert!(duration.is_negative());
/// assert_eq!(duration.seconds(), 90);
/// ```
///
/// # Errors
///
/// Returns [`ErrorKind::UnexpectedReaderError`] if reading fails, or the
/// first grammar error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<Duration>
where
    R: io::Read,
{
    Parser::new().parse_reader(reader)
}

/// Formats a duration in canonical form.
///
/// Equivalent to `duration.to_string()`.
///
/// # Examples
///
/// ```rust
/// use iso8601_duration::{to_string, Duration};
///
/// assert_eq!(to_string(&Duration::ZERO), "P0D");
/// assert_eq!(to_string(&Duration::new().with_years(15).with_months(3)), "P15Y3M");
/// ```
#[must_use]
pub fn to_string(duration: &Duration) -> String {
    duration.to_string()
}

/// Decomposes an elapsed time into a duration.
///
/// See [`Duration::from_time_delta`].
#[must_use]
pub fn from_time_delta(delta: TimeDelta) -> Duration {
    Duration::from_time_delta(delta)
}
