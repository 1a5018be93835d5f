//! ISO 8601 Duration Grammar
//!
//! This module documents the duration syntax accepted by [`from_str`] and
//! produced by the [`Display`] implementation of [`Duration`].
//!
//! [`from_str`]: crate::from_str
//! [`Display`]: std::fmt::Display
//! [`Duration`]: crate::Duration
//!
//! # Syntax
//!
//! ```text
//! duration  = sign* 'P' date-part? ('T' time-part?)?
//! sign      = '+' | '-'
//! date-part = (number date-unit)+
//! date-unit = 'Y' | 'M' | 'W' | 'D'
//! time-part = (number time-unit)+
//! time-unit = 'H' | 'M' | 'S'
//! number    = [0-9]+
//! ```
//!
//! **Rules**:
//! - `P` (period) is mandatory and must be uppercase, as must every designator
//! - `M` means months before `T` and minutes after it
//! - A designator may appear at most once: `P1D2D` is rejected even though
//!   the values could be summed
//! - Weeks may be combined with any other designator (`P1W2D` is accepted)
//!   unless [`ParseOptions::strict_weeks`](crate::ParseOptions::strict_weeks)
//!   is set
//! - Numbers are unsigned decimal integers of any length up to `u64::MAX`;
//!   leading zeros are allowed and fractions are not
//! - Any `-` before the `P` makes the whole duration negative
//! - `PT` alone is accepted and means zero
//!
//! ## Examples
//!
//! | Text | Meaning |
//! |------|---------|
//! | `P3Y6M4DT12H30M5S` | 3 years, 6 months, 4 days, 12 hours, 30 minutes, 5 seconds |
//! | `PT15M` | 15 minutes |
//! | `P2W` | 2 weeks |
//! | `-P1D` | minus one day |
//! | `P0D` | zero |
//!
//! ```rust
//! use iso8601_duration::from_str;
//!
//! let duration = from_str("P1MT1M").unwrap();
//! assert_eq!(duration.months(), 1);
//! assert_eq!(duration.minutes(), 1);
//!
//! assert!(from_str("P1D2D").is_err());
//! assert!(from_str("p1d").is_err());
//! assert!(from_str("PT0.5S").is_err());
//! ```
//!
//! # Canonical Form
//!
//! Formatting always produces:
//!
//! ```text
//! '-'? 'P' (nY)? (nM)? (nW)? (nD)? ('T' (nH)? (nM)? (nS)?)?
//! ```
//!
//! - Components appear in the fixed order above and only when non-zero
//! - `T` appears only if hours, minutes or seconds are non-zero
//! - The zero duration is written `P0D`, never with a sign
//!
//! Parsing the canonical form of any [`Duration`](crate::Duration) yields an
//! equal value.
//!
//! ```rust
//! use iso8601_duration::{from_str, to_string, Duration};
//!
//! let duration = Duration::new().with_weeks(1).with_days(3).with_seconds(9);
//! let text = to_string(&duration);
//! assert_eq!(text, "P1W3DT9S");
//! assert_eq!(from_str(&text).unwrap(), duration);
//! ```
//!
//! # Errors
//!
//! | Input | Error | Column |
//! |-------|-------|--------|
//! | `` | `UnexpectedEof` | 0 |
//! | `P` | `UnexpectedEof` | 1 |
//! | `Z` | `MissingPDesignatorAtStart` | 1 |
//! | `P1` | `MissingDesignator` | 2 |
//! | `P1A` | `UnknownDesignator` | 3 |
//! | `P1YD` | `MissingNumber` | 4 |
//! | `P12D12D` | `DuplicateDesignator` | 7 |
//! | `Pé` | `UnexpectedNonAsciiRune` | 2 |
//!
//! # Conversions
//!
//! | Unit | Length used by `to_time_delta` |
//! |------|--------------------------------|
//! | year | 365.2425 days (31 556 952 s) |
//! | month | 30.436875 days (2 629 746 s) |
//! | week | 7 days |
//! | day | 86 400 s |
//!
//! [`Duration::apply`](crate::Duration::apply) does not use these averages:
//! it moves the timestamp by calendar months and days.
