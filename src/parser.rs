//! ISO 8601 duration parsing.
//!
//! This module provides the [`Parser`] that reads duration strings into
//! [`Duration`] values.
//!
//! ## Overview
//!
//! - **Single pass**: one character per step, no lookahead and no
//!   backtracking
//! - **Finite-state machine**: [`transition`] is a pure function from the
//!   current [`State`] and input character to the next state and an
//!   [`Action`]; the [`Parser`] applies the actions
//! - **Positioned errors**: every failure carries the 1-based column of the
//!   offending character
//! - **Incremental input**: characters can be fed one at a time, so the same
//!   machine serves strings, byte slices and readers
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use iso8601_duration::from_str;
//!
//! let duration = from_str("P3Y6M4DT12H30M5S").unwrap();
//! assert_eq!(duration.years(), 3);
//! assert_eq!(duration.seconds(), 5);
//! ```
//!
//! Feeding characters by hand:
//!
//! ```rust
//! use iso8601_duration::Parser;
//!
//! let mut parser = Parser::new();
//! for ch in "PT15M".chars() {
//!     parser.feed(ch).unwrap();
//! }
//! let duration = parser.finish().unwrap();
//! assert_eq!(duration.minutes(), 15);
//! ```

use crate::duration::Unit;
use crate::{Duration, Error, ErrorKind, ParseOptions, Result};
use std::io::{self, Read};

/// States of the duration parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Before the `P`; signs are accepted here
    Start,
    /// Seen `P`
    P,
    /// Reading digits of a date component
    Number,
    /// Seen one of `Y`, `M`, `W`, `D`
    Designator,
    /// Seen `T`
    T,
    /// Reading digits of a time component
    TNumber,
    /// Seen one of `H`, `M`, `S`
    TDesignator,
    /// Input accepted
    Fin,
}

/// Side effect of a single transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// No side effect
    None,
    /// Set the sign flag
    Negate,
    /// Append a decimal digit to the pending number
    Digit(u8),
    /// Assign the pending number to a component
    Close(Unit),
}

/// Computes the next state for one input character.
///
/// # Examples
///
/// ```rust
/// use iso8601_duration::parser::{transition, Action, State};
/// use iso8601_duration::{ErrorKind, Unit};
///
/// assert_eq!(transition(State::Start, 'P'), Ok((State::P, Action::None)));
/// assert_eq!(
///     transition(State::Number, 'M'),
///     Ok((State::Designator, Action::Close(Unit::Months)))
/// );
/// assert_eq!(
///     transition(State::TNumber, 'M'),
///     Ok((State::TDesignator, Action::Close(Unit::Minutes)))
/// );
/// assert_eq!(transition(State::P, 'Y'), Err(ErrorKind::MissingNumber));
/// ```
///
/// # Errors
///
/// Returns the kind of error the character causes in `state`.
pub fn transition(state: State, ch: char) -> std::result::Result<(State, Action), ErrorKind> {
    if let Some(digit) = ch.to_digit(10) {
        return match state {
            State::Start => Err(ErrorKind::MissingPDesignatorAtStart),
            State::P | State::Designator | State::Number => {
                Ok((State::Number, Action::Digit(digit as u8)))
            }
            State::T | State::TDesignator | State::TNumber => {
                Ok((State::TNumber, Action::Digit(digit as u8)))
            }
            // Fin accepts no further input.
            State::Fin => Err(ErrorKind::UnknownDesignator),
        };
    }

    match state {
        State::Start => match ch {
            '-' => Ok((State::Start, Action::Negate)),
            '+' => Ok((State::Start, Action::None)),
            'P' => Ok((State::P, Action::None)),
            _ => Err(ErrorKind::MissingPDesignatorAtStart),
        },
        State::P | State::Designator => match ch {
            'T' => Ok((State::T, Action::None)),
            _ => Err(ErrorKind::MissingNumber),
        },
        State::Number => Unit::from_date_designator(ch)
            .map(|unit| (State::Designator, Action::Close(unit)))
            .ok_or(ErrorKind::UnknownDesignator),
        State::T | State::TDesignator => Err(ErrorKind::MissingNumber),
        State::TNumber => Unit::from_time_designator(ch)
            .map(|unit| (State::TDesignator, Action::Close(unit)))
            .ok_or(ErrorKind::UnknownDesignator),
        State::Fin => Err(ErrorKind::UnknownDesignator),
    }
}

/// Computes the state reached when the input ends in `state`.
///
/// # Errors
///
/// - [`ErrorKind::UnexpectedEof`] if no `P` has been read yet or nothing
///   followed it
/// - [`ErrorKind::MissingDesignator`] if the input ends in a number
pub fn end_of_input(state: State) -> std::result::Result<State, ErrorKind> {
    match state {
        State::Start | State::P => Err(ErrorKind::UnexpectedEof),
        State::Number | State::TNumber => Err(ErrorKind::MissingDesignator),
        State::Designator | State::T | State::TDesignator | State::Fin => Ok(State::Fin),
    }
}

/// The duration parser.
///
/// Created via [`Parser::new`] or [`Parser::with_options`], fed with
/// [`Parser::feed`] and completed with [`Parser::finish`].
#[derive(Clone, Debug)]
pub struct Parser {
    options: ParseOptions,
    state: State,
    column: usize,
    pending: Option<u64>,
    pending_digits: usize,
    seen: u8,
    duration: Duration,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser for the permissive default grammar.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Creates a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Parser {
            options,
            state: State::Start,
            column: 0,
            pending: None,
            pending_digits: 0,
            seen: 0,
            duration: Duration::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the number of characters consumed so far.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Consumes one character.
    ///
    /// # Errors
    ///
    /// Returns an error positioned at this character if it is not valid in
    /// the current state. The parser must not be used after an error.
    pub fn feed(&mut self, ch: char) -> Result<()> {
        self.column += 1;
        if !ch.is_ascii() {
            return Err(self.error(ErrorKind::UnexpectedNonAsciiRune));
        }

        let (next, action) = transition(self.state, ch).map_err(|kind| self.error(kind))?;
        match action {
            Action::None => {}
            Action::Negate => self.duration = self.duration.with_negative(true),
            Action::Digit(digit) => self.push_digit(digit)?,
            Action::Close(unit) => self.close(unit)?,
        }
        self.state = next;
        Ok(())
    }

    /// Ends the input and returns the parsed duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the input stopped before a complete duration.
    pub fn finish(self) -> Result<Duration> {
        end_of_input(self.state).map_err(|kind| self.error(kind))?;
        Ok(self.duration)
    }

    /// Parses a whole string.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn parse_str(mut self, input: &str) -> Result<Duration> {
        for ch in input.chars() {
            self.feed(ch)?;
        }
        self.finish()
    }

    /// Parses a byte slice. Any byte outside the ASCII range is rejected.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn parse_slice(mut self, input: &[u8]) -> Result<Duration> {
        for &byte in input {
            self.feed(char::from(byte))?;
        }
        self.finish()
    }

    /// Parses bytes pulled from a reader until it is exhausted.
    ///
    /// The reader is wrapped in an [`io::BufReader`], so unbuffered sources
    /// are not read one byte per call.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnexpectedReaderError`] if reading fails, or the
    /// first grammar error encountered.
    pub fn parse_reader<R: io::Read>(mut self, reader: R) -> Result<Duration> {
        for byte in io::BufReader::new(reader).bytes() {
            let byte = byte.map_err(|e| {
                log::debug!("failed to read duration input: {}", e);
                Error::new(ErrorKind::UnexpectedReaderError, self.column)
            })?;
            self.feed(char::from(byte))?;
        }
        self.finish()
    }

    fn push_digit(&mut self, digit: u8) -> Result<()> {
        self.pending_digits += 1;
        if let Some(max) = self.options.max_digits {
            if self.pending_digits > max {
                return Err(self.error(ErrorKind::TooManyDigitsForDesignator));
            }
        }

        let value = self
            .pending
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|value| value.checked_add(u64::from(digit)))
            .ok_or_else(|| self.error(ErrorKind::DesignatorNumberTooLarge))?;
        self.pending = Some(value);
        Ok(())
    }

    fn close(&mut self, unit: Unit) -> Result<()> {
        let value = self
            .pending
            .take()
            .ok_or_else(|| self.error(ErrorKind::MissingNumber))?;
        self.pending_digits = 0;

        if self.seen & unit.bit() != 0 {
            return Err(self.error(ErrorKind::DuplicateDesignator));
        }
        if self.options.strict_weeks {
            let weeks = Unit::Weeks.bit();
            let mixed = if unit == Unit::Weeks {
                self.seen != 0
            } else {
                self.seen & weeks != 0
            };
            if mixed {
                return Err(self.error(ErrorKind::WeeksMixedWithOtherDesignators));
            }
        }

        log::trace!("{:?} = {} at column {}", unit, value, self.column);
        self.seen |= unit.bit();
        self.duration = self.duration.with(unit, value);
        Ok(())
    }

    fn error(&self, kind: ErrorKind) -> Error {
        log::debug!("rejected duration input at column {}: {}", self.column, kind);
        Error::new(kind, self.column)
    }
}
