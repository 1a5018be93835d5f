//! The ISO 8601 [`Duration`] value.
//!
//! A [`Duration`] holds seven whole-unit magnitudes (years, months, weeks,
//! days, hours, minutes and seconds) and a single sign flag that applies to
//! the whole value.
//!
//! ## Overview
//!
//! - **Canonical text**: [`Display`](std::fmt::Display) writes the unique
//!   canonical form, which the parser reads back to an equal value
//! - **Elapsed time**: [`Duration::to_time_delta`] and
//!   [`Duration::from_time_delta`] convert to and from [`chrono::TimeDelta`]
//!   using average calendar lengths for years and months
//! - **Timestamps**: [`Duration::apply`] shifts a [`chrono::DateTime`] with
//!   calendar-aware month and day arithmetic
//! - **Serde**: serializes as its canonical string
//!
//! ## Examples
//!
//! ```rust
//! use iso8601_duration::Duration;
//!
//! let duration = Duration::new().with_hours(1).with_minutes(30).with_seconds(12);
//! assert_eq!(duration.to_string(), "PT1H30M12S");
//!
//! let parsed: Duration = "PT1H30M12S".parse().unwrap();
//! assert_eq!(parsed, duration);
//! ```

use chrono::{DateTime, Days, Months, TimeDelta, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;
// 365.2425 days
const SECONDS_PER_YEAR: u64 = 31_556_952;
// 30.436875 days
const SECONDS_PER_MONTH: u64 = 2_629_746;

/// One of the seven duration components, named after its designator.
///
/// # Examples
///
/// ```rust
/// use iso8601_duration::Unit;
///
/// assert_eq!(Unit::Months.designator(), 'M');
/// assert_eq!(Unit::Minutes.designator(), 'M');
/// assert!(Unit::Minutes.is_time());
/// assert!(!Unit::Months.is_time());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// All units, largest first, in canonical output order.
    pub const ALL: [Unit; 7] = [
        Unit::Years,
        Unit::Months,
        Unit::Weeks,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    /// Returns the designator letter written after this unit's number.
    #[must_use]
    pub const fn designator(self) -> char {
        match self {
            Unit::Years => 'Y',
            Unit::Months => 'M',
            Unit::Weeks => 'W',
            Unit::Days => 'D',
            Unit::Hours => 'H',
            Unit::Minutes => 'M',
            Unit::Seconds => 'S',
        }
    }

    /// Returns true for units that follow the `T` separator.
    #[must_use]
    pub const fn is_time(self) -> bool {
        matches!(self, Unit::Hours | Unit::Minutes | Unit::Seconds)
    }

    /// Length of one unit in seconds. Years and months use average
    /// Gregorian lengths.
    #[must_use]
    pub const fn approx_seconds(self) -> u64 {
        match self {
            Unit::Years => SECONDS_PER_YEAR,
            Unit::Months => SECONDS_PER_MONTH,
            Unit::Weeks => SECONDS_PER_WEEK,
            Unit::Days => SECONDS_PER_DAY,
            Unit::Hours => SECONDS_PER_HOUR,
            Unit::Minutes => SECONDS_PER_MINUTE,
            Unit::Seconds => 1,
        }
    }

    pub(crate) fn from_date_designator(ch: char) -> Option<Unit> {
        match ch {
            'Y' => Some(Unit::Years),
            'M' => Some(Unit::Months),
            'W' => Some(Unit::Weeks),
            'D' => Some(Unit::Days),
            _ => None,
        }
    }

    pub(crate) fn from_time_designator(ch: char) -> Option<Unit> {
        match ch {
            'H' => Some(Unit::Hours),
            'M' => Some(Unit::Minutes),
            'S' => Some(Unit::Seconds),
            _ => None,
        }
    }

    pub(crate) const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// An ISO 8601 duration such as `P3Y6M4DT12H30M5S`.
///
/// All components are non-negative whole numbers; the sign is carried by a
/// single flag. A zero duration has no sign: it never reports
/// [`is_negative`](Duration::is_negative), compares equal to
/// [`Duration::ZERO`] and always formats as `P0D`.
///
/// Values are built with the `with_*` methods, by parsing, or from a
/// [`TimeDelta`]. Every builder returns a new value.
///
/// # Examples
///
/// ```rust
/// use iso8601_duration::Duration;
///
/// let duration = Duration::new().with_years(3).with_months(6).with_days(4);
/// assert_eq!(duration.to_string(), "P3Y6M4D");
/// assert_eq!((-duration).to_string(), "-P3Y6M4D");
/// assert_eq!(Duration::ZERO.to_string(), "P0D");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Duration {
    negative: bool,
    years: u64,
    months: u64,
    weeks: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl Duration {
    /// The zero duration, formatted as `P0D`.
    pub const ZERO: Duration = Duration {
        negative: false,
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Creates a zero duration.
    #[must_use]
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Sets the number of years.
    #[must_use]
    pub const fn with_years(mut self, years: u64) -> Self {
        self.years = years;
        self
    }

    /// Sets the number of months.
    #[must_use]
    pub const fn with_months(mut self, months: u64) -> Self {
        self.months = months;
        self
    }

    /// Sets the number of weeks.
    #[must_use]
    pub const fn with_weeks(mut self, weeks: u64) -> Self {
        self.weeks = weeks;
        self
    }

    /// Sets the number of days.
    #[must_use]
    pub const fn with_days(mut self, days: u64) -> Self {
        self.days = days;
        self
    }

    /// Sets the number of hours.
    #[must_use]
    pub const fn with_hours(mut self, hours: u64) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the number of minutes.
    #[must_use]
    pub const fn with_minutes(mut self, minutes: u64) -> Self {
        self.minutes = minutes;
        self
    }

    /// Sets the number of seconds.
    #[must_use]
    pub const fn with_seconds(mut self, seconds: u64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Sets the sign flag.
    #[must_use]
    pub const fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    /// Sets the component for `unit`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iso8601_duration::{Duration, Unit};
    ///
    /// let duration = Duration::new().with(Unit::Weeks, 2);
    /// assert_eq!(duration.get(Unit::Weeks), 2);
    /// assert_eq!(duration.to_string(), "P2W");
    /// ```
    #[must_use]
    pub const fn with(self, unit: Unit, value: u64) -> Self {
        match unit {
            Unit::Years => self.with_years(value),
            Unit::Months => self.with_months(value),
            Unit::Weeks => self.with_weeks(value),
            Unit::Days => self.with_days(value),
            Unit::Hours => self.with_hours(value),
            Unit::Minutes => self.with_minutes(value),
            Unit::Seconds => self.with_seconds(value),
        }
    }

    /// Returns the component for `unit`.
    #[must_use]
    pub const fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Weeks => self.weeks,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    /// Returns the number of years.
    #[must_use]
    pub const fn years(&self) -> u64 {
        self.years
    }

    /// Returns the number of months.
    #[must_use]
    pub const fn months(&self) -> u64 {
        self.months
    }

    /// Returns the number of weeks.
    #[must_use]
    pub const fn weeks(&self) -> u64 {
        self.weeks
    }

    /// Returns the number of days.
    #[must_use]
    pub const fn days(&self) -> u64 {
        self.days
    }

    /// Returns the number of hours.
    #[must_use]
    pub const fn hours(&self) -> u64 {
        self.hours
    }

    /// Returns the number of minutes.
    #[must_use]
    pub const fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Returns the number of seconds.
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Returns true if every component is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
    }

    /// Returns true if the duration is negative. Always false for zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Returns the same magnitude with the opposite sign.
    #[must_use]
    pub const fn negated(self) -> Self {
        let negative = !self.negative;
        self.with_negative(negative)
    }

    const fn has_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0
    }

    /// Converts to an elapsed time.
    ///
    /// Years count as 365.2425 days and months as 30.436875 days; all other
    /// units are exact. Returns `None` if the result does not fit in a
    /// [`TimeDelta`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::TimeDelta;
    /// use iso8601_duration::Duration;
    ///
    /// let duration: Duration = "-PT1H30M".parse().unwrap();
    /// assert_eq!(duration.to_time_delta(), Some(TimeDelta::minutes(-90)));
    /// ```
    #[must_use]
    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        let seconds = Unit::ALL.iter().try_fold(0u64, |total, &unit| {
            self.get(unit)
                .checked_mul(unit.approx_seconds())?
                .checked_add(total)
        })?;
        let delta = TimeDelta::try_seconds(i64::try_from(seconds).ok()?)?;
        Some(if self.is_negative() { -delta } else { delta })
    }

    /// Decomposes an elapsed time into whole units.
    ///
    /// Years, then months, weeks, days, hours and minutes are extracted
    /// greedily with truncation; the remainder becomes seconds and any
    /// sub-second part is dropped. The sign of `delta` becomes the sign
    /// flag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::TimeDelta;
    /// use iso8601_duration::Duration;
    ///
    /// let delta = TimeDelta::minutes(12) + TimeDelta::seconds(43);
    /// assert_eq!(Duration::from_time_delta(delta).to_string(), "PT12M43S");
    /// assert_eq!(Duration::from_time_delta(-delta).to_string(), "-PT12M43S");
    /// ```
    #[must_use]
    pub fn from_time_delta(delta: TimeDelta) -> Self {
        let mut remaining = delta.num_seconds().unsigned_abs();
        let mut duration = Duration::new().with_negative(delta < TimeDelta::zero());
        for unit in Unit::ALL {
            let length = unit.approx_seconds();
            duration = duration.with(unit, remaining / length);
            remaining %= length;
        }
        duration
    }

    /// Shifts a timestamp by this duration.
    ///
    /// Years and months are applied as calendar months and weeks and days
    /// as calendar days, so month lengths and leap years are respected (a
    /// day that does not exist in the target month is clamped to the
    /// month's last day). Hours, minutes and seconds are then applied as a
    /// fixed offset.
    ///
    /// The sign flag only affects the fixed offset: the calendar part is
    /// always added, so `-P1MT2H` moves one calendar month forward and then
    /// two hours back.
    ///
    /// Returns `None` if any step overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use iso8601_duration::Duration;
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    /// let duration: Duration = "P1MT1H".parse().unwrap();
    /// let end = duration.apply(start).unwrap();
    /// assert_eq!(end, Utc.with_ymd_and_hms(2024, 2, 29, 1, 0, 0).unwrap());
    /// ```
    #[must_use]
    pub fn apply<Tz: TimeZone>(&self, datetime: DateTime<Tz>) -> Option<DateTime<Tz>> {
        let months = self.years.checked_mul(12)?.checked_add(self.months)?;
        let months = Months::new(u32::try_from(months).ok()?);
        let days = Days::new(self.weeks.checked_mul(7)?.checked_add(self.days)?);
        let offset = [Unit::Hours, Unit::Minutes, Unit::Seconds]
            .iter()
            .try_fold(0u64, |total, &unit| {
                self.get(unit)
                    .checked_mul(unit.approx_seconds())?
                    .checked_add(total)
            })?;
        let offset = TimeDelta::try_seconds(i64::try_from(offset).ok()?)?;

        let datetime = datetime.checked_add_months(months)?.checked_add_days(days)?;
        if self.is_negative() {
            datetime.checked_sub_signed(offset)
        } else {
            datetime.checked_add_signed(offset)
        }
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.is_negative() == other.is_negative()
            && Unit::ALL
                .iter()
                .all(|&unit| self.get(unit) == other.get(unit))
    }
}

impl Eq for Duration {}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_negative().hash(state);
        for unit in Unit::ALL {
            self.get(unit).hash(state);
        }
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

/// Writes the canonical form
/// `['-'] 'P' [nY] [nM] [nW] [nD] ['T' [nH] [nM] [nS]]`.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // At least one number and designator must be present.
        if self.is_zero() {
            return f.write_str("P0D");
        }

        if self.negative {
            f.write_char('-')?;
        }
        f.write_char('P')?;

        let mut separated = false;
        for unit in Unit::ALL {
            let value = self.get(unit);
            if value == 0 {
                continue;
            }
            if unit.is_time() && !separated {
                f.write_char('T')?;
                separated = true;
            }
            write!(f, "{}{}", value, unit.designator())?;
        }
        debug_assert_eq!(separated, self.has_time());
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        crate::from_str(s)
    }
}

impl From<TimeDelta> for Duration {
    fn from(delta: TimeDelta) -> Self {
        Duration::from_time_delta(delta)
    }
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct DurationVisitor;

        impl<'de> Visitor<'de> for DurationVisitor {
            type Value = Duration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an ISO 8601 duration string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                crate::from_str(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}
