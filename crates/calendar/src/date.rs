//! Calendar-agnostic date triple.

use std::fmt;

use crate::error::CalendarError;
use crate::system::CalendarSystem;

/// A year/month/day triple with astronomical year numbering.
///
/// Year 0 is 1 BC and year -1 is 2 BC. A `Date` carries no calendar of its
/// own: the same triple names different days in the Gregorian and Julian
/// calendars, and the caller decides which system it belongs to.
///
/// [`Date::new`] performs no validation. Use [`Date::checked`] when the
/// month and day come from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i64,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a date without checking month or day bounds.
    pub const fn new(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date, checking that it exists in `system`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// given month and year in `system`.
    pub fn checked(
        system: CalendarSystem,
        year: i64,
        month: u8,
        day: u8,
    ) -> Result<Self, CalendarError> {
        let max_day = system.days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub const fn year(self) -> i64 {
        self.year
    }

    /// Returns the month (1..=12 for well-formed dates).
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Moves the date by `days` (negative moves backwards), carrying across
    /// month and year boundaries according to `system`.
    ///
    /// # Errors
    ///
    /// Propagates the overflow errors of [`CalendarSystem::to_jdn`] and
    /// [`CalendarSystem::from_jdn`], and returns
    /// [`CalendarError::JdnOverflow`] if the shifted day number does not fit.
    pub fn add_days(self, system: CalendarSystem, days: i64) -> Result<Self, CalendarError> {
        let jdn = system.to_jdn(self)?;
        let shifted = jdn.checked_add(days).ok_or(CalendarError::JdnOverflow {
            calendar: system,
            jdn,
        })?;
        system.from_jdn(shifted)
    }
}

impl fmt::Display for Date {
    /// Formats as `YYYY-MM-DD`, with a leading `-` for negative years.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month,
            self.day
        )
    }
}
