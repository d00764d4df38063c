//! The three supported calendar systems and their leap-year rules.

use std::fmt;

use crate::date::Date;
use crate::error::CalendarError;
use crate::floor::floor_mod;
use crate::jdn;

/// Number of days in each month of a common year (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A proleptic solar calendar.
///
/// All three share month lengths and differ only in which years carry a
/// leap day:
///
/// | System          | Leap year when                                           |
/// |-----------------|----------------------------------------------------------|
/// | `Julian`        | divisible by 4                                           |
/// | `Gregorian`     | divisible by 4, centurial years only if divisible by 400 |
/// | `RevisedJulian` | divisible by 4, centurial years only if `year % 900` is 200 or 600 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalendarSystem {
    /// Proleptic Gregorian calendar.
    Gregorian,
    /// Proleptic Julian calendar.
    Julian,
    /// Revised Julian (Milanković) calendar.
    RevisedJulian,
}

impl CalendarSystem {
    /// Every calendar system, in declaration order.
    pub const ALL: [Self; 3] = [Self::Gregorian, Self::Julian, Self::RevisedJulian];

    /// Human readable name, e.g. `"Revised Julian"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gregorian => "Gregorian",
            Self::Julian => "Julian",
            Self::RevisedJulian => "Revised Julian",
        }
    }

    /// Largest year magnitude accepted by [`to_jdn`](Self::to_jdn).
    pub fn max_year(self) -> i64 {
        match self {
            Self::Gregorian => jdn::GREGORIAN_MAX_YEAR,
            Self::Julian => jdn::JULIAN_MAX_YEAR,
            Self::RevisedJulian => jdn::REVISED_JULIAN_MAX_YEAR,
        }
    }

    /// Returns whether `year` (astronomical numbering, so 0 is 1 BC) has a
    /// February 29.
    pub fn is_leap_year(self, year: i64) -> bool {
        if floor_mod(year, 4) != 0 {
            return false;
        }
        match self {
            Self::Julian => true,
            Self::Gregorian => floor_mod(year, 100) != 0 || floor_mod(year, 400) == 0,
            Self::RevisedJulian => {
                floor_mod(year, 100) != 0 || matches!(floor_mod(year, 900), 200 | 600)
            }
        }
    }

    /// Returns the number of days in `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn days_in_month(self, year: i64, month: u8) -> Result<u8, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if month == 2 && self.is_leap_year(year) {
            Ok(29)
        } else {
            Ok(DAYS_PER_MONTH[month as usize])
        }
    }

    /// Converts a date in this calendar to its Julian Day Number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOverflow`] if `|date.year()|` exceeds
    /// [`max_year`](Self::max_year).
    pub fn to_jdn(self, date: Date) -> Result<i64, CalendarError> {
        match self {
            Self::Gregorian => jdn::gregorian_to_jdn(date),
            Self::Julian => jdn::julian_to_jdn(date),
            Self::RevisedJulian => jdn::rev_julian_to_jdn(date),
        }
    }

    /// Converts a Julian Day Number to a date in this calendar.
    ///
    /// # Errors
    ///
    /// Only the Revised Julian inverse is bounded; it returns
    /// [`CalendarError::JdnOverflow`] above
    /// [`REVISED_JULIAN_MAX_JDN`](crate::REVISED_JULIAN_MAX_JDN).
    pub fn from_jdn(self, jdn: i64) -> Result<Date, CalendarError> {
        match self {
            Self::Gregorian => Ok(jdn::jdn_to_gregorian(jdn)),
            Self::Julian => Ok(jdn::jdn_to_julian(jdn)),
            Self::RevisedJulian => jdn::jdn_to_rev_julian(jdn),
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
