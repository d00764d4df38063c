//! Base Pascha algorithms.

use std::fmt;

use pascha_calendar::{CalendarError, CalendarSystem, Date, GREGORIAN_MAX_YEAR, julian_to_gregorian};

use crate::error::ComputusError;

/// The ecclesiastical computus used to find Pascha.
///
/// Both variants return the date in Gregorian terms, whichever calendar
/// governs the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Computus {
    /// Julian paschalion: the Meeus Julian algorithm, converted to Gregorian.
    Julian,
    /// Gregorian paschalion: the Meeus/Gauss Gregorian algorithm.
    Gregorian,
}

impl Computus {
    /// Both methods, in declaration order.
    pub const ALL: [Self; 2] = [Self::Julian, Self::Gregorian];

    /// Returns the method name, e.g. `"Julian"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Julian => "Julian",
            Self::Gregorian => "Gregorian",
        }
    }

    /// Computes the Gregorian-calendar date of Pascha in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`ComputusError::Calendar`] with an overflow error when the
    /// year lies outside the calendar's supported range.
    pub fn pascha(self, year: i64) -> Result<Date, ComputusError> {
        match self {
            Self::Julian => julian_pascha(year),
            Self::Gregorian => gregorian_pascha(year),
        }
    }
}

impl fmt::Display for Computus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// The congruences below use truncating `/` and `%` exactly as the classical
// algorithms are stated; years 0 and -1 depend on it.

fn julian_pascha(year: i64) -> Result<Date, ComputusError> {
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let x = d + e + 114;

    // x is in 78..=149, so the month is 2..=4 and the day 1..=31.
    let julian = Date::new(year, (x / 31) as u8, (x % 31 + 1) as u8);
    Ok(julian_to_gregorian(julian)?)
}

fn gregorian_pascha(year: i64) -> Result<Date, ComputusError> {
    if year.unsigned_abs() > GREGORIAN_MAX_YEAR.unsigned_abs() {
        return Err(CalendarError::YearOverflow {
            calendar: CalendarSystem::Gregorian,
            year,
        }
        .into());
    }

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let x = h + l - 7 * m + 114;

    Ok(Date::new(year, (x / 31) as u8, (x % 31 + 1) as u8))
}
