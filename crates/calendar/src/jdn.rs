//! Julian Day Number conversion for the three calendar systems.
//!
//! Every calendar is handled the same way: the year is rewritten to start on
//! March 1 (so the leap day is the last day of the year), whole leap cycles
//! are split off with floor division, and the remaining days are counted
//! with integer approximations of the mean year and month lengths.
//!
//! | System          | Leap cycle | Days per cycle | Epoch offset |
//! |-----------------|-----------:|---------------:|-------------:|
//! | Gregorian       |  400 years |        146 097 |    1 721 120 |
//! | Julian          |    4 years |          1 461 |    1 721 118 |
//! | Revised Julian  |  900 years |        328 718 |    1 721 120 |
//!
//! Splitting off whole cycles first keeps intermediate products small, so
//! the only limits are the documented year bounds (where the final day
//! count reaches `i64::MAX`) and the Revised Julian inverse bound.

use crate::date::Date;
use crate::error::CalendarError;
use crate::floor::{floor_div, floor_mod};
use crate::system::CalendarSystem;

/// Largest Gregorian year magnitude whose JDN fits in an `i64`.
pub const GREGORIAN_MAX_YEAR: i64 = 25_252_734_927_761_841;

/// Largest Julian year magnitude whose JDN fits in an `i64`.
pub const JULIAN_MAX_YEAR: i64 = 25_252_216_391_110_347;

/// Largest Revised Julian year magnitude whose JDN fits in an `i64`.
pub const REVISED_JULIAN_MAX_YEAR: i64 = 25_252_754_133_231_976;

/// Largest JDN accepted by [`jdn_to_rev_julian`].
pub const REVISED_JULIAN_MAX_JDN: i64 = 2_305_837_553_489_651_559;

const GREGORIAN_EPOCH: i64 = 1_721_120;
const JULIAN_EPOCH: i64 = 1_721_118;
const REVISED_JULIAN_EPOCH: i64 = 1_721_120;

const GREGORIAN_CYCLE_YEARS: i64 = 400;
const JULIAN_CYCLE_YEARS: i64 = 4;
const REVISED_JULIAN_CYCLE_YEARS: i64 = 900;

const GREGORIAN_CYCLE_DAYS: i64 = 146_097;
const JULIAN_CYCLE_DAYS: i64 = 1_461;
const REVISED_JULIAN_CYCLE_DAYS: i64 = 328_718;

/// Converts a proleptic Gregorian date to its JDN.
///
/// # Errors
///
/// Returns [`CalendarError::YearOverflow`] if `|year|` exceeds
/// [`GREGORIAN_MAX_YEAR`].
pub fn gregorian_to_jdn(date: Date) -> Result<i64, CalendarError> {
    let system = CalendarSystem::Gregorian;
    check_year(system, date.year())?;

    let cycles = floor_div(date.year(), GREGORIAN_CYCLE_YEARS);
    let (y, m) = march_based(floor_mod(date.year(), GREGORIAN_CYCLE_YEARS), date.month());
    let days = 365 * y + floor_div(y, 4) - floor_div(y, 100) + floor_div(y, 400)
        + days_before_month(m)
        + i64::from(date.day());

    add_cycles(system, date.year(), days + GREGORIAN_EPOCH, cycles, GREGORIAN_CYCLE_DAYS)
}

/// Converts a proleptic Julian date to its JDN.
///
/// # Errors
///
/// Returns [`CalendarError::YearOverflow`] if `|year|` exceeds
/// [`JULIAN_MAX_YEAR`].
pub fn julian_to_jdn(date: Date) -> Result<i64, CalendarError> {
    let system = CalendarSystem::Julian;
    check_year(system, date.year())?;

    let cycles = floor_div(date.year(), JULIAN_CYCLE_YEARS);
    let (y, m) = march_based(floor_mod(date.year(), JULIAN_CYCLE_YEARS), date.month());
    let days = 365 * y + floor_div(y, 4) + days_before_month(m) + i64::from(date.day());

    add_cycles(system, date.year(), days + JULIAN_EPOCH, cycles, JULIAN_CYCLE_DAYS)
}

/// Converts a Revised Julian date to its JDN.
///
/// The leap-day count is the Julian one, minus one per centurial year, plus
/// one per centurial year congruent to 200 and to 600 modulo 900.
///
/// # Errors
///
/// Returns [`CalendarError::YearOverflow`] if `|year|` exceeds
/// [`REVISED_JULIAN_MAX_YEAR`].
pub fn rev_julian_to_jdn(date: Date) -> Result<i64, CalendarError> {
    let system = CalendarSystem::RevisedJulian;
    check_year(system, date.year())?;

    let cycles = floor_div(date.year(), REVISED_JULIAN_CYCLE_YEARS);
    let (y, m) = march_based(
        floor_mod(date.year(), REVISED_JULIAN_CYCLE_YEARS),
        date.month(),
    );
    let leap_days = floor_div(y, 4) - floor_div(y, 100)
        + floor_div(y + 300, 900)
        + floor_div(y + 700, 900);
    let days = 365 * y + leap_days + days_before_month(m) + i64::from(date.day());

    add_cycles(
        system,
        date.year(),
        days + REVISED_JULIAN_EPOCH,
        cycles,
        REVISED_JULIAN_CYCLE_DAYS,
    )
}

/// Converts a JDN to a proleptic Gregorian date. Defined for every `i64`.
pub fn jdn_to_gregorian(jdn: i64) -> Date {
    let (cycles, day) = split_cycles(jdn, GREGORIAN_EPOCH, GREGORIAN_CYCLE_DAYS);

    // Re-insert the three skipped centurial leap days so the Julian
    // year/month resolution below applies unchanged.
    let centuries = floor_div(4 * day + 3, GREGORIAN_CYCLE_DAYS);
    let day = day + centuries - floor_div(centuries, 4);

    let (year, month, day) = resolve_year_month_day(day);
    Date::new(year + GREGORIAN_CYCLE_YEARS * cycles, month, day)
}

/// Converts a JDN to a proleptic Julian date. Defined for every `i64`.
pub fn jdn_to_julian(jdn: i64) -> Date {
    let (cycles, day) = split_cycles(jdn, JULIAN_EPOCH, JULIAN_CYCLE_DAYS);
    let (year, month, day) = resolve_year_month_day(day);
    Date::new(year + JULIAN_CYCLE_YEARS * cycles, month, day)
}

/// Converts a JDN to a Revised Julian date.
///
/// # Errors
///
/// Returns [`CalendarError::JdnOverflow`] if `jdn` exceeds
/// [`REVISED_JULIAN_MAX_JDN`].
pub fn jdn_to_rev_julian(jdn: i64) -> Result<Date, CalendarError> {
    if jdn > REVISED_JULIAN_MAX_JDN {
        return Err(CalendarError::JdnOverflow {
            calendar: CalendarSystem::RevisedJulian,
            jdn,
        });
    }

    let (cycles, day) = split_cycles(jdn, REVISED_JULIAN_EPOCH, REVISED_JULIAN_CYCLE_DAYS);

    // Centurial leap days skipped so far, less those retained at 200 and
    // 600 modulo 900.
    let centuries = floor_div(9 * day + 2, REVISED_JULIAN_CYCLE_DAYS);
    let day = day + centuries - floor_div(centuries + 3, 9) - floor_div(centuries + 7, 9);

    let (year, month, day) = resolve_year_month_day(day);
    Ok(Date::new(
        year + REVISED_JULIAN_CYCLE_YEARS * cycles,
        month,
        day,
    ))
}

/// Converts a Gregorian date to the Julian calendar.
///
/// # Errors
///
/// Returns [`CalendarError::YearOverflow`] if the Gregorian year is out of range.
pub fn gregorian_to_julian(date: Date) -> Result<Date, CalendarError> {
    Ok(jdn_to_julian(gregorian_to_jdn(date)?))
}

/// Converts a Julian date to the Gregorian calendar.
///
/// # Errors
///
/// Returns [`CalendarError::YearOverflow`] if the Julian year is out of range.
pub fn julian_to_gregorian(date: Date) -> Result<Date, CalendarError> {
    Ok(jdn_to_gregorian(julian_to_jdn(date)?))
}

/// Converts a Gregorian date to the Revised Julian calendar.
///
/// # Errors
///
/// Returns [`CalendarError::YearOverflow`] if the Gregorian year is out of
/// range, or [`CalendarError::JdnOverflow`] if the resulting day lies past
/// the Revised Julian inverse bound.
pub fn gregorian_to_rev_julian(date: Date) -> Result<Date, CalendarError> {
    jdn_to_rev_julian(gregorian_to_jdn(date)?)
}

/// Converts a Revised Julian date to the Gregorian calendar.
///
/// # Errors
///
/// Returns [`CalendarError::YearOverflow`] if the Revised Julian year is out
/// of range.
pub fn rev_julian_to_gregorian(date: Date) -> Result<Date, CalendarError> {
    Ok(jdn_to_gregorian(rev_julian_to_jdn(date)?))
}

/// Converts `date` from one calendar system to another through its JDN.
///
/// Converting a system to itself returns `date` untouched, without
/// consulting the year bounds.
///
/// # Errors
///
/// Propagates the overflow errors of [`CalendarSystem::to_jdn`] and
/// [`CalendarSystem::from_jdn`].
pub fn convert(date: Date, from: CalendarSystem, to: CalendarSystem) -> Result<Date, CalendarError> {
    if from == to {
        return Ok(date);
    }
    to.from_jdn(from.to_jdn(date)?)
}

fn check_year(system: CalendarSystem, year: i64) -> Result<(), CalendarError> {
    if year.unsigned_abs() > system.max_year().unsigned_abs() {
        return Err(CalendarError::YearOverflow {
            calendar: system,
            year,
        });
    }
    Ok(())
}

/// Moves January and February to the end of the previous year, returning
/// `(year, month)` with month in 3..=14.
fn march_based(year: i64, month: u8) -> (i64, i64) {
    let month = i64::from(month);
    if month < 3 {
        (year - 1, month + 12)
    } else {
        (year, month)
    }
}

/// Days from March 1 to the first of a March-based month, less the
/// constant that makes the epoch offsets land on day 1.
fn days_before_month(month: i64) -> i64 {
    floor_div(153 * (month + 1), 5) - 123
}

fn add_cycles(
    system: CalendarSystem,
    year: i64,
    days: i64,
    cycles: i64,
    cycle_days: i64,
) -> Result<i64, CalendarError> {
    cycles
        .checked_mul(cycle_days)
        .and_then(|cycle_total| cycle_total.checked_add(days))
        .ok_or(CalendarError::YearOverflow {
            calendar: system,
            year,
        })
}

/// Splits `jdn - epoch` into whole cycles and a day residue in
/// `0..cycle_days`, without forming `jdn - epoch` directly.
fn split_cycles(jdn: i64, epoch: i64, cycle_days: i64) -> (i64, i64) {
    let cycles = floor_div(jdn, cycle_days);
    let day = floor_mod(jdn, cycle_days) - epoch;
    let carry = floor_div(day, cycle_days);
    (cycles + carry, floor_mod(day, cycle_days))
}

/// Resolves a March-based Julian day count into `(year, month, day)` with
/// the year starting in January.
fn resolve_year_month_day(day: i64) -> (i64, u8, u8) {
    let year = floor_div(4 * day + 3, 1461);
    let day = day - floor_div(1461 * year, 4);
    let month = floor_div(5 * day + 2, 153);
    let day = day - floor_div(153 * month + 2, 5) + 1;

    // month is 0..=11 counted from March, day is 1..=31
    if month < 10 {
        (year, (month + 3) as u8, day as u8)
    } else {
        (year + 1, (month - 9) as u8, day as u8)
    }
}
