//! Byzantine (Anno Mundi) year numbering.

use pascha_calendar::Date;

use crate::error::ComputusError;

/// Years from the Byzantine creation epoch to year 0 of the Christian era,
/// counted from the January new year.
pub const BYZANTINE_EPOCH_OFFSET: i64 = 5508;

/// The Byzantine year begins on 1 September.
pub const BYZANTINE_NEW_YEAR_MONTH: u8 = 9;

/// Computes the Byzantine year for a calendar year and month.
///
/// Months from September onward already belong to the next Byzantine year.
///
/// # Errors
///
/// Returns [`ComputusError::ByzantineOverflow`] if the renumbered year does
/// not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use pascha_computus::byzantine_year;
///
/// assert_eq!(byzantine_year(2019, 4).unwrap(), 7527);
/// assert_eq!(byzantine_year(2019, 9).unwrap(), 7528);
/// ```
pub fn byzantine_year(year: i64, month: u8) -> Result<i64, ComputusError> {
    let new_year_carry = i64::from(month >= BYZANTINE_NEW_YEAR_MONTH);
    year.checked_add(BYZANTINE_EPOCH_OFFSET + new_year_carry)
        .ok_or(ComputusError::ByzantineOverflow { year })
}

/// Renumbers the year of `date`, keeping month and day.
///
/// # Errors
///
/// See [`byzantine_year`].
pub fn byzantine_date(date: Date) -> Result<Date, ComputusError> {
    let year = byzantine_year(date.year(), date.month())?;
    Ok(Date::new(year, date.month(), date.day()))
}
