//! Error types for the pascha-calendar crate.

use crate::system::CalendarSystem;

/// Error type for all fallible operations in the pascha-calendar crate.
///
/// The two overflow variants cover inputs whose magnitude would not fit the
/// 64-bit day count. The remaining variants are only produced by the
/// validating [`Date::checked`](crate::Date::checked) constructor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year lies outside the supported range of a calendar.
    #[error("{calendar} year out of range: {year}")]
    YearOverflow {
        /// The calendar whose bound was exceeded.
        calendar: CalendarSystem,
        /// The offending year.
        year: i64,
    },

    /// Returned when a Julian Day Number cannot be mapped into a calendar.
    #[error("JDN out of range to convert to {calendar}: {jdn}")]
    JdnOverflow {
        /// The calendar the JDN was being converted into.
        calendar: CalendarSystem,
        /// The offending day number.
        jdn: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}

impl CalendarError {
    /// Returns `true` for the two overflow variants.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::YearOverflow { .. } | Self::JdnOverflow { .. })
    }
}
