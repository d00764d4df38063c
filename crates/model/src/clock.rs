//! Source of today's date.

use chrono::{Datelike, Local};
use pascha_calendar::Date;

/// Supplies the current Gregorian date.
pub trait Clock {
    /// Today's date on the Gregorian calendar.
    fn today(&self) -> Date;
}

/// The local date of the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        let now = Local::now().date_naive();
        // chrono months and days are always in 1..=12 and 1..=31.
        Date::new(i64::from(now.year()), now.month() as u8, now.day() as u8)
    }
}

/// A clock frozen at one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let clock = FixedClock(Date::new(2019, 1, 1));
        assert_eq!(clock.today(), Date::new(2019, 1, 1));
    }

    #[test]
    fn system_clock_is_a_valid_gregorian_date() {
        let today = SystemClock.today();
        assert!(
            Date::checked(
                pascha_calendar::CalendarSystem::Gregorian,
                today.year(),
                today.month(),
                today.day()
            )
            .is_ok(),
            "{today}"
        );
        assert!(today.year() >= 2024);
    }
}
