//! # pascha-calendar
//!
//! Proleptic calendar arithmetic for the Gregorian, Julian and Revised
//! Julian (Milanković) calendars, pivoting on the Julian Day Number.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     G["Gregorian Date"] -->|"gregorian_to_jdn()"| J["JDN (i64)"]
//!     U["Julian Date"] -->|"julian_to_jdn()"| J
//!     R["Revised Julian Date"] -->|"rev_julian_to_jdn()"| J
//!     J -->|"jdn_to_gregorian()"| G
//!     J -->|"jdn_to_julian()"| U
//!     J -->|"jdn_to_rev_julian()"| R
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pascha_calendar::{CalendarSystem, Date, convert, gregorian_to_jdn, gregorian_to_julian};
//!
//! // Year 0 is 1 BC.
//! assert_eq!(gregorian_to_jdn(Date::new(0, 1, 1)).unwrap(), 1_721_060);
//!
//! // The Julian calendar runs 13 days behind in 2019.
//! let julian = gregorian_to_julian(Date::new(2019, 1, 1)).unwrap();
//! assert_eq!(julian, Date::new(2018, 12, 19));
//!
//! // Any pair of systems.
//! let rj = convert(Date::new(2019, 1, 1), CalendarSystem::Gregorian, CalendarSystem::RevisedJulian).unwrap();
//! assert_eq!(rj, Date::new(2019, 1, 1));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Year/month/day triple with astronomical year numbering |
//! | `system` | Calendar systems and leap-year rules |
//! | `jdn` | JDN conversion and calendar-to-calendar conversion |
//! | `floor` | Floor division for negative operands |
//! | `error` | Error types |

mod date;
mod error;
mod floor;
mod jdn;
mod system;

pub use date::Date;
pub use error::CalendarError;
pub use jdn::{
    GREGORIAN_MAX_YEAR, JULIAN_MAX_YEAR, REVISED_JULIAN_MAX_JDN, REVISED_JULIAN_MAX_YEAR,
    convert, gregorian_to_jdn, gregorian_to_julian, gregorian_to_rev_julian, jdn_to_gregorian,
    jdn_to_julian, jdn_to_rev_julian, julian_to_gregorian, julian_to_jdn, rev_julian_to_gregorian,
    rev_julian_to_jdn,
};
pub use system::CalendarSystem;
