//! Pascha computus and the transforms layered on its result.
//!
//! A base [`Computus`] yields the date of Pascha in Gregorian terms. A
//! [`CalculationMethod`] stacks transforms on top of it: a feast shift,
//! re-expression in an output calendar, and Byzantine year numbering.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//!  │   computus    │────▶│  feast shift  │────▶│  output calendar  │────▶│  Byzantine   │
//!  │ (Gregorian)   │     │  (± days)     │     │  (JDN convert)    │     │  (year + AM) │
//!  └──────────────┘     └──────────────┘     └──────────────────┘     └──────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use pascha_calendar::{CalendarSystem, Date};
//! use pascha_computus::{Computus, MethodChain, OutputOption};
//!
//! // Orthodox Pascha 2019 on the civil calendar.
//! assert_eq!(Computus::Julian.pascha(2019).unwrap(), Date::new(2019, 4, 28));
//!
//! // The same day on the Julian calendar, numbered from creation.
//! let method = MethodChain::new(Computus::Julian)
//!     .with_output_calendar(CalendarSystem::Julian)
//!     .with_option(OutputOption::Byzantine)
//!     .build();
//! assert_eq!(method.calculate(2019).unwrap(), Date::new(7527, 4, 15));
//! ```

pub mod byzantine;
pub mod chain;
pub mod computus;
pub mod error;
pub mod feast;
pub mod method;

pub use byzantine::{BYZANTINE_EPOCH_OFFSET, BYZANTINE_NEW_YEAR_MONTH, byzantine_date, byzantine_year};
pub use chain::{MethodChain, OutputOption};
pub use computus::Computus;
pub use error::ComputusError;
pub use feast::Feast;
pub use method::CalculationMethod;
