//! Composable calculation methods.

use pascha_calendar::{CalendarSystem, Date, convert};
use tracing::trace;

use crate::byzantine::byzantine_date;
use crate::computus::Computus;
use crate::error::ComputusError;
use crate::feast::Feast;

/// A Pascha computation with zero or more transforms layered on top.
///
/// Every layer owns its inner method and evaluates it first, then
/// transforms the result. Base methods yield Gregorian-terms dates; the
/// layers are meant to be stacked as shift, then calendar, then Byzantine,
/// which [`MethodChain`](crate::MethodChain) enforces. Constructing layers
/// by hand allows any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationMethod {
    /// A base computus.
    Base(Computus),
    /// Moves the inner date by a fixed number of Gregorian days.
    Shift {
        /// Wrapped method.
        inner: Box<CalculationMethod>,
        /// Days to add (negative moves backwards).
        days: i64,
    },
    /// Re-expresses the inner Gregorian date in another calendar.
    OutputCalendar {
        /// Wrapped method.
        inner: Box<CalculationMethod>,
        /// Target calendar. `Gregorian` passes the date through.
        calendar: CalendarSystem,
    },
    /// Renumbers the inner date's year to the Byzantine era.
    Byzantine {
        /// Wrapped method.
        inner: Box<CalculationMethod>,
    },
}

impl CalculationMethod {
    /// Julian computus with no layers.
    pub fn julian() -> Self {
        Self::Base(Computus::Julian)
    }

    /// Gregorian computus with no layers.
    pub fn gregorian() -> Self {
        Self::Base(Computus::Gregorian)
    }

    /// Wraps `self` in a day shift.
    pub fn shifted(self, days: i64) -> Self {
        Self::Shift {
            inner: Box::new(self),
            days,
        }
    }

    /// Wraps `self` in the shift for `feast`.
    pub fn feast(self, feast: Feast) -> Self {
        self.shifted(feast.shift_days())
    }

    /// Wraps `self` in an output-calendar conversion.
    pub fn in_calendar(self, calendar: CalendarSystem) -> Self {
        Self::OutputCalendar {
            inner: Box::new(self),
            calendar,
        }
    }

    /// Wraps `self` in Byzantine year renumbering.
    pub fn byzantine(self) -> Self {
        Self::Byzantine {
            inner: Box::new(self),
        }
    }

    /// Returns the base computus at the bottom of the chain.
    pub fn computus(&self) -> Computus {
        match self {
            Self::Base(computus) => *computus,
            Self::Shift { inner, .. }
            | Self::OutputCalendar { inner, .. }
            | Self::Byzantine { inner } => inner.computus(),
        }
    }

    /// Number of layers above the base computus.
    pub fn depth(&self) -> usize {
        match self {
            Self::Base(_) => 0,
            Self::Shift { inner, .. }
            | Self::OutputCalendar { inner, .. }
            | Self::Byzantine { inner } => 1 + inner.depth(),
        }
    }

    /// Evaluates the chain for `year`.
    ///
    /// # Errors
    ///
    /// Overflow errors from any layer propagate unchanged.
    pub fn calculate(&self, year: i64) -> Result<Date, ComputusError> {
        let date = match self {
            Self::Base(computus) => computus.pascha(year)?,
            Self::Shift { inner, days } => inner
                .calculate(year)?
                .add_days(CalendarSystem::Gregorian, *days)?,
            Self::OutputCalendar { inner, calendar } => {
                convert(inner.calculate(year)?, CalendarSystem::Gregorian, *calendar)?
            }
            Self::Byzantine { inner } => byzantine_date(inner.calculate(year)?)?,
        };
        trace!(layer = self.layer_name(), %date, "layer evaluated");
        Ok(date)
    }

    fn layer_name(&self) -> &'static str {
        match self {
            Self::Base(Computus::Julian) => "julian",
            Self::Base(Computus::Gregorian) => "gregorian",
            Self::Shift { .. } => "shift",
            Self::OutputCalendar { .. } => "output_calendar",
            Self::Byzantine { .. } => "byzantine",
        }
    }
}

impl From<Computus> for CalculationMethod {
    fn from(computus: Computus) -> Self {
        Self::Base(computus)
    }
}
