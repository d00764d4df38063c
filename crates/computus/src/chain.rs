//! Order-enforcing construction of calculation methods.

use std::fmt;

use pascha_calendar::CalendarSystem;
use tracing::debug;

use crate::computus::Computus;
use crate::feast::Feast;
use crate::method::CalculationMethod;

/// Modifiers applied after the output calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputOption {
    /// Number years from the Byzantine creation epoch.
    Byzantine,
}

impl fmt::Display for OutputOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byzantine => f.write_str("Byzantine"),
        }
    }
}

/// Builder for a [`CalculationMethod`] in the only meaningful layer order.
///
/// The feast shift is applied to the Gregorian-terms base result, the date
/// is then re-expressed in the output calendar, and Byzantine numbering is
/// applied last because its September new year depends on the displayed
/// month. Setting the calendar twice replaces it, so at most one
/// conversion is ever layered.
///
/// # Example
///
/// ```
/// use pascha_calendar::{CalendarSystem, Date};
/// use pascha_computus::{Computus, Feast, MethodChain};
///
/// let method = MethodChain::new(Computus::Julian)
///     .with_feast(Feast::Meatfare)
///     .with_output_calendar(CalendarSystem::Julian)
///     .build();
///
/// assert_eq!(method.calculate(2019).unwrap(), Date::new(2019, 2, 18));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodChain {
    computus: Computus,
    feast: Feast,
    output_calendar: CalendarSystem,
    byzantine: bool,
}

impl MethodChain {
    /// Starts a chain for Pascha in Gregorian terms.
    pub fn new(computus: Computus) -> Self {
        Self {
            computus,
            feast: Feast::Pascha,
            output_calendar: CalendarSystem::Gregorian,
            byzantine: false,
        }
    }

    /// Sets the target feast.
    pub fn with_feast(mut self, feast: Feast) -> Self {
        self.feast = feast;
        self
    }

    /// Sets the calendar the result is expressed in.
    pub fn with_output_calendar(mut self, calendar: CalendarSystem) -> Self {
        self.output_calendar = calendar;
        self
    }

    /// Enables an output option. Enabling one twice has no further effect.
    pub fn with_option(mut self, option: OutputOption) -> Self {
        match option {
            OutputOption::Byzantine => self.byzantine = true,
        }
        self
    }

    /// Enables or disables Byzantine year numbering.
    pub fn with_byzantine(mut self, byzantine: bool) -> Self {
        self.byzantine = byzantine;
        self
    }

    // --- Accessors ---

    /// Returns the base computus.
    pub fn computus(&self) -> Computus {
        self.computus
    }

    /// Returns the target feast.
    pub fn feast(&self) -> Feast {
        self.feast
    }

    /// Returns the output calendar.
    pub fn output_calendar(&self) -> CalendarSystem {
        self.output_calendar
    }

    /// Returns whether Byzantine numbering is enabled.
    pub fn byzantine(&self) -> bool {
        self.byzantine
    }

    /// Assembles the layered method.
    ///
    /// Identity layers (a zero shift, a Gregorian output calendar) are
    /// omitted.
    pub fn build(&self) -> CalculationMethod {
        let mut method = CalculationMethod::Base(self.computus);
        if self.feast.shift_days() != 0 {
            method = method.feast(self.feast);
        }
        if self.output_calendar != CalendarSystem::Gregorian {
            method = method.in_calendar(self.output_calendar);
        }
        if self.byzantine {
            method = method.byzantine();
        }
        debug!(
            computus = %self.computus,
            feast = %self.feast,
            calendar = %self.output_calendar,
            byzantine = self.byzantine,
            depth = method.depth(),
            "built calculation method"
        );
        method
    }
}

impl From<Computus> for MethodChain {
    fn from(computus: Computus) -> Self {
        Self::new(computus)
    }
}
