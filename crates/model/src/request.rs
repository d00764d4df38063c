//! What the user asked for.

use std::fmt;

use pascha_calendar::CalendarSystem;
use pascha_computus::{Computus, Feast, OutputOption};

/// The quantity a request produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetOutput {
    /// The date of Pascha.
    Pascha,
    /// Days from today until Pascha.
    DaysUntil,
    /// Weeks between Julian and Gregorian Pascha.
    WeeksBetween,
    /// Meatfare Sunday.
    Meatfare,
    /// Cheesefare Sunday.
    Cheesefare,
    /// Ash Wednesday.
    AshWednesday,
    /// Midfeast of Pentecost.
    MidfeastPentecost,
    /// Leavetaking of Pascha.
    LeavetakingPascha,
    /// Ascension.
    Ascension,
    /// Pentecost.
    Pentecost,
}

impl TargetOutput {
    /// Every target, in menu order.
    pub const ALL: [Self; 10] = [
        Self::Pascha,
        Self::DaysUntil,
        Self::WeeksBetween,
        Self::Meatfare,
        Self::Cheesefare,
        Self::AshWednesday,
        Self::MidfeastPentecost,
        Self::LeavetakingPascha,
        Self::Ascension,
        Self::Pentecost,
    ];

    /// The feast computed for date targets; `None` for the two counts.
    pub fn feast(self) -> Option<Feast> {
        match self {
            Self::Pascha => Some(Feast::Pascha),
            Self::DaysUntil | Self::WeeksBetween => None,
            Self::Meatfare => Some(Feast::Meatfare),
            Self::Cheesefare => Some(Feast::Cheesefare),
            Self::AshWednesday => Some(Feast::AshWednesday),
            Self::MidfeastPentecost => Some(Feast::MidfeastPentecost),
            Self::LeavetakingPascha => Some(Feast::LeavetakingPascha),
            Self::Ascension => Some(Feast::Ascension),
            Self::Pentecost => Some(Feast::Pentecost),
        }
    }

    /// Display label with `pascha_name` substituted.
    pub fn label(self, pascha_name: &str) -> String {
        if let Some(feast) = self.feast() {
            return feast.label(pascha_name);
        }
        if self == Self::DaysUntil {
            format!("Days until {pascha_name}")
        } else {
            format!("Weeks between Julian and Gregorian {pascha_name}")
        }
    }
}

impl fmt::Display for TargetOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label("Pascha"))
    }
}

/// A complete calculation request.
///
/// Defaults follow the Orthodox usage: Julian computus, Pascha, shown on
/// the Julian calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRequest {
    /// Year to compute for.
    pub year: i64,
    /// Base computus.
    pub method: Computus,
    /// What to produce.
    pub target: TargetOutput,
    /// Calendar the resulting date is shown in.
    pub output_calendar: CalendarSystem,
    /// Output modifiers.
    pub options: Vec<OutputOption>,
}

impl CalculationRequest {
    /// Creates a request for `year` with default settings.
    pub fn new(year: i64) -> Self {
        Self {
            year,
            method: Computus::Julian,
            target: TargetOutput::Pascha,
            output_calendar: CalendarSystem::Julian,
            options: Vec::new(),
        }
    }

    /// Sets the base computus.
    pub fn with_method(mut self, method: Computus) -> Self {
        self.method = method;
        self
    }

    /// Sets the target output.
    pub fn with_target(mut self, target: TargetOutput) -> Self {
        self.target = target;
        self
    }

    /// Sets the output calendar.
    pub fn with_output_calendar(mut self, calendar: CalendarSystem) -> Self {
        self.output_calendar = calendar;
        self
    }

    /// Adds an output option.
    pub fn with_option(mut self, option: OutputOption) -> Self {
        self.options.push(option);
        self
    }
}
