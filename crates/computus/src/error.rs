//! Error types for the pascha-computus crate.

use pascha_calendar::CalendarError;

/// Error type for all fallible operations in the pascha-computus crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComputusError {
    /// A calendar conversion or day shift left the representable range.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when shifting to Byzantine year numbering overflows.
    #[error("Byzantine year out of range: {year}")]
    ByzantineOverflow {
        /// The year that could not be renumbered.
        year: i64,
    },
}

impl ComputusError {
    /// Returns `true` when the error stems from a year or day count that is
    /// too large to represent.
    pub fn is_overflow(&self) -> bool {
        match self {
            Self::Calendar(err) => err.is_overflow(),
            Self::ByzantineOverflow { .. } => true,
        }
    }
}
