//! Error types for the pascha-model crate.

use pascha_computus::ComputusError;

/// Error type for all fallible operations in the pascha-model crate.
///
/// The `Display` text is the message delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Returned when a calculation is requested before a method is set.
    #[error("No calculation method set!")]
    NoMethod,

    /// Returned when the controller rejects the requested year.
    #[error("Invalid year")]
    InvalidYear {
        /// The rejected year.
        year: i64,
    },

    /// A calculation method failed.
    #[error(transparent)]
    Computus(#[from] ComputusError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pascha_calendar::{CalendarError, CalendarSystem};

    #[test]
    fn error_no_method() {
        assert_eq!(ModelError::NoMethod.to_string(), "No calculation method set!");
    }

    #[test]
    fn error_invalid_year() {
        let err = ModelError::InvalidYear { year: i64::MAX };
        assert_eq!(err.to_string(), "Invalid year");
    }

    #[test]
    fn computus_error_is_transparent() {
        let inner = ComputusError::from(CalendarError::YearOverflow {
            calendar: CalendarSystem::Gregorian,
            year: 1,
        });
        assert_eq!(ModelError::from(inner.clone()).to_string(), inner.to_string());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ModelError>();
    }
}
