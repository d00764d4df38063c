//! The calculator model: runs methods and notifies observers.

use std::fmt;
use std::ptr;
use std::rc::Rc;

use pascha_calendar::{CalendarError, CalendarSystem, gregorian_to_jdn};
use pascha_computus::{CalculationMethod, ComputusError};
use tracing::{debug, instrument, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::ModelError;
use crate::notification::{Days, Notification, Observer, Weeks};

/// Operations of a calculator model.
///
/// Requests never return their result: every outcome, including errors, is
/// delivered to the registered observers.
pub trait CalculatorModel {
    /// Replaces the current calculation method.
    fn set_calculation_method(&mut self, method: CalculationMethod);

    /// Computes the current method's date for `year`.
    fn calculate(&self, year: i64);

    /// Computes the signed number of days from today to the current
    /// method's date for `year`.
    fn days_until(&self, year: i64);

    /// Computes the number of whole weeks from `second`'s date to `first`'s
    /// date for `year`.
    fn weeks_between(
        &self,
        year: i64,
        first: Option<&CalculationMethod>,
        second: Option<&CalculationMethod>,
    );

    /// Sends `notification` to every observer.
    fn notify(&self, notification: &Notification);

    /// Registers an observer.
    fn add_observer(&mut self, observer: Rc<dyn Observer>);

    /// Unregisters every registration of `observer`.
    fn remove_observer(&mut self, observer: &Rc<dyn Observer>);
}

/// The Pascha calculator model.
///
/// Holds an optional current method and a list of observers. Days are
/// counted against `clock`.
pub struct PaschaCalculatorModel<C = SystemClock> {
    method: Option<CalculationMethod>,
    observers: Vec<Rc<dyn Observer>>,
    clock: C,
}

impl PaschaCalculatorModel {
    /// Creates a model with no method and no observers, reading today's
    /// date from the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for PaschaCalculatorModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PaschaCalculatorModel<C> {
    /// Creates a model reading today's date from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            method: None,
            observers: Vec::new(),
            clock,
        }
    }

    /// Returns the current method, if one is set.
    pub fn calculation_method(&self) -> Option<&CalculationMethod> {
        self.method.as_ref()
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn current_method(&self) -> Result<&CalculationMethod, ModelError> {
        self.method.as_ref().ok_or(ModelError::NoMethod)
    }

    fn try_days_until(&self, year: i64) -> Result<Days, ModelError> {
        let date = self.current_method()?.calculate(year)?;
        let target = gregorian_to_jdn(date).map_err(ComputusError::from)?;
        let today = gregorian_to_jdn(self.clock.today()).map_err(ComputusError::from)?;
        let days = target
            .checked_sub(today)
            .ok_or_else(|| day_difference_overflow(year))?;
        Ok(Days(days))
    }

    fn try_weeks_between(
        year: i64,
        first: Option<&CalculationMethod>,
        second: Option<&CalculationMethod>,
    ) -> Result<Weeks, ModelError> {
        let (Some(first), Some(second)) = (first, second) else {
            return Err(ModelError::NoMethod);
        };
        let first = gregorian_to_jdn(first.calculate(year)?).map_err(ComputusError::from)?;
        let second = gregorian_to_jdn(second.calculate(year)?).map_err(ComputusError::from)?;
        let days = first
            .checked_sub(second)
            .ok_or_else(|| day_difference_overflow(year))?;
        // Truncates toward zero: a difference of -17 days is -2 weeks.
        Ok(Weeks(days / 7))
    }

    /// Delivers `result` to observers, or its error as a message.
    fn publish<T: Into<Notification>>(&self, result: Result<T, ModelError>) {
        match result {
            Ok(value) => {
                let notification = value.into();
                debug!(?notification, "request succeeded");
                self.notify(&notification);
            }
            Err(err) => {
                warn!(%err, "request failed");
                self.notify(&Notification::Message(err.to_string()));
            }
        }
    }
}

/// A day difference that does not fit in `i64`.
fn day_difference_overflow(year: i64) -> ModelError {
    ComputusError::from(CalendarError::YearOverflow {
        calendar: CalendarSystem::Gregorian,
        year,
    })
    .into()
}

impl<C: Clock> CalculatorModel for PaschaCalculatorModel<C> {
    fn set_calculation_method(&mut self, method: CalculationMethod) {
        debug!(computus = %method.computus(), depth = method.depth(), "calculation method set");
        self.method = Some(method);
    }

    #[instrument(skip(self))]
    fn calculate(&self, year: i64) {
        let result = self
            .current_method()
            .and_then(|method| method.calculate(year).map_err(ModelError::from));
        self.publish(result);
    }

    #[instrument(skip(self))]
    fn days_until(&self, year: i64) {
        self.publish(self.try_days_until(year));
    }

    #[instrument(skip(self, first, second))]
    fn weeks_between(
        &self,
        year: i64,
        first: Option<&CalculationMethod>,
        second: Option<&CalculationMethod>,
    ) {
        self.publish(Self::try_weeks_between(year, first, second));
    }

    fn notify(&self, notification: &Notification) {
        for observer in &self.observers {
            observer.update(notification);
        }
    }

    fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    fn remove_observer(&mut self, observer: &Rc<dyn Observer>) {
        self.observers
            .retain(|registered| !ptr::addr_eq(Rc::as_ptr(registered), Rc::as_ptr(observer)));
    }
}

impl<C: fmt::Debug> fmt::Debug for PaschaCalculatorModel<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaschaCalculatorModel")
            .field("method", &self.method)
            .field("observers", &self.observers.len())
            .field("clock", &self.clock)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::notification::NotificationLog;
    use pascha_calendar::Date;

    fn model_at(today: Date) -> (PaschaCalculatorModel<FixedClock>, Rc<NotificationLog>) {
        let mut model = PaschaCalculatorModel::with_clock(FixedClock(today));
        let log = Rc::new(NotificationLog::new());
        model.add_observer(log.clone());
        (model, log)
    }

    #[test]
    fn calculate_without_method() {
        let (model, log) = model_at(Date::new(2019, 1, 1));
        model.calculate(2019);
        assert_eq!(
            log.notifications(),
            vec![Notification::Message("No calculation method set!".to_string())]
        );
    }

    #[test]
    fn calculate_notifies_date() {
        let (mut model, log) = model_at(Date::new(2019, 1, 1));
        model.set_calculation_method(CalculationMethod::julian());
        model.calculate(2019);
        assert_eq!(log.last(), Some(Notification::Date(Date::new(2019, 4, 28))));
    }

    #[test]
    fn set_method_replaces() {
        let (mut model, log) = model_at(Date::new(2019, 1, 1));
        model.set_calculation_method(CalculationMethod::julian());
        model.set_calculation_method(CalculationMethod::gregorian());
        assert_eq!(
            model.calculation_method(),
            Some(&CalculationMethod::gregorian())
        );
        model.calculate(2019);
        assert_eq!(log.last(), Some(Notification::Date(Date::new(2019, 4, 21))));
    }

    #[test]
    fn days_until_future_and_past() {
        let (mut model, log) = model_at(Date::new(2019, 1, 1));
        model.set_calculation_method(CalculationMethod::julian());
        model.days_until(2019);
        assert_eq!(log.last(), Some(Notification::Days(Days(117))));

        let (mut model, log) = model_at(Date::new(2020, 1, 1));
        model.set_calculation_method(CalculationMethod::julian());
        model.days_until(2019);
        assert_eq!(log.last(), Some(Notification::Days(Days(117 - 365))));
    }

    #[test]
    fn days_until_without_method() {
        let (model, log) = model_at(Date::new(2019, 1, 1));
        model.days_until(2019);
        assert!(log.last().is_some_and(|n| n.is_message()));
    }

    #[test]
    fn weeks_between_julian_and_gregorian() {
        let (model, log) = model_at(Date::new(2019, 1, 1));
        model.weeks_between(
            2019,
            Some(&CalculationMethod::julian()),
            Some(&CalculationMethod::gregorian()),
        );
        assert_eq!(log.last(), Some(Notification::Weeks(Weeks(1))));
    }

    #[test]
    fn weeks_between_missing_method() {
        let (model, log) = model_at(Date::new(2019, 1, 1));
        model.weeks_between(2019, Some(&CalculationMethod::julian()), None);
        model.weeks_between(2019, None, Some(&CalculationMethod::julian()));
        let expected = Notification::Message("No calculation method set!".to_string());
        assert_eq!(log.notifications(), vec![expected.clone(), expected]);
    }

    #[test]
    fn weeks_between_opposite_extremes() {
        let (model, log) = model_at(Date::new(2019, 1, 1));
        let shift = i64::MAX - 3_000_000;
        let late = CalculationMethod::julian().shifted(shift);
        let early = CalculationMethod::julian().shifted(-shift);
        assert!(late.calculate(0).is_ok());
        assert!(early.calculate(0).is_ok());

        model.weeks_between(0, Some(&late), Some(&early));
        assert_eq!(
            log.last(),
            Some(Notification::Message(day_difference_overflow(0).to_string()))
        );
    }

    #[test]
    fn overflow_becomes_message() {
        let (mut model, log) = model_at(Date::new(2019, 1, 1));
        model.set_calculation_method(CalculationMethod::julian());
        model.calculate(i64::MAX);
        let expected = CalculationMethod::julian()
            .calculate(i64::MAX)
            .unwrap_err()
            .to_string();
        assert_eq!(log.last(), Some(Notification::Message(expected)));
    }

    #[test]
    fn remove_observer_by_identity() {
        let (mut model, log) = model_at(Date::new(2019, 1, 1));
        let other = Rc::new(NotificationLog::new());
        let other_dyn: Rc<dyn Observer> = other.clone();
        model.add_observer(other_dyn.clone());
        model.add_observer(other_dyn.clone());
        assert_eq!(model.observer_count(), 3);

        model.remove_observer(&other_dyn);
        assert_eq!(model.observer_count(), 1);

        model.notify(&Notification::Days(Days(1)));
        assert_eq!(log.len(), 1);
        assert!(other.is_empty());
    }

    #[test]
    fn every_observer_notified() {
        let (mut model, first) = model_at(Date::new(2019, 1, 1));
        let second = Rc::new(NotificationLog::new());
        model.add_observer(second.clone());
        model.notify(&Notification::Weeks(Weeks(2)));
        assert_eq!(first.notifications(), second.notifications());
        assert_eq!(first.len(), 1);
    }
}
