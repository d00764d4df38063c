//! Turns calculation requests into model calls.

use pascha_calendar::JULIAN_MAX_YEAR;
use pascha_computus::{CalculationMethod, Feast, MethodChain, OutputOption};
use tracing::{info, instrument, warn};

use crate::error::ModelError;
use crate::model::CalculatorModel;
use crate::notification::Notification;
use crate::request::{CalculationRequest, TargetOutput};

/// Returns `true` when `year` lies within the range every calendar can
/// represent (the Julian bound is the tightest).
pub fn validate_year(year: i64) -> bool {
    year.unsigned_abs() <= JULIAN_MAX_YEAR.unsigned_abs()
}

/// Routes [`CalculationRequest`]s to a [`CalculatorModel`].
#[derive(Debug)]
pub struct Controller<M> {
    model: M,
}

impl<M: CalculatorModel> Controller<M> {
    /// Wraps `model`.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Returns the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns the model mutably, e.g. to register observers.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consumes the controller and returns the model.
    pub fn into_inner(self) -> M {
        self.model
    }

    /// Runs `request`; the result reaches the model's observers.
    ///
    /// - `WeeksBetween` compares bare Julian and Gregorian Pascha.
    /// - `DaysUntil` counts to the bare base method's date.
    /// - Every other target goes through a [`MethodChain`].
    #[instrument(skip(self, request), fields(year = request.year, target = %request.target))]
    pub fn calculate(&mut self, request: &CalculationRequest) {
        if !validate_year(request.year) {
            warn!("year rejected");
            let err = ModelError::InvalidYear { year: request.year };
            self.model.notify(&Notification::Message(err.to_string()));
            return;
        }

        match request.target {
            TargetOutput::WeeksBetween => {
                self.model.weeks_between(
                    request.year,
                    Some(&CalculationMethod::julian()),
                    Some(&CalculationMethod::gregorian()),
                );
            }
            TargetOutput::DaysUntil => {
                self.model
                    .set_calculation_method(CalculationMethod::from(request.method));
                self.model.days_until(request.year);
            }
            target => {
                let chain = request.options.iter().fold(
                    MethodChain::new(request.method)
                        .with_feast(target.feast().unwrap_or(Feast::Pascha))
                        .with_output_calendar(request.output_calendar),
                    |chain, &option| chain.with_option(option),
                );
                info!(
                    method = %request.method,
                    calendar = %request.output_calendar,
                    byzantine = request.options.contains(&OutputOption::Byzantine),
                    "calculating"
                );
                self.model.set_calculation_method(chain.build());
                self.model.calculate(request.year);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_year_bounds() {
        let cases: &[(i64, bool)] = &[
            (0, true),
            (2019, true),
            (-5509, true),
            (JULIAN_MAX_YEAR, true),
            (-JULIAN_MAX_YEAR, true),
            (JULIAN_MAX_YEAR + 1, false),
            (-JULIAN_MAX_YEAR - 1, false),
            (i64::MIN, false),
            (i64::MAX, false),
        ];
        for &(year, valid) in cases {
            assert_eq!(validate_year(year), valid, "year {year}");
        }
    }
}
