//! Observer-driven Pascha calculator.
//!
//! A [`Controller`] turns a [`CalculationRequest`] into calls on a
//! [`CalculatorModel`]. The model runs the calculation and reports every
//! outcome, success or failure, as a [`Notification`] to its registered
//! [`Observer`]s.
//!
//! # Quick start
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use pascha_calendar::Date;
//! use pascha_model::{
//!     CalculationRequest, CalculatorModel, Controller, FixedClock, Notification, NotificationLog,
//!     PaschaCalculatorModel,
//! };
//!
//! let mut model = PaschaCalculatorModel::with_clock(FixedClock(Date::new(2019, 1, 1)));
//! let log = Rc::new(NotificationLog::new());
//! model.add_observer(log.clone());
//!
//! let mut controller = Controller::new(model);
//! controller.calculate(&CalculationRequest::new(2019));
//!
//! // Orthodox Pascha 2019 on the Julian calendar.
//! assert_eq!(log.last(), Some(Notification::Date(Date::new(2019, 4, 15))));
//! ```

pub mod clock;
pub mod controller;
pub mod error;
pub mod model;
pub mod notification;
pub mod request;

pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::{Controller, validate_year};
pub use error::ModelError;
pub use model::{CalculatorModel, PaschaCalculatorModel};
pub use notification::{Days, Notification, NotificationLog, Observer, Weeks};
pub use request::{CalculationRequest, TargetOutput};
