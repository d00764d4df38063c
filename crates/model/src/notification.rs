//! Results delivered to observers.

use std::cell::RefCell;
use std::fmt;

use pascha_calendar::Date;

/// A signed day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Days(pub i64);

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A signed week count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weeks(pub i64);

impl fmt::Display for Weeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One result of a model request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A computed date, in the method's output calendar.
    Date(Date),
    /// Days from today to the computed date.
    Days(Days),
    /// Weeks between two computed dates.
    Weeks(Weeks),
    /// An error message.
    Message(String),
}

impl Notification {
    /// Returns `true` for [`Notification::Message`].
    pub fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }
}

impl From<Date> for Notification {
    fn from(date: Date) -> Self {
        Self::Date(date)
    }
}

impl From<Days> for Notification {
    fn from(days: Days) -> Self {
        Self::Days(days)
    }
}

impl From<Weeks> for Notification {
    fn from(weeks: Weeks) -> Self {
        Self::Weeks(weeks)
    }
}

/// Receives model results.
///
/// `update` takes `&self`: observers that record state use interior
/// mutability. The model holds its observer list immutably while
/// notifying, so registering or removing observers from inside `update`
/// is not possible.
pub trait Observer {
    /// Handles one notification.
    fn update(&self, notification: &Notification);
}

/// An observer that records every notification it receives.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: RefCell<Vec<Notification>>,
}

impl NotificationLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded notification, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }

    /// Returns the most recent notification.
    pub fn last(&self) -> Option<Notification> {
        self.entries.borrow().last().cloned()
    }

    /// Number of recorded notifications.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Removes and returns every recorded notification.
    pub fn take(&self) -> Vec<Notification> {
        self.entries.take()
    }
}

impl Observer for NotificationLog {
    fn update(&self, notification: &Notification) {
        self.entries.borrow_mut().push(notification.clone());
    }
}
