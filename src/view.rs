//! Terminal presentation of model notifications.

use std::cell::RefCell;

use serde::Serialize;

use pascha_calendar::Date;
use pascha_model::{Notification, Observer, TargetOutput};

/// Field order of a rendered date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    #[default]
    Ymd,
    Mdy,
    Dmy,
}

/// How dates and labels are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pascha_name: String,
    date_format: DateFormat,
    separator: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            pascha_name: "Pascha".to_string(),
            date_format: DateFormat::Ymd,
            separator: "/".to_string(),
        }
    }
}

impl DisplaySettings {
    /// Sets the name shown for Pascha in labels.
    pub fn with_pascha_name(mut self, name: impl Into<String>) -> Self {
        self.pascha_name = name.into();
        self
    }

    /// Sets the field order of rendered dates.
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.date_format = format;
        self
    }

    /// Sets the string placed between date fields.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Name shown for Pascha in labels.
    pub fn pascha_name(&self) -> &str {
        &self.pascha_name
    }

    /// Renders `date` in the configured order, fields unpadded.
    pub fn format_date(&self, date: Date) -> String {
        let (y, m, d) = (date.year(), date.month(), date.day());
        let sep = &self.separator;
        match self.date_format {
            DateFormat::Ymd => format!("{y}{sep}{m}{sep}{d}"),
            DateFormat::Mdy => format!("{m}{sep}{d}{sep}{y}"),
            DateFormat::Dmy => format!("{d}{sep}{m}{sep}{y}"),
        }
    }
}

/// One rendered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// A line for stdout.
    Output(String),
    /// An error message.
    Error(String),
}

/// JSON form of a notification.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub request_year: i64,
    pub target: String,
    #[serde(flatten)]
    pub result: JsonResult,
}

/// Result payload, tagged by `kind`.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JsonResult {
    Date {
        date: String,
        year: i64,
        month: u8,
        day: u8,
    },
    Days {
        days: i64,
    },
    Weeks {
        weeks: i64,
    },
    Error {
        message: String,
    },
}

/// Observer that renders results for a single request.
///
/// Output lines are collected and printed by the caller, so a failed
/// request can be reported on stderr with a non-zero exit status.
pub struct TerminalView {
    year: i64,
    target: TargetOutput,
    settings: DisplaySettings,
    json: bool,
    rendered: RefCell<Vec<Rendered>>,
}

impl TerminalView {
    /// Creates a view for one request; `json` selects JSON rendering.
    pub fn new(year: i64, target: TargetOutput, settings: DisplaySettings, json: bool) -> Self {
        Self {
            year,
            target,
            settings,
            json,
            rendered: RefCell::new(Vec::new()),
        }
    }

    /// Removes and returns everything rendered so far.
    pub fn take(&self) -> Vec<Rendered> {
        self.rendered.take()
    }

    /// Renders one notification as text.
    pub fn render_text(&self, notification: &Notification) -> Rendered {
        let name = self.settings.pascha_name();
        let year = self.year;
        match notification {
            Notification::Date(date) => Rendered::Output(format!(
                "{} {year}: {}",
                self.target.label(name),
                self.settings.format_date(*date)
            )),
            Notification::Days(days) => {
                Rendered::Output(format!("Days until {name} {year}: {days}"))
            }
            Notification::Weeks(weeks) => Rendered::Output(format!(
                "Weeks between Julian and Gregorian {name} {year}: {weeks}"
            )),
            Notification::Message(message) => Rendered::Error(message.clone()),
        }
    }

    /// Builds the JSON form of one notification.
    pub fn to_json(&self, notification: &Notification) -> JsonOutput {
        let result = match notification {
            Notification::Date(date) => JsonResult::Date {
                date: self.settings.format_date(*date),
                year: date.year(),
                month: date.month(),
                day: date.day(),
            },
            Notification::Days(days) => JsonResult::Days { days: days.0 },
            Notification::Weeks(weeks) => JsonResult::Weeks { weeks: weeks.0 },
            Notification::Message(message) => JsonResult::Error {
                message: message.clone(),
            },
        };
        JsonOutput {
            request_year: self.year,
            target: self.target.label(self.settings.pascha_name()),
            result,
        }
    }

    fn render(&self, notification: &Notification) -> Rendered {
        if !self.json {
            return self.render_text(notification);
        }
        let json = serde_json::to_string_pretty(&self.to_json(notification));
        match (json, notification) {
            (Ok(text), Notification::Message(_)) => Rendered::Error(text),
            (Ok(text), _) => Rendered::Output(text),
            (Err(err), _) => Rendered::Error(format!("failed to serialise result: {err}")),
        }
    }
}

impl Observer for TerminalView {
    fn update(&self, notification: &Notification) {
        let rendered = self.render(notification);
        self.rendered.borrow_mut().push(rendered);
    }
}
