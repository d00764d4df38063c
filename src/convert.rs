//! Pure conversion functions: CLI strings and TOML config -> crate API types.

use anyhow::{Context, Result, bail};

use pascha_calendar::{CalendarSystem, Date};
use pascha_computus::{Computus, OutputOption};
use pascha_model::{CalculationRequest, TargetOutput};

use crate::cli::CalculateArgs;
use crate::config::{DisplayToml, PaschaConfig};
use crate::view::{DateFormat, DisplaySettings};

/// Parses a computus name into the corresponding enum variant.
pub fn parse_computus(s: &str) -> Result<Computus> {
    match s.to_lowercase().as_str() {
        "julian" => Ok(Computus::Julian),
        "gregorian" => Ok(Computus::Gregorian),
        other => bail!("unknown calculation method: {other:?}"),
    }
}

/// Parses a calendar name into the corresponding enum variant.
pub fn parse_calendar(s: &str) -> Result<CalendarSystem> {
    match s.to_lowercase().replace('-', "_").as_str() {
        "julian" => Ok(CalendarSystem::Julian),
        "gregorian" => Ok(CalendarSystem::Gregorian),
        "revised_julian" | "rev_julian" | "milankovic" => Ok(CalendarSystem::RevisedJulian),
        other => bail!("unknown calendar: {other:?}"),
    }
}

/// Parses a target output name into the corresponding enum variant.
///
/// `easter` is accepted wherever `pascha` is.
pub fn parse_target(s: &str) -> Result<TargetOutput> {
    match s.to_lowercase().replace('-', "_").as_str() {
        "pascha" | "easter" => Ok(TargetOutput::Pascha),
        "days_until" => Ok(TargetOutput::DaysUntil),
        "weeks_between" => Ok(TargetOutput::WeeksBetween),
        "meatfare" => Ok(TargetOutput::Meatfare),
        "cheesefare" => Ok(TargetOutput::Cheesefare),
        "ash_wednesday" => Ok(TargetOutput::AshWednesday),
        "midfeast_pentecost" | "midfeast" => Ok(TargetOutput::MidfeastPentecost),
        "leavetaking_pascha" | "leavetaking_easter" => Ok(TargetOutput::LeavetakingPascha),
        "ascension" => Ok(TargetOutput::Ascension),
        "pentecost" => Ok(TargetOutput::Pentecost),
        other => bail!("unknown target: {other:?}"),
    }
}

/// Parses a date format name (`YMD`, `MDY` or `DMY`).
pub fn parse_date_format(s: &str) -> Result<DateFormat> {
    match s.to_uppercase().as_str() {
        "YMD" => Ok(DateFormat::Ymd),
        "MDY" => Ok(DateFormat::Mdy),
        "DMY" => Ok(DateFormat::Dmy),
        other => bail!("unknown date format: {other:?}"),
    }
}

/// Parses the display name for Pascha: either `Pascha` or `Easter`.
pub fn parse_pascha_name(s: &str) -> Result<&'static str> {
    match s.to_lowercase().as_str() {
        "pascha" => Ok("Pascha"),
        "easter" => Ok("Easter"),
        other => bail!("unknown pascha name: {other:?} (expected Pascha or Easter)"),
    }
}

/// Parses `YYYY-MM-DD`, with a leading `-` for negative years.
///
/// Only the shape is checked; range checks belong to the calendar.
pub fn parse_date(s: &str) -> Result<Date> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let parts: Vec<&str> = rest.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("expected a date as YYYY-MM-DD, got {s:?}");
    };
    let year: i64 = year
        .parse()
        .with_context(|| format!("invalid year in date {s:?}"))?;
    let month: u8 = month
        .parse()
        .with_context(|| format!("invalid month in date {s:?}"))?;
    let day: u8 = day
        .parse()
        .with_context(|| format!("invalid day in date {s:?}"))?;
    Ok(Date::new(if negative { -year } else { year }, month, day))
}

/// Builds a [`CalculationRequest`] from the config, with CLI flags taking
/// precedence.
pub fn build_request(args: &CalculateArgs, config: &PaschaConfig) -> Result<CalculationRequest> {
    let method = parse_computus(args.method.as_deref().unwrap_or(&config.calculation.method))?;
    let calendar = parse_calendar(
        args.calendar
            .as_deref()
            .unwrap_or(&config.calculation.output_calendar),
    )?;
    let target = parse_target(&args.target)?;

    let mut request = CalculationRequest::new(args.year)
        .with_method(method)
        .with_target(target)
        .with_output_calendar(calendar);
    if args.byzantine || config.calculation.byzantine {
        request = request.with_option(OutputOption::Byzantine);
    }
    Ok(request)
}

/// Builds [`DisplaySettings`] from the TOML display configuration.
pub fn build_display_settings(display: &DisplayToml) -> Result<DisplaySettings> {
    Ok(DisplaySettings::default()
        .with_pascha_name(parse_pascha_name(&display.pascha_name)?)
        .with_date_format(parse_date_format(&display.date_format)?)
        .with_separator(&display.date_separator))
}
