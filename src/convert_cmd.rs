//! Convert command: re-express a date in another calendar.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use pascha_calendar::{Date, convert};

use crate::cli::ConvertArgs;
use crate::config::PaschaConfig;
use crate::convert::{build_display_settings, parse_calendar, parse_date};

/// Convert a date and print it in the configured date format.
pub fn run(args: ConvertArgs, config: &PaschaConfig) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    let from = parse_calendar(&args.from)?;
    let to = parse_calendar(&args.to)?;
    let raw = parse_date(&args.date)?;
    let date = Date::checked(from, raw.year(), raw.month(), raw.day())
        .with_context(|| format!("{} is not a valid {from} date", args.date))?;
    let settings = build_display_settings(&config.display)?;

    let converted =
        convert(date, from, to).with_context(|| format!("failed to convert {date} to {to}"))?;
    debug!(%date, %converted, %from, %to, "date converted");

    println!(
        "{from} {} = {to} {}",
        settings.format_date(date),
        settings.format_date(converted)
    );
    Ok(())
}
