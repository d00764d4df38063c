use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pascha (Easter) date calculator.
#[derive(Parser)]
#[command(
    name = "pascha",
    version,
    about = "Pascha (Easter) date calculator for the Julian, Gregorian and Revised Julian calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: pascha.toml, if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Calculate Pascha, a movable feast, or a day/week count for a year.
    Calculate(CalculateArgs),
    /// Convert a date between calendars.
    Convert(ConvertArgs),
}

/// Arguments for the `calculate` subcommand.
#[derive(clap::Args)]
pub struct CalculateArgs {
    /// Year to calculate for (0 is 1 BC, negative years allowed).
    #[arg(allow_hyphen_values = true)]
    pub year: i64,

    /// Computus: julian or gregorian. Overrides the config.
    #[arg(short, long)]
    pub method: Option<String>,

    /// Output calendar: julian, gregorian or revised-julian. Overrides the config.
    #[arg(long = "calendar", visible_alias = "cal")]
    pub calendar: Option<String>,

    /// What to calculate: pascha, days-until, weeks-between, meatfare,
    /// cheesefare, ash-wednesday, midfeast-pentecost, leavetaking-pascha,
    /// ascension or pentecost.
    #[arg(short, long, default_value = "pascha")]
    pub target: String,

    /// Number the year from the Byzantine creation epoch.
    #[arg(short, long)]
    pub byzantine: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date as YYYY-MM-DD (a leading '-' marks a negative year).
    #[arg(allow_hyphen_values = true)]
    pub date: String,

    /// Calendar the date is given in.
    #[arg(short, long)]
    pub from: String,

    /// Calendar to convert to.
    #[arg(short, long)]
    pub to: String,
}
