mod calculate_cmd;
mod cli;
mod config;
mod convert;
mod convert_cmd;
mod logging;
mod view;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::PaschaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = PaschaConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Calculate(args) => calculate_cmd::run(args, &config),
        Command::Convert(args) => convert_cmd::run(args, &config),
    }
}
