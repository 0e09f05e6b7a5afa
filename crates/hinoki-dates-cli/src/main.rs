mod args;
mod config;
mod output;

use std::process;

use anyhow::Result;
use clap::Parser;
use hinoki_dates::{change_period, is_overdue, parse_date, period_bounds};

use crate::args::{Cli, Command};
use crate::config::Config;
use crate::output::OutputFormat;

/// Exit code for malformed input such as an unparseable expression.
const EXIT_INPUT: i32 = 1;
/// Exit code for an unreadable or invalid configuration file.
const EXIT_CONFIG: i32 = 2;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(EXIT_CONFIG);
        }
    };

    match run(cli, &config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(EXIT_INPUT);
        }
    }
}

fn run(cli: Cli, config: &Config) -> Result<String> {
    let format = OutputFormat::from_flags(cli.json, config.output.json);
    let clock = config.clock(cli.today)?;

    Ok(match cli.command {
        Command::Parse { expression } => {
            let raw = expression.join(" ");
            let resolved = parse_date(clock.today(), &raw)?;
            output::parsed(&raw, resolved, format)
        }
        Command::Show { date, granularity } => output::shown(date, granularity, format),
        Command::Step {
            date,
            granularity,
            by,
        } => output::stepped(change_period(date, granularity, by), granularity, format),
        Command::Range { date, granularity } => {
            output::range(granularity, period_bounds(date, granularity), format)
        }
        Command::Overdue { date, granularity } => {
            let today = clock.today();
            let overdue = is_overdue(Some(date), Some(granularity), today);
            log::debug!("{date} ({granularity}) against {today}: overdue={overdue}");
            output::overdue(date, granularity, today, overdue, format)
        }
    })
}
