//! Command-line argument definitions using clap derive.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use hinoki_dates::Granularity;

#[derive(Parser, Debug)]
#[command(
    name = "hinoki-dates",
    version,
    about = "Resolve goal date expressions and timeframe periods"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Override config file path.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) instead of today's date.
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Log parser decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a date expression ("next fri", "q2", "27", "15 mar 2026").
    Parse {
        /// The expression; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
    },

    /// Render a date for display at a granularity.
    Show {
        date: NaiveDate,
        /// day, week, month, quarter, year or life.
        granularity: Granularity,
    },

    /// Step a date by whole periods.
    Step {
        date: NaiveDate,
        granularity: Granularity,
        /// Number of periods; negative steps backwards.
        #[arg(allow_hyphen_values = true)]
        by: i32,
    },

    /// Print the first and last day of the period containing a date.
    Range {
        date: NaiveDate,
        granularity: Granularity,
    },

    /// Report whether a goal dated at this period is overdue.
    Overdue {
        date: NaiveDate,
        granularity: Granularity,
    },
}
