//! Command implementations for the bike share CLI.
//!
//! Provides subcommands for reporting rental aggregates over a date range
//! and inspecting the span of a daily dataset.

use clap::Subcommand;

pub mod report;
pub mod span;

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate rentals over a date range and print the report
    Report {
        /// Path to the daily rentals CSV (day.csv)
        #[arg(short = 'd', long)]
        daily_csv: String,

        /// Path to the hourly rentals CSV (hour.csv)
        #[arg(short = 'r', long)]
        hourly_csv: String,

        /// Start of the range, YYYY-MM-DD (defaults to the first date in the dataset)
        #[arg(long)]
        start_date: Option<String>,

        /// End of the range, YYYY-MM-DD (defaults to the last date in the dataset)
        #[arg(long)]
        end_date: Option<String>,

        /// Emit the report as JSON instead of text tables
        #[arg(long)]
        json: bool,
    },

    /// Print the first and last date of the daily dataset
    Span {
        /// Path to the daily rentals CSV (day.csv)
        #[arg(short = 'd', long)]
        daily_csv: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Report {
            daily_csv,
            hourly_csv,
            start_date,
            end_date,
            json,
        } => report::run_report(
            &daily_csv,
            &hourly_csv,
            start_date.as_deref(),
            end_date.as_deref(),
            json,
        ),
        Command::Span { daily_csv } => span::run_span(&daily_csv),
    }
}
