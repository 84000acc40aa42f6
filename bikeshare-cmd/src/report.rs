//! Full report implementation: load, filter, aggregate, print.

use anyhow::Context;
use bikeshare_data::dashboard::{Dashboard, RentalReport};
use bikeshare_rentals::date_range::DateRange;
use bikeshare_rentals::DATE_FORMAT;
use chrono::NaiveDate;
use log::info;

/// Build a rental report for the requested range and print it.
///
/// Omitted range endpoints fall back to the dataset's full span, matching
/// the dashboard's default date picker. Any load or parse failure aborts
/// the pass; nothing is printed from partial data.
pub fn run_report(
    daily_csv: &str,
    hourly_csv: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let dashboard = Dashboard::load(daily_csv, hourly_csv)?;
    let span = dashboard
        .full_span()
        .context("daily dataset contains no records")?;
    let start = match start_date {
        Some(s) => parse_date(s)?,
        None => span.start,
    };
    let end = match end_date {
        Some(s) => parse_date(s)?,
        None => span.end,
    };
    let range = DateRange::new(start, end);
    if range.is_empty() {
        info!("Range {} to {} matches no dates", range.start, range.end);
    }

    let report = dashboard.recompute(range);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))
}

fn print_report(report: &RentalReport) {
    println!(
        "Rentals from {} to {} ({} days)",
        report.range.start,
        report.range.end,
        report.range.num_days()
    );
    println!("Total rentals:           {}", report.summary.total);
    println!("Average rentals per day: {:.2}", report.summary.average);

    println!("\nDaily rentals");
    for row in &report.daily_rentals {
        println!("  {}  {:>8}", row.date, row.cnt);
    }

    println!("\nRentals by temperature");
    for row in &report.temperature_rentals {
        println!("  {:<8}  {:>8}", row.temp, row.cnt);
    }

    println!("\nRentals by weather condition");
    for row in &report.weather_rentals {
        println!("  {}  {:>8}", row.weathersit, row.cnt);
    }

    println!("\nRentals by user type");
    for row in &report.user_type_by_year {
        println!(
            "  year {}  casual {:>8}  registered {:>8}",
            row.yr, row.casual, row.registered
        );
    }

    println!("\nHourly rentals");
    for row in &report.hourly_rentals {
        println!("  {} {:>2}h  {:>8}", row.date, row.hr, row.cnt);
    }
}
