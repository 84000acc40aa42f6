//! Dataset span inspection.

use bikeshare_rentals::daily;
use log::info;

/// Print the first and last date of the daily dataset.
pub fn run_span(daily_csv: &str) -> anyhow::Result<()> {
    let records = daily::normalize_daily(daily::read_daily_csv(daily_csv)?)?;
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        anyhow::bail!("daily dataset contains no records");
    };
    info!("{} daily records in {}", records.len(), daily_csv);
    println!("{} to {}", first.date, last.date);
    Ok(())
}
