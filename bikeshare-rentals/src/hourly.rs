use crate::error::{RentalError, Result};
use crate::{check_columns, DATE_FORMAT};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use log::info;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Columns `hour.csv` must carry. Extra columns are ignored.
pub const HOURLY_COLUMNS: [&str; 3] = ["dteday", "hr", "cnt"];

/// One row of `hour.csv` as read from disk, date still textual.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHourlyRecord {
    pub dteday: String,
    pub hr: u8,
    pub cnt: u32,
}

/// Rentals for one (day, hour) pair, `hr` in 0..=23.
///
/// For a fixed date the hourly counts sum to that day's daily `cnt`; the
/// two datasets are still aggregated independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub hr: u8,
    pub cnt: u32,
}

impl TryFrom<RawHourlyRecord> for HourlyRecord {
    type Error = RentalError;

    fn try_from(raw: RawHourlyRecord) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&raw.dteday, DATE_FORMAT)
            .map_err(|_| RentalError::DateParse(raw.dteday.clone()))?;
        Ok(HourlyRecord {
            date,
            hr: raw.hr,
            cnt: raw.cnt,
        })
    }
}

/// Read `hour.csv` into raw records. No caching across calls.
pub fn read_hourly_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RawHourlyRecord>> {
    let path_display = path.as_ref().display().to_string();
    let file = std::fs::File::open(path.as_ref()).map_err(|source| RentalError::Io {
        path: path_display.clone(),
        source,
    })?;
    let records = hourly_from_reader(file)?;
    info!("Read {} hourly records from {}", records.len(), path_display);
    Ok(records)
}

/// Parse hourly CSV data from any reader, validating the header first.
pub fn hourly_from_reader<R: Read>(reader: R) -> Result<Vec<RawHourlyRecord>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    check_columns(csv_reader.headers()?, &HOURLY_COLUMNS)?;
    let records = csv_reader
        .deserialize()
        .collect::<std::result::Result<Vec<RawHourlyRecord>, _>>()?;
    Ok(records)
}

/// Parse every `dteday` into a calendar date and sort by date then hour.
pub fn normalize_hourly(raw: Vec<RawHourlyRecord>) -> Result<Vec<HourlyRecord>> {
    let mut records = raw
        .into_iter()
        .map(HourlyRecord::try_from)
        .collect::<Result<Vec<HourlyRecord>>>()?;
    records.sort_by_key(|record| (record.date, record.hr));
    Ok(records)
}
