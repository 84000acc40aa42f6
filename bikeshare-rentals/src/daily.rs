use crate::error::{RentalError, Result};
use crate::{check_columns, DATE_FORMAT};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use log::info;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Columns `day.csv` must carry. Extra columns are ignored.
pub const DAILY_COLUMNS: [&str; 7] = [
    "dteday",
    "temp",
    "weathersit",
    "casual",
    "registered",
    "cnt",
    "yr",
];

/// One row of `day.csv` as read from disk, date still textual.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDailyRecord {
    pub dteday: String,
    pub temp: f64,
    pub weathersit: u8,
    pub casual: u32,
    pub registered: u32,
    pub cnt: u32,
    pub yr: u8,
}

/// A daily rental record with a normalized calendar date.
///
/// `cnt` is the day's total rentals and equals `casual + registered` in the
/// source data. `yr` is 0 for the first dataset year and 1 for the second.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub temp: f64,
    pub weathersit: u8,
    pub casual: u32,
    pub registered: u32,
    pub cnt: u32,
    pub yr: u8,
}

impl TryFrom<RawDailyRecord> for DailyRecord {
    type Error = RentalError;

    fn try_from(raw: RawDailyRecord) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&raw.dteday, DATE_FORMAT)
            .map_err(|_| RentalError::DateParse(raw.dteday.clone()))?;
        Ok(DailyRecord {
            date,
            temp: raw.temp,
            weathersit: raw.weathersit,
            casual: raw.casual,
            registered: raw.registered,
            cnt: raw.cnt,
            yr: raw.yr,
        })
    }
}

/// Read `day.csv` into raw records. No caching across calls.
pub fn read_daily_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RawDailyRecord>> {
    let path_display = path.as_ref().display().to_string();
    let file = std::fs::File::open(path.as_ref()).map_err(|source| RentalError::Io {
        path: path_display.clone(),
        source,
    })?;
    let records = daily_from_reader(file)?;
    info!("Read {} daily records from {}", records.len(), path_display);
    Ok(records)
}

/// Parse daily CSV data from any reader. The header row is validated
/// against [`DAILY_COLUMNS`] before any row is deserialized.
pub fn daily_from_reader<R: Read>(reader: R) -> Result<Vec<RawDailyRecord>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    check_columns(csv_reader.headers()?, &DAILY_COLUMNS)?;
    let records = csv_reader
        .deserialize()
        .collect::<std::result::Result<Vec<RawDailyRecord>, _>>()?;
    Ok(records)
}

/// Parse every `dteday` into a calendar date and sort by date ascending.
///
/// Sorting is for determinism and display; downstream aggregation does not
/// depend on it.
pub fn normalize_daily(raw: Vec<RawDailyRecord>) -> Result<Vec<DailyRecord>> {
    let mut records = raw
        .into_iter()
        .map(DailyRecord::try_from)
        .collect::<Result<Vec<DailyRecord>>>()?;
    records.sort_by_key(|record| record.date);
    Ok(records)
}

#[cfg(test)]
mod test {
    use super::*;

    const DAY_CSV: &str = "\
instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
3,2011-01-03,1,0,1,0,1,1,1,0.196364,0.189405,0.437273,0.248309,120,1229,1349
1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985
2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801
";

    #[test]
    fn test_daily_from_reader() {
        let raw = daily_from_reader(DAY_CSV.as_bytes()).unwrap();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw[0].dteday, "2011-01-03");
        assert_eq!(raw[0].cnt, 1349);
    }

    #[test]
    fn test_normalize_parses_and_sorts() {
        let raw = daily_from_reader(DAY_CSV.as_bytes()).unwrap();
        let records = normalize_daily(raw).unwrap();
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
        assert_eq!(records[2].date, NaiveDate::from_ymd_opt(2011, 1, 3).unwrap());
        assert_eq!(records[0].cnt, 985);
        for record in &records {
            assert_eq!(record.casual + record.registered, record.cnt);
        }
    }

    #[test]
    fn test_missing_column() {
        let csv = "dteday,temp,weathersit,casual,registered,yr\n2011-01-01,0.3,1,5,10,0\n";
        let err = daily_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RentalError::MissingColumn("cnt")));
    }

    #[test]
    fn test_unparseable_date() {
        let csv =
            "dteday,temp,weathersit,casual,registered,cnt,yr\n01/01/2011,0.3,1,5,10,15,0\n";
        let raw = daily_from_reader(csv.as_bytes()).unwrap();
        let err = normalize_daily(raw).unwrap_err();
        assert!(matches!(err, RentalError::DateParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = read_daily_csv("no/such/day.csv").unwrap_err();
        assert!(matches!(err, RentalError::Io { .. }));
    }
}
