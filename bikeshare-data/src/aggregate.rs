//! Grouped aggregations over daily and hourly rental records.
//!
//! Every function here is a plain partition-then-sum: duplicate keys have
//! their counts summed rather than treated as an error, and each output is
//! ordered by its grouping key ascending.

use bikeshare_rentals::daily::DailyRecord;
use bikeshare_rentals::date_range::DateRange;
use bikeshare_rentals::hourly::HourlyRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Total rentals on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub cnt: u64,
}

/// Total rentals observed at one normalized temperature value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureTotal {
    pub temp: f64,
    pub cnt: u64,
}

/// Total rentals under one weather situation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherTotal {
    pub weathersit: u8,
    pub cnt: u64,
}

/// Casual and registered rental totals for one dataset year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTypeTotal {
    pub yr: u8,
    pub casual: u64,
    pub registered: u64,
}

/// Total rentals for one (date, hour) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyTotal {
    pub date: NaiveDate,
    pub hr: u8,
    pub cnt: u64,
}

/// Keep the records whose date falls within the range, inclusive on both
/// ends. Returns a new vector; the input is never mutated. An inverted
/// range (`start > end`) yields an empty vector rather than an error.
pub fn filter_by_date_range(records: &[DailyRecord], range: DateRange) -> Vec<DailyRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.date))
        .cloned()
        .collect()
}

/// Group daily records by date and sum `cnt`, date ascending.
pub fn daily_totals(records: &[DailyRecord]) -> Vec<DailyTotal> {
    let mut totals: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.date).or_default() += u64::from(record.cnt);
    }
    totals
        .into_iter()
        .map(|(date, cnt)| DailyTotal { date, cnt })
        .collect()
}

/// Group by normalized temperature and sum `cnt`, temperature ascending.
///
/// Temperatures are grouped by exact value; the bit pattern stands in as
/// the map key since f64 itself cannot be one.
pub fn totals_by_temperature(records: &[DailyRecord]) -> Vec<TemperatureTotal> {
    let mut totals: BTreeMap<u64, u64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.temp.to_bits()).or_default() += u64::from(record.cnt);
    }
    let mut rows: Vec<TemperatureTotal> = totals
        .into_iter()
        .map(|(bits, cnt)| TemperatureTotal {
            temp: f64::from_bits(bits),
            cnt,
        })
        .collect();
    rows.sort_by(|a, b| a.temp.total_cmp(&b.temp));
    rows
}

/// Group by weather situation code and sum `cnt`, code ascending.
pub fn totals_by_weather(records: &[DailyRecord]) -> Vec<WeatherTotal> {
    let mut totals: BTreeMap<u8, u64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.weathersit).or_default() += u64::from(record.cnt);
    }
    totals
        .into_iter()
        .map(|(weathersit, cnt)| WeatherTotal { weathersit, cnt })
        .collect()
}

/// Group by dataset year and sum casual and registered counts
/// independently within each year.
pub fn totals_by_user_type(records: &[DailyRecord]) -> Vec<UserTypeTotal> {
    let mut totals: BTreeMap<u8, (u64, u64)> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.yr).or_default();
        entry.0 += u64::from(record.casual);
        entry.1 += u64::from(record.registered);
    }
    totals
        .into_iter()
        .map(|(yr, (casual, registered))| UserTypeTotal {
            yr,
            casual,
            registered,
        })
        .collect()
}

/// Group hourly records by (date, hour) and sum `cnt`, ordered by date
/// then hour ascending.
pub fn hourly_totals(records: &[HourlyRecord]) -> Vec<HourlyTotal> {
    let mut totals: BTreeMap<(NaiveDate, u8), u64> = BTreeMap::new();
    for record in records {
        *totals.entry((record.date, record.hr)).or_default() += u64::from(record.cnt);
    }
    totals
        .into_iter()
        .map(|((date, hr), cnt)| HourlyTotal { date, hr, cnt })
        .collect()
}
