//! The pipeline context handed to the presentation layer.
//!
//! A [`Dashboard`] owns both datasets for the lifetime of the process and
//! rebuilds every derived table on each [`recompute`](Dashboard::recompute)
//! call. There is no memoization: the filter changed, so everything is
//! computed fresh from the records held here.

use crate::aggregate::{
    self, DailyTotal, HourlyTotal, TemperatureTotal, UserTypeTotal, WeatherTotal,
};
use crate::metrics::{self, RentalSummary};
use bikeshare_rentals::daily::{self, DailyRecord};
use bikeshare_rentals::date_range::DateRange;
use bikeshare_rentals::error::Result;
use bikeshare_rentals::hourly::{self, HourlyRecord};
use itertools::Itertools;
use log::info;
use serde::Serialize;
use std::path::Path;

/// Both normalized datasets, read exactly once at construction.
pub struct Dashboard {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
}

/// Everything one render pass needs: the five derived tables plus the
/// headline metrics. Built fresh per call and discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalReport {
    pub range: DateRange,
    pub summary: RentalSummary,
    pub daily_rentals: Vec<DailyTotal>,
    pub temperature_rentals: Vec<TemperatureTotal>,
    pub weather_rentals: Vec<WeatherTotal>,
    pub user_type_by_year: Vec<UserTypeTotal>,
    pub hourly_rentals: Vec<HourlyTotal>,
}

impl Dashboard {
    /// Load and normalize both datasets from disk.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(daily_path: P, hourly_path: Q) -> Result<Self> {
        let daily = daily::normalize_daily(daily::read_daily_csv(daily_path)?)?;
        let hourly = hourly::normalize_hourly(hourly::read_hourly_csv(hourly_path)?)?;
        Ok(Dashboard { daily, hourly })
    }

    /// First and last date of the daily dataset, or None when it is empty.
    /// Chart front-ends use this as the default filter range.
    pub fn full_span(&self) -> Option<DateRange> {
        self.daily
            .iter()
            .map(|record| record.date)
            .minmax()
            .into_option()
            .map(|(start, end)| DateRange::new(start, end))
    }

    /// Rebuild every derived table for the given range.
    ///
    /// The range filter applies to the daily tables; the hourly series
    /// always covers the whole hourly dataset.
    pub fn recompute(&self, range: DateRange) -> RentalReport {
        let filtered = aggregate::filter_by_date_range(&self.daily, range);
        info!(
            "{} of {} daily records between {} and {}",
            filtered.len(),
            self.daily.len(),
            range.start,
            range.end
        );
        let daily_rentals = aggregate::daily_totals(&filtered);
        let summary = metrics::total_and_average(&daily_rentals);
        RentalReport {
            range,
            summary,
            daily_rentals,
            temperature_rentals: aggregate::totals_by_temperature(&filtered),
            weather_rentals: aggregate::totals_by_weather(&filtered),
            user_type_by_year: aggregate::totals_by_user_type(&filtered),
            hourly_rentals: aggregate::hourly_totals(&self.hourly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Dashboard;
    use bikeshare_rentals::date_range::DateRange;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn load_fixtures() -> Dashboard {
        Dashboard::load("fixtures/day.csv", "fixtures/hour.csv").unwrap()
    }

    #[test]
    fn test_full_span() {
        let dashboard = load_fixtures();
        let span = dashboard.full_span().unwrap();
        assert_eq!(span.start, date(2011, 1, 1));
        assert_eq!(span.end, date(2012, 1, 1));
    }

    #[test]
    fn test_full_span_empty_dataset() {
        let dashboard = Dashboard {
            daily: Vec::new(),
            hourly: Vec::new(),
        };
        assert!(dashboard.full_span().is_none());
    }

    #[test]
    fn test_recompute_full_span() {
        let dashboard = load_fixtures();
        let span = dashboard.full_span().unwrap();
        let report = dashboard.recompute(span);

        assert_eq!(report.daily_rentals.len(), 6);
        assert_eq!(report.summary.total, 8591);
        assert_eq!(report.summary.average, 1431.83);

        // one user type row per dataset year
        assert_eq!(report.user_type_by_year.len(), 2);
        assert_eq!(report.user_type_by_year[0].yr, 0);
        assert_eq!(report.user_type_by_year[0].casual, 772);
        assert_eq!(report.user_type_by_year[0].registered, 5525);
        assert_eq!(report.user_type_by_year[1].yr, 1);

        // hourly series covers the whole hourly dataset
        assert_eq!(report.hourly_rentals.len(), 7);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let dashboard = load_fixtures();
        let range = DateRange::new(date(2011, 1, 2), date(2011, 1, 4));
        let first = dashboard.recompute(range);
        let second = dashboard.recompute(range);
        assert_eq!(first, second);
    }

    #[test]
    fn test_recompute_inverted_range() {
        let dashboard = load_fixtures();
        let range = DateRange::new(date(2011, 1, 4), date(2011, 1, 2));
        let report = dashboard.recompute(range);
        assert!(report.daily_rentals.is_empty());
        assert!(report.weather_rentals.is_empty());
        assert_eq!(report.summary.total, 0);
        assert_eq!(report.summary.average, 0.0);
        // the hourly table does not depend on the daily filter
        assert_eq!(report.hourly_rentals.len(), 7);
    }

    #[test]
    fn test_recompute_single_day() {
        let dashboard = load_fixtures();
        let day = date(2011, 1, 3);
        let report = dashboard.recompute(DateRange::new(day, day));
        assert_eq!(report.daily_rentals.len(), 1);
        assert_eq!(report.daily_rentals[0].date, day);
        assert_eq!(report.daily_rentals[0].cnt, 1349);
    }
}
