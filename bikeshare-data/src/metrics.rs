use crate::aggregate::DailyTotal;
use serde::Serialize;

/// Headline metrics over a set of daily totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalSummary {
    pub total: u64,
    pub average: f64,
}

/// Sum every daily total and average them per day, rounded half-up to two
/// decimal places.
///
/// An empty input reports zero for both values rather than dividing by
/// zero; an empty filter range degrades gracefully, so its metrics do too.
pub fn total_and_average(daily: &[DailyTotal]) -> RentalSummary {
    if daily.is_empty() {
        return RentalSummary {
            total: 0,
            average: 0.0,
        };
    }
    let total: u64 = daily.iter().map(|row| row.cnt).sum();
    let average = total as f64 / daily.len() as f64;
    RentalSummary {
        total,
        average: (average * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn total(y: i32, m: u32, d: u32, cnt: u64) -> DailyTotal {
        DailyTotal {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            cnt,
        }
    }

    #[test]
    fn test_total_and_average() {
        let daily = vec![total(2023, 1, 1, 100), total(2023, 1, 2, 200)];
        let summary = total_and_average(&daily);
        assert_eq!(summary.total, 300);
        assert_eq!(summary.average, 150.00);
    }

    #[test]
    fn test_average_rounds_half_up() {
        // 5 rentals over 8 days = 0.625, which rounds up to 0.63
        let daily: Vec<DailyTotal> = (1..=8)
            .map(|day| total(2023, 1, day, u64::from(day == 1) * 5))
            .collect();
        let summary = total_and_average(&daily);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.average, 0.63);
    }

    #[test]
    fn test_empty_input_reports_zero() {
        let summary = total_and_average(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average, 0.0);
    }
}
