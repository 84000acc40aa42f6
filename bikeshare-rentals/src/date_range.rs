use chrono::NaiveDate;
use serde::Serialize;

/// An inclusive calendar date range used to filter the daily dataset.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// True when the date falls within the range, inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// A range with `start > end` matches no dates at all.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days covered, inclusive; zero for an empty range.
    pub fn num_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }
}
