use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One row of the sales feed, exactly as `GET /sales` returns it.
///
/// The feed guarantees no unique identifier; table ordinals are assigned at
/// presentation time from the filtered position. `date` is kept as the raw
/// wire string because the feed mixes plain ISO dates ("2024-01-02") with
/// RFC 3339 timestamps; parsing is lazy and fail-soft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub product: String,
    /// Units sold. Non-negative by convention, never validated — negative
    /// values pass through every sum unguarded.
    pub sales: i64,
    pub revenue: f64,
    pub date: String,
}

impl SalesRecord {
    /// Parse the wire date. `None` means the record is malformed and every
    /// date-aware stage must skip it rather than fail the pipeline.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_wire_date(&self.date)
    }
}

/// Accepts "2024-01-02" or any RFC 3339 timestamp; anything else is `None`.
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

/// Inclusive [start, end] reporting window.
///
/// An inverted window (start after end) is accepted and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whole calendar months from start to end, truncated toward zero:
    /// 2024-01-15 → 2024-03-14 is 1, 2024-01-15 → 2024-03-15 is 2.
    /// Negative for inverted windows.
    pub fn whole_months(&self) -> i32 {
        let mut months = (self.end.year() - self.start.year()) * 12
            + (month_of(self.end) - month_of(self.start));
        if months > 0 && day_of(self.end) < day_of(self.start) {
            months -= 1;
        } else if months < 0 && day_of(self.end) > day_of(self.start) {
            months += 1;
        }
        months
    }

    /// Whole calendar years from start to end, truncated toward zero.
    pub fn whole_years(&self) -> i32 {
        let mut years = self.end.year() - self.start.year();
        if years > 0 && (month_of(self.end), day_of(self.end)) < (month_of(self.start), day_of(self.start)) {
            years -= 1;
        } else if years < 0 && (month_of(self.end), day_of(self.end)) > (month_of(self.start), day_of(self.start)) {
            years += 1;
        }
        years
    }
}

fn month_of(d: NaiveDate) -> i32 {
    d.month() as i32
}

fn day_of(d: NaiveDate) -> i32 {
    d.day() as i32
}
