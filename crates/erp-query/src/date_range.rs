//! Half-open UTC range normalization for date-only filter bounds.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// A half-open UTC timestamp range `[start, end)` derived from date-only
/// filter bounds.
///
/// Timestamp columns carry a time-of-day component, so a naive `<=` against
/// a bare date silently excludes records written later the same day. The
/// upper bound is therefore normalized to midnight of the *following* day
/// and compared with `<`, which reads as "through the end of the given day"
/// without `::date` casts in SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound.
    pub start: Option<DateTime<Utc>>,
    /// Exclusive upper bound.
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Normalize an optional after/before day pair into a half-open range.
    ///
    /// A missing bound stays unbounded. Supplying the same day for both
    /// bounds captures that entire day.
    pub fn from_bounds(after: Option<NaiveDate>, before: Option<NaiveDate>) -> Self {
        Self {
            start: after.map(day_start),
            end: before.and_then(|day| day.succ_opt()).map(day_start),
        }
    }

    /// Whether neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Midnight UTC at the start of the given calendar day.
fn day_start(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_range_is_half_open() {
        let range = DateRange::from_bounds(Some(date(2026, 1, 20)), Some(date(2026, 1, 20)));
        assert_eq!(
            range.start.unwrap().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "2026-01-20T00:00:00.000Z"
        );
        assert_eq!(
            range.end.unwrap().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "2026-01-21T00:00:00.000Z"
        );
    }

    #[test]
    fn test_upper_bound_rolls_over_month_and_year() {
        let range = DateRange::from_bounds(None, Some(date(2025, 12, 31)));
        assert_eq!(
            range.end.unwrap().to_rfc3339(),
            "2026-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_missing_bounds_stay_unbounded() {
        let range = DateRange::from_bounds(None, None);
        assert!(range.is_unbounded());

        let lower_only = DateRange::from_bounds(Some(date(2026, 3, 1)), None);
        assert!(lower_only.start.is_some());
        assert!(lower_only.end.is_none());
    }
}
