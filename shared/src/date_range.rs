//! Check-in / check-out selection.
//!
//! The selector is a small tri-state machine over `{check_in, check_out}`:
//! nothing selected, only check-in selected, or a complete range. Disabled
//! days (past or unavailable) are filtered out before they reach it.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Selected stay. When both ends are set, `check_in < check_out` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
}

impl DateRange {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a range from possibly inconsistent parts (e.g. read back from
    /// storage). A check-out without a check-in, or one that is not after the
    /// check-in, is dropped.
    pub fn from_parts(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        let check_out = match (check_in, check_out) {
            (Some(start), Some(end)) if end > start => Some(end),
            _ => None,
        };
        Self { check_in, check_out }
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Number of nights, `None` until the range is complete.
    ///
    /// Both ends are whole days, so the ceiling of the day difference is the
    /// difference itself.
    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }

    /// Whether `day` is one of the selected endpoints
    pub fn is_endpoint(&self, day: NaiveDate) -> bool {
        self.check_in == Some(day) || self.check_out == Some(day)
    }

    /// Strictly between check-in and check-out
    pub fn is_in_range(&self, day: NaiveDate) -> bool {
        match (self.check_in, self.check_out) {
            (Some(start), Some(end)) => start < day && day < end,
            _ => false,
        }
    }
}

/// Dates the backend reports as fully booked. Read-only on the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnavailableDates(BTreeSet<NaiveDate>);

impl UnavailableDates {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self(dates.into_iter().collect())
    }

    /// Parse the `YYYY-MM-DD` strings returned by the API, skipping malformed entries
    pub fn from_iso_strings<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dates = BTreeSet::new();
        for value in raw {
            let value = value.as_ref();
            match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
                Ok(date) => {
                    dates.insert(date);
                }
                Err(e) => log::warn!("ignoring malformed unavailable date {:?}: {}", value, e),
            }
        }
        Self(dates)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.0.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A day can be clicked when it is not in the past and not fully booked
pub fn is_selectable(day: NaiveDate, today: NaiveDate, unavailable: &UnavailableDates) -> bool {
    day >= today && !unavailable.contains(day)
}

/// What a click did to the range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Started a new range (nothing or a complete range was selected before)
    CheckInSet,
    /// Completed the range
    CheckOutSet,
    /// Clicked on or before the pending check-in, which moved it
    CheckInReplaced,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeSelector {
    range: DateRange,
}

impl DateRangeSelector {
    pub fn new(range: DateRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn select(&mut self, day: NaiveDate) -> SelectionOutcome {
        match (self.range.check_in, self.range.check_out) {
            (None, _) | (Some(_), Some(_)) => {
                self.range = DateRange {
                    check_in: Some(day),
                    check_out: None,
                };
                SelectionOutcome::CheckInSet
            }
            (Some(start), None) if day > start => {
                self.range.check_out = Some(day);
                SelectionOutcome::CheckOutSet
            }
            (Some(_), None) => {
                self.range.check_in = Some(day);
                SelectionOutcome::CheckInReplaced
            }
        }
    }

    pub fn clear(&mut self) {
        self.range = DateRange::empty();
    }
}

/// Format a date for storage (`YYYY-MM-DD`)
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Read a stored date. Accepts plain dates and full RFC 3339 timestamps, of
/// which only the calendar date is kept.
pub fn parse_stored_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_first_click_sets_check_in() {
        let mut selector = DateRangeSelector::default();
        assert_eq!(selector.select(d(2026, 3, 10)), SelectionOutcome::CheckInSet);
        assert_eq!(selector.range().check_in(), Some(d(2026, 3, 10)));
        assert_eq!(selector.range().check_out(), None);
    }

    #[test]
    fn test_later_click_completes_range() {
        let mut selector = DateRangeSelector::default();
        selector.select(d(2026, 3, 10));
        assert_eq!(selector.select(d(2026, 3, 12)), SelectionOutcome::CheckOutSet);
        assert!(selector.range().is_complete());
        assert_eq!(selector.range().nights(), Some(2));
    }

    #[test]
    fn test_earlier_click_replaces_check_in() {
        let mut selector = DateRangeSelector::default();
        selector.select(d(2026, 3, 12));
        assert_eq!(selector.select(d(2026, 3, 10)), SelectionOutcome::CheckInReplaced);
        assert_eq!(selector.range(), DateRange::from_parts(Some(d(2026, 3, 10)), None));
    }

    #[test]
    fn test_same_day_click_keeps_single_check_in() {
        let mut selector = DateRangeSelector::default();
        selector.select(d(2026, 3, 10));
        assert_eq!(selector.select(d(2026, 3, 10)), SelectionOutcome::CheckInReplaced);
        assert_eq!(selector.range().check_out(), None);
    }

    #[test]
    fn test_click_after_complete_range_restarts() {
        let mut selector = DateRangeSelector::default();
        selector.select(d(2026, 3, 10));
        selector.select(d(2026, 3, 12));
        assert_eq!(selector.select(d(2026, 3, 1)), SelectionOutcome::CheckInSet);
        assert_eq!(selector.range().check_in(), Some(d(2026, 3, 1)));
        assert_eq!(selector.range().check_out(), None);
    }

    #[test]
    fn test_range_never_inverts() {
        let clicks = [15, 3, 20, 1, 1, 30, 29, 2, 2, 28];
        let mut selector = DateRangeSelector::default();
        for day in clicks {
            selector.select(d(2026, 4, day));
            let range = selector.range();
            if let (Some(start), Some(end)) = (range.check_in(), range.check_out()) {
                assert!(start < end);
            }
        }
    }

    #[test]
    fn test_from_parts_drops_invalid_check_out() {
        let range = DateRange::from_parts(Some(d(2026, 3, 12)), Some(d(2026, 3, 10)));
        assert_eq!(range.check_out(), None);
        let range = DateRange::from_parts(None, Some(d(2026, 3, 10)));
        assert_eq!(range, DateRange::empty());
    }

    #[test]
    fn test_in_range_excludes_endpoints() {
        let range = DateRange::from_parts(Some(d(2026, 3, 10)), Some(d(2026, 3, 13)));
        assert!(!range.is_in_range(d(2026, 3, 10)));
        assert!(range.is_in_range(d(2026, 3, 11)));
        assert!(range.is_in_range(d(2026, 3, 12)));
        assert!(!range.is_in_range(d(2026, 3, 13)));
        assert!(range.is_endpoint(d(2026, 3, 13)));
    }

    #[test]
    fn test_unavailable_dates_skip_malformed() {
        let dates = UnavailableDates::from_iso_strings(["2026-03-01", "not-a-date", "2026-03-05"]);
        assert_eq!(dates.len(), 2);
        assert!(dates.contains(d(2026, 3, 5)));
    }

    #[test]
    fn test_is_selectable() {
        let today = d(2026, 2, 26);
        let unavailable = UnavailableDates::new([d(2026, 3, 1)]);
        assert!(!is_selectable(d(2026, 2, 25), today, &unavailable));
        assert!(is_selectable(today, today, &unavailable));
        assert!(!is_selectable(d(2026, 3, 1), today, &unavailable));
        assert!(is_selectable(d(2026, 3, 2), today, &unavailable));
    }

    #[test]
    fn test_parse_stored_date_formats() {
        assert_eq!(parse_stored_date("2026-03-10"), Some(d(2026, 3, 10)));
        assert_eq!(parse_stored_date("2026-03-10T00:00:00.000Z"), Some(d(2026, 3, 10)));
        assert_eq!(parse_stored_date("2026-03-10T09:00:00+09:00"), Some(d(2026, 3, 10)));
        assert_eq!(parse_stored_date("garbage"), None);
        assert_eq!(to_iso(d(2026, 1, 5)), "2026-01-05");
    }
}
