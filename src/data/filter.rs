//! Inclusive calendar-date range filtering.
//!
//! Dates are compared as calendar days. Any time-of-day component on a bound
//! or a record date is dropped before comparing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::source::Record;

/// Formats accepted for a date carrying a time of day, normalized to the date.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a `YYYY-MM-DD` date, tolerating a trailing time of day.
///
/// Returns `None` for empty or unparseable input.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// One edge of a date range, as read from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bound {
    /// Nothing entered.
    #[default]
    Absent,
    Date(NaiveDate),
    /// Something entered that isn't a date. Matches no record.
    Invalid,
}

impl From<Option<NaiveDate>> for Bound {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Bound::Absent, Bound::Date)
    }
}

/// An optional pair of inclusive date bounds.
///
/// The range only filters when both bounds are present; a missing bound on
/// either side lets every record through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Bound,
    pub end: Bound,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Build a range from raw user input.
    ///
    /// Empty input means "no bound". Input that is present but not a date
    /// becomes [`Bound::Invalid`] and is logged.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: parse_bound("start", start),
            end: parse_bound("end", end),
        }
    }

    /// Returns true if both bounds were entered, valid or not.
    pub fn is_bounded(&self) -> bool {
        self.start != Bound::Absent && self.end != Bound::Absent
    }

    /// Check whether a calendar date lies inside the range.
    ///
    /// An inverted range (start after end) or an invalid bound contains
    /// nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Bound::Absent, _) | (_, Bound::Absent) => true,
            (Bound::Date(start), Bound::Date(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    /// Check whether a record passes the range.
    ///
    /// A record with an unparseable date never passes a bounded range.
    pub fn matches(&self, record: &Record) -> bool {
        if !self.is_bounded() {
            return true;
        }
        match record.calendar_date() {
            Some(date) => self.contains(date),
            None => {
                tracing::debug!(date = %record.date, title = %record.title, "record has no usable date");
                false
            }
        }
    }
}

fn parse_bound(which: &str, raw: Option<&str>) -> Bound {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Bound::Absent;
    };
    match parse_calendar_date(raw) {
        Some(date) => Bound::Date(date),
        None => {
            tracing::warn!(bound = which, value = raw, "unparseable date bound matches nothing");
            Bound::Invalid
        }
    }
}

/// Filter records to those inside `range`, keeping feed order.
pub fn filter(records: Vec<Record>, range: &DateRange) -> Vec<Record> {
    if !range.is_bounded() {
        return records;
    }
    records.into_iter().filter(|r| range.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MediaType;

    fn record(date: &str) -> Record {
        Record {
            date: date.to_string(),
            title: format!("APOD {}", date),
            explanation: String::new(),
            media_type: MediaType::Image,
            url: format!("https://example.com/{}.jpg", date),
            hd_url: None,
            thumbnail_url: None,
            copyright: None,
        }
    }

    fn five_days() -> Vec<Record> {
        (1..=5).map(|d| record(&format!("2023-01-0{}", d))).collect()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.date.as_str()).collect()
    }

    #[test]
    fn test_unbounded_is_identity() {
        let records = vec![record("2023-01-03"), record("2022-12-31"), record("2023-01-01")];

        let out = filter(records.clone(), &DateRange::default());
        assert_eq!(out, records);

        let out = filter(records.clone(), &DateRange::parse(Some(""), Some("")));
        assert_eq!(out, records);
    }

    #[test]
    fn test_one_bound_missing_is_identity() {
        let records = five_days();

        let only_start = DateRange::parse(Some("2023-01-04"), None);
        assert_eq!(filter(records.clone(), &only_start), records);

        let only_end = DateRange::parse(Some(""), Some("2023-01-02"));
        assert_eq!(filter(records.clone(), &only_end), records);
    }

    #[test]
    fn test_inclusive_bounds() {
        let range = DateRange::parse(Some("2023-01-02"), Some("2023-01-04"));

        let out = filter(five_days(), &range);
        assert_eq!(dates(&out), vec!["2023-01-02", "2023-01-03", "2023-01-04"]);
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(Some(ymd(2023, 1, 3)), Some(ymd(2023, 1, 3)));

        let out = filter(five_days(), &range);
        assert_eq!(dates(&out), vec!["2023-01-03"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange::parse(Some("2023-01-04"), Some("2023-01-02"));

        assert!(filter(five_days(), &range).is_empty());
    }

    #[test]
    fn test_keeps_feed_order() {
        let records = vec![record("2023-01-04"), record("2023-01-02"), record("2023-01-03")];
        let range = DateRange::parse(Some("2023-01-01"), Some("2023-01-31"));

        let out = filter(records, &range);
        assert_eq!(dates(&out), vec!["2023-01-04", "2023-01-02", "2023-01-03"]);
    }

    #[test]
    fn test_time_of_day_is_normalized() {
        assert_eq!(parse_calendar_date("2023-01-02T23:59:59"), Some(ymd(2023, 1, 2)));
        assert_eq!(parse_calendar_date("2023-01-02 08:30"), Some(ymd(2023, 1, 2)));
        assert_eq!(parse_calendar_date("2023-01-02T10:00:00Z"), Some(ymd(2023, 1, 2)));

        // An end bound late in the day still includes records on that date.
        let range = DateRange::parse(Some("2023-01-02T18:00:00"), Some("2023-01-04T00:00:00"));
        let out = filter(five_days(), &range);
        assert_eq!(dates(&out), vec!["2023-01-02", "2023-01-03", "2023-01-04"]);
    }

    #[test]
    fn test_unparseable_bound_matches_nothing() {
        // A half-typed date in the header input
        let range = DateRange::parse(Some("2023-01"), Some("2023-01-02"));
        assert_eq!(range.start, Bound::Invalid);
        assert_eq!(range.end, Bound::Date(ymd(2023, 1, 2)));
        assert!(range.is_bounded());
        assert!(filter(five_days(), &range).is_empty());

        let range = DateRange::parse(Some("2023-01-01"), Some("yesterday"));
        assert!(filter(five_days(), &range).is_empty());
    }

    #[test]
    fn test_missing_bound_wins_over_invalid_one() {
        let range = DateRange::parse(Some("yesterday"), None);
        assert!(!range.is_bounded());
        assert_eq!(filter(five_days(), &range).len(), 5);
    }

    #[test]
    fn test_unparseable_record_date_is_excluded() {
        let records = vec![record("2023-01-02"), record("not a date")];
        let range = DateRange::parse(Some("2023-01-01"), Some("2023-01-31"));

        let out = filter(records, &range);
        assert_eq!(dates(&out), vec!["2023-01-02"]);
    }
}
