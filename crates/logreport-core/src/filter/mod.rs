mod date;

pub use date::{parse_target_date, parse_timestamp_date};

use crate::record::{Record, RecordSet};
use chrono::NaiveDate;
use serde_json::Value;

/// Restricts records to a single calendar date.
///
/// An inactive filter (no target date) passes every record through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    target: Option<NaiveDate>,
}

impl DateFilter {
    /// Create a filter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter that keeps records dated `date`
    pub fn on(date: NaiveDate) -> Self {
        Self { target: Some(date) }
    }

    /// Build a filter from an optional `YYYY-MM-DD` string.
    ///
    /// A value that does not parse disables filtering instead of failing.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::new();
        };

        match parse_target_date(raw) {
            Some(date) => Self::on(date),
            None => {
                tracing::debug!("Ignoring date filter {:?}: expected YYYY-MM-DD", raw);
                Self::new()
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Check whether a record's `@timestamp` falls on the target date.
    ///
    /// Records without a timestamp, or with one that is not an ISO-8601
    /// string, never match an active filter.
    pub fn matches(&self, record: &Record) -> bool {
        let Some(target) = self.target else {
            return true;
        };

        record
            .timestamp()
            .and_then(Value::as_str)
            .and_then(parse_timestamp_date)
            .is_some_and(|date| date == target)
    }

    /// Keep matching records, preserving their order
    pub fn apply(&self, records: RecordSet) -> RecordSet {
        if !self.is_active() {
            return records;
        }

        let before = records.len();
        let filtered: RecordSet = records.into_iter().filter(|r| self.matches(r)).collect();

        tracing::debug!(
            "Date filter kept {} of {} records",
            filtered.len(),
            before
        );

        filtered
    }
}

/// Filter records to the date given as `YYYY-MM-DD`, if any
pub fn filter_by_date(records: RecordSet, date: Option<&str>) -> RecordSet {
    DateFilter::parse(date).apply(records)
}
