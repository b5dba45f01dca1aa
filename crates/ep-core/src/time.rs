//! Date model.
//!
//! All times in this layer are calendar dates.  Bundled datasets and imports
//! write ISO `%Y-%m-%d`; [`parse_date`] additionally accepts a full RFC 3339
//! date-time and truncates it to the date, since exported datasets from other
//! tools commonly carry midnight timestamps.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A closed date interval, `begin <= end` by convention.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DateRange {
    pub begin: NaiveDate,
    pub end:   NaiveDate,
}

impl DateRange {
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Self {
        Self { begin, end }
    }

    /// Whether `date` falls inside the range (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.begin <= date && date <= self.end
    }
}

/// Parse a date from an ISO `%Y-%m-%d` string or an RFC 3339 date-time.
///
/// Returns `None` when the text is neither.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
