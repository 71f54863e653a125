//! Date range model.
//!
//! This module contains the [`DateRange`] type used to select the sessions
//! that participate in a period statement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An inclusive window of instants used to filter sessions.
///
/// Sessions belong to the range when their clock-in falls within
/// `[start, end]`, both bounds inclusive.
///
/// # Example
///
/// ```
/// use earnings_engine::models::DateRange;
/// use chrono::{TimeZone, Utc};
///
/// let range = DateRange::new(
///     Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap(),
/// );
/// assert!(range.contains(Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()));
/// assert!(!range.contains(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// The start of the range (inclusive, epoch milliseconds on the wire).
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start: DateTime<Utc>,
    /// The end of the range (inclusive, epoch milliseconds on the wire).
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a new date range.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Checks whether an instant falls within this range (inclusive).
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}
