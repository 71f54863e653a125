//! Annual exempt-budget tracking.
//!
//! Exempt-overtime ("Isenção"/IHT) hours are capped per calendar year.
//! This module computes how much of that budget is already consumed from
//! the stored session history, so the classifier can cap further exempt
//! hours when a new session is finalized. Pure and idempotent for a given
//! snapshot of sessions.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

use crate::config::ThresholdSettings;
use crate::models::WorkSession;

/// Sums the exempt-overtime hours already consumed in the calendar year
/// containing `reference`.
///
/// Sessions are keyed by their clock-in instant; a session clocked in on
/// December 31st counts fully against that year even if it runs past
/// midnight. Negative stored buckets (malformed records) count as zero.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::used_exempt_hours;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let reference = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
/// assert_eq!(used_exempt_hours(&[], reference), Decimal::ZERO);
/// ```
pub fn used_exempt_hours(sessions: &[WorkSession], reference: DateTime<Utc>) -> Decimal {
    let year = reference.year();
    sessions
        .iter()
        .filter(|session| session.clock_in.year() == year)
        .map(|session| session.exempt_overtime_hours.max(Decimal::ZERO))
        .sum()
}

/// Remaining exempt-hours budget for the calendar year containing
/// `reference`: `max(0, annual_exempt_limit − used)`.
pub fn remaining_exempt_budget(
    sessions: &[WorkSession],
    reference: DateTime<Utc>,
    thresholds: &ThresholdSettings,
) -> Decimal {
    let used = used_exempt_hours(sessions, reference);
    (thresholds.annual_exempt_limit - used).max(Decimal::ZERO)
}
