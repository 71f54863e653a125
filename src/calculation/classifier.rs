//! Session classification into hour buckets.
//!
//! This module produces the three-way split of a session's working hours
//! into regular, exempt-overtime ("Isenção"/IHT) and paid-overtime hours.
//! The split is computed once, at clock-out, and frozen on the stored
//! session record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ThresholdSettings;
use crate::models::WorkSession;

use super::exempt_budget::remaining_exempt_budget;

/// The three-way partition of a session's working hours.
///
/// Invariant: `regular + exempt_overtime + paid_overtime` equals the
/// (clamped, lunch-deducted) working hours the split was computed from,
/// and every bucket is non-negative.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::{HourSplit, classify_hours};
/// use earnings_engine::config::ThresholdSettings;
/// use rust_decimal::Decimal;
///
/// let split = classify_hours(
///     Decimal::from(9),
///     false,
///     &ThresholdSettings::default(),
///     Decimal::from(200),
/// );
/// assert_eq!(split.regular, Decimal::from(8));
/// assert_eq!(split.exempt_overtime, Decimal::ONE);
/// assert_eq!(split.paid_overtime, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourSplit {
    /// Hours at or below the regular threshold.
    pub regular: Decimal,
    /// Hours between the regular and exempt thresholds, budget permitting.
    pub exempt_overtime: Decimal,
    /// Hours paid at overtime rates.
    pub paid_overtime: Decimal,
}

impl HourSplit {
    /// Sum of all three buckets.
    pub fn total(&self) -> Decimal {
        self.regular + self.exempt_overtime + self.paid_overtime
    }
}

/// Classifies a session's working hours into the three hour buckets.
///
/// * Regular hours are capped at the regular threshold.
/// * On a special day (weekend or bank holiday) the exemption regime does
///   not apply: everything above the regular threshold is paid overtime.
/// * With exempt overtime disabled, likewise.
/// * Otherwise hours between the regular and exempt thresholds are exempt
///   overtime, limited by the remaining annual budget. Once the budget is
///   exhausted mid-session, the remainder above the regular threshold
///   becomes paid overtime even below the exempt threshold.
///
/// Negative working hours (lunch exceeding the session duration) and a
/// negative remaining budget both clamp to zero; the split never contains
/// a negative bucket.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::classify_hours;
/// use earnings_engine::config::ThresholdSettings;
/// use rust_decimal::Decimal;
///
/// // Budget exhausted mid-session: only 0.5h of budget left for a
/// // potential 1h of exempt overtime.
/// let split = classify_hours(
///     Decimal::from(9),
///     false,
///     &ThresholdSettings::default(),
///     Decimal::new(5, 1),
/// );
/// assert_eq!(split.regular, Decimal::from(8));
/// assert_eq!(split.exempt_overtime, Decimal::new(5, 1));
/// assert_eq!(split.paid_overtime, Decimal::new(5, 1));
/// ```
pub fn classify_hours(
    working_hours: Decimal,
    is_special_day: bool,
    thresholds: &ThresholdSettings,
    remaining_exempt_budget: Decimal,
) -> HourSplit {
    let hours = working_hours.max(Decimal::ZERO);
    let budget = remaining_exempt_budget.max(Decimal::ZERO);
    let regular_threshold = thresholds.regular_hours_threshold.max(Decimal::ZERO);
    let exempt_threshold = thresholds.exempt_overtime_threshold.max(Decimal::ZERO);

    let regular = hours.min(regular_threshold);
    let beyond_regular = (hours - regular_threshold).max(Decimal::ZERO);

    if is_special_day || !thresholds.enable_exempt_overtime {
        return HourSplit {
            regular,
            exempt_overtime: Decimal::ZERO,
            paid_overtime: beyond_regular,
        };
    }

    let exempt_span = (exempt_threshold - regular_threshold).max(Decimal::ZERO);
    let potential_exempt = beyond_regular.min(exempt_span);

    // Annual cap reached mid-session: the rest above the regular threshold
    // is paid overtime even below the exempt threshold.
    let exempt_overtime = potential_exempt.min(budget);
    let paid_overtime = beyond_regular - exempt_overtime;

    HourSplit {
        regular,
        exempt_overtime,
        paid_overtime,
    }
}

/// Classifies a session being finalized at clock-out.
///
/// Composes the annual exempt-budget tracker with [`classify_hours`]: the
/// remaining budget is read from the already-stored session history for
/// the calendar year containing `clock_in`, then the split is computed.
/// The session lifecycle manager calls this exactly once per session and
/// persists the resulting buckets; they are never re-derived afterwards.
pub fn classify_new_session(
    history: &[WorkSession],
    clock_in: DateTime<Utc>,
    working_hours: Decimal,
    is_special_day: bool,
    thresholds: &ThresholdSettings,
) -> HourSplit {
    let remaining = remaining_exempt_budget(history, clock_in, thresholds);
    let split = classify_hours(working_hours, is_special_day, thresholds, remaining);
    debug!(
        %clock_in,
        working_hours = %working_hours,
        remaining_budget = %remaining,
        regular = %split.regular,
        exempt = %split.exempt_overtime,
        paid = %split.paid_overtime,
        "session classified"
    );
    split
}
