//! Work session model.
//!
//! This module defines the [`WorkSession`] struct: a finalized unit of work
//! with a clock-in/clock-out pair and the hour buckets frozen at clock-out
//! time. Field names on the wire are camelCase with epoch-millisecond
//! instants, matching the host application's document store.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// A finalized unit of work.
///
/// The three hour buckets (`regular_hours`, `exempt_overtime_hours`,
/// `paid_overtime_hours`) partition the session's working hours (total
/// duration minus lunch) and are frozen when the session is finalized at
/// clock-out, using the annual exempt-budget snapshot available then. The
/// engine never re-derives buckets from raw timestamps after the fact.
///
/// # Example
///
/// ```
/// use earnings_engine::models::WorkSession;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let session = WorkSession {
///     id: "session_001".to_string(),
///     clock_in: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
///     clock_out: Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap(),
///     regular_hours: Decimal::from(8),
///     exempt_overtime_hours: Decimal::ONE,
///     paid_overtime_hours: Decimal::ZERO,
///     is_weekend: false,
///     is_bank_holiday: false,
///     lunch_duration: Decimal::ZERO,
///     lunch_allowance: Decimal::ZERO,
///     dinner_allowance: Decimal::ZERO,
///     had_dinner: false,
///     weekend_bonus: Decimal::ZERO,
/// };
/// assert_eq!(session.total_hours(), Decimal::from(9));
/// assert_eq!(session.working_hours(), Decimal::from(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSession {
    /// Unique identifier for the session.
    pub id: String,
    /// The clock-in instant (epoch milliseconds on the wire).
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub clock_in: DateTime<Utc>,
    /// The clock-out instant (epoch milliseconds on the wire).
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub clock_out: DateTime<Utc>,
    /// Hours at or below the regular threshold, frozen at finalization.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub regular_hours: Decimal,
    /// Exempt-overtime ("Isenção"/IHT) hours, frozen at finalization.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub exempt_overtime_hours: Decimal,
    /// Paid-overtime hours, frozen at finalization.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub paid_overtime_hours: Decimal,
    /// Whether the session fell on a weekend.
    #[serde(default, deserialize_with = "crate::coerce::lenient_bool")]
    pub is_weekend: bool,
    /// Whether the session fell on a bank holiday.
    #[serde(default, deserialize_with = "crate::coerce::lenient_bool")]
    pub is_bank_holiday: bool,
    /// Lunch duration in decimal hours, subtracted before categorization.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub lunch_duration: Decimal,
    /// Lunch allowance amount for this session.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub lunch_allowance: Decimal,
    /// Dinner allowance amount, paid only when `had_dinner` is set.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub dinner_allowance: Decimal,
    /// Whether a dinner was taken during this session.
    #[serde(default, deserialize_with = "crate::coerce::lenient_bool")]
    pub had_dinner: bool,
    /// Externally supplied flat weekend bonus for this session.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub weekend_bonus: Decimal,
}

impl WorkSession {
    /// Total session duration in decimal hours.
    ///
    /// Derived from the clock pair as `(clock_out − clock_in) / 3600000` ms.
    /// A clock-out before clock-in clamps to zero rather than producing a
    /// negative duration.
    pub fn total_hours(&self) -> Decimal {
        let millis = (self.clock_out - self.clock_in).num_milliseconds();
        if millis <= 0 {
            return Decimal::ZERO;
        }
        Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR)
    }

    /// Working hours: total duration minus lunch, clamped at zero.
    ///
    /// This is the quantity the classifier partitions into the three hour
    /// buckets. A lunch longer than the session itself clamps to zero.
    pub fn working_hours(&self) -> Decimal {
        let lunch = self.lunch_duration.max(Decimal::ZERO);
        (self.total_hours() - lunch).max(Decimal::ZERO)
    }

    /// The calendar date of this session, keyed by clock-in.
    pub fn work_date(&self) -> NaiveDate {
        self.clock_in.date_naive()
    }

    /// Whether the exemption regime is bypassed for this session.
    ///
    /// Weekend and bank-holiday sessions never produce exempt-overtime
    /// hours.
    pub fn is_special_day(&self) -> bool {
        self.is_weekend || self.is_bank_holiday
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_session(clock_in: DateTime<Utc>, clock_out: DateTime<Utc>) -> WorkSession {
        WorkSession {
            id: "session_001".to_string(),
            clock_in,
            clock_out,
            regular_hours: Decimal::ZERO,
            exempt_overtime_hours: Decimal::ZERO,
            paid_overtime_hours: Decimal::ZERO,
            is_weekend: false,
            is_bank_holiday: false,
            lunch_duration: Decimal::ZERO,
            lunch_allowance: Decimal::ZERO,
            dinner_allowance: Decimal::ZERO,
            had_dinner: false,
            weekend_bonus: Decimal::ZERO,
        }
    }

    /// WS-001: 9-to-17 session is 8.0 hours
    #[test]
    fn test_total_hours_simple_day() {
        let session = base_session(
            Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 10, 17, 0, 0).unwrap(),
        );
        assert_eq!(session.total_hours(), Decimal::from(8));
    }

    /// WS-002: half-hour granularity survives the millisecond division
    #[test]
    fn test_total_hours_fractional() {
        let session = base_session(
            Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 10, 17, 30, 0).unwrap(),
        );
        assert_eq!(session.total_hours(), Decimal::new(85, 1)); // 8.5
    }

    /// WS-003: clock-out before clock-in clamps to zero
    #[test]
    fn test_total_hours_inverted_clock_pair() {
        let session = base_session(
            Utc.with_ymd_and_hms(2025, 3, 10, 17, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
        );
        assert_eq!(session.total_hours(), Decimal::ZERO);
    }

    /// WS-004: lunch is deducted from working hours, not total hours
    #[test]
    fn test_working_hours_deducts_lunch() {
        let mut session = base_session(
            Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap(),
        );
        session.lunch_duration = Decimal::ONE;
        assert_eq!(session.total_hours(), Decimal::from(9));
        assert_eq!(session.working_hours(), Decimal::from(8));
    }

    /// WS-005: lunch exceeding the duration clamps working hours to zero
    #[test]
    fn test_working_hours_lunch_exceeds_duration() {
        let mut session = base_session(
            Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 10, 9, 30, 0).unwrap(),
        );
        session.lunch_duration = Decimal::from(2);
        assert_eq!(session.working_hours(), Decimal::ZERO);
    }

    /// WS-006: a negative lunch never inflates working hours
    #[test]
    fn test_working_hours_negative_lunch_ignored() {
        let mut session = base_session(
            Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 10, 17, 0, 0).unwrap(),
        );
        session.lunch_duration = Decimal::from(-3);
        assert_eq!(session.working_hours(), Decimal::from(8));
    }

    #[test]
    fn test_work_date_keys_by_clock_in() {
        let session = base_session(
            Utc.with_ymd_and_hms(2025, 3, 10, 22, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 11, 6, 0, 0).unwrap(),
        );
        assert_eq!(
            session.work_date(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_is_special_day() {
        let mut session = base_session(
            Utc.with_ymd_and_hms(2025, 3, 8, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 8, 17, 0, 0).unwrap(),
        );
        assert!(!session.is_special_day());
        session.is_weekend = true;
        assert!(session.is_special_day());
        session.is_weekend = false;
        session.is_bank_holiday = true;
        assert!(session.is_special_day());
    }

    #[test]
    fn test_deserialize_camel_case_epoch_millis() {
        let json = r#"{
            "id": "session_001",
            "clockIn": 1741597200000,
            "clockOut": 1741629600000,
            "regularHours": 8,
            "exemptOvertimeHours": 1,
            "paidOvertimeHours": 0,
            "isWeekend": false,
            "isBankHoliday": false,
            "lunchDuration": 1,
            "lunchAllowance": 7.5,
            "hadDinner": true,
            "dinnerAllowance": 10
        }"#;

        let session: WorkSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, "session_001");
        assert_eq!(session.regular_hours, Decimal::from(8));
        assert_eq!(session.lunch_allowance, Decimal::new(75, 1));
        assert!(session.had_dinner);
        // Absent field defaults to zero.
        assert_eq!(session.weekend_bonus, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_coerces_malformed_numerics() {
        let json = r#"{
            "id": "session_002",
            "clockIn": 1741597200000,
            "clockOut": 1741626000000,
            "regularHours": "eight",
            "exemptOvertimeHours": null,
            "paidOvertimeHours": "2.5",
            "isWeekend": 1,
            "lunchDuration": {"bad": true}
        }"#;

        let session: WorkSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.regular_hours, Decimal::ZERO);
        assert_eq!(session.exempt_overtime_hours, Decimal::ZERO);
        assert_eq!(session.paid_overtime_hours, Decimal::new(25, 1));
        assert!(session.is_weekend);
        assert_eq!(session.lunch_duration, Decimal::ZERO);
    }

    #[test]
    fn test_serialize_round_trip() {
        let session = base_session(
            Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 10, 17, 0, 0).unwrap(),
        );
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"clockIn\":"));
        let deserialized: WorkSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, deserialized);
    }
}
