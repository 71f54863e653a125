//! Overtime pay calculation.
//!
//! Paid-overtime hours are paid per session at one of three schedules:
//! a flat holiday multiplier, a flat weekend multiplier, or the weekday
//! two-tier schedule where the first overtime hour is paid at a lower
//! multiplier than the rest. Holiday beats weekend when both flags are
//! set.

use rust_decimal::Decimal;

use crate::config::OvertimeMultipliers;

/// The span of tier-1 weekday overtime: the first hour is paid at the
/// first-hour multiplier, everything beyond it at the subsequent
/// multiplier.
pub const OVERTIME_FIRST_HOUR: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Calculates the overtime pay for a single session.
///
/// * Bank holiday: `hours × rate × holiday_rate`.
/// * Weekend (and not a holiday): `hours × rate × weekend_rate`.
/// * Normal day: the first hour at `first_hour_rate`, remaining hours at
///   `subsequent_rate`. A session with at most one overtime hour is paid
///   entirely at the first-hour multiplier.
///
/// Negative hours clamp to zero.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::session_overtime_pay;
/// use earnings_engine::config::OvertimeMultipliers;
/// use rust_decimal::Decimal;
///
/// // 2.5h at rate 10: 1h × 10 × 1.25 + 1.5h × 10 × 1.50 = 35.0
/// let pay = session_overtime_pay(
///     Decimal::new(25, 1),
///     Decimal::from(10),
///     false,
///     false,
///     &OvertimeMultipliers::default(),
/// );
/// assert_eq!(pay, Decimal::from(35));
/// ```
pub fn session_overtime_pay(
    paid_overtime_hours: Decimal,
    hourly_rate: Decimal,
    is_weekend: bool,
    is_bank_holiday: bool,
    multipliers: &OvertimeMultipliers,
) -> Decimal {
    let hours = paid_overtime_hours.max(Decimal::ZERO);
    if hours == Decimal::ZERO {
        return Decimal::ZERO;
    }

    if is_bank_holiday {
        return hours * hourly_rate * multipliers.holiday_rate;
    }
    if is_weekend {
        return hours * hourly_rate * multipliers.weekend_rate;
    }

    let first_hour = hours.min(OVERTIME_FIRST_HOUR);
    let remaining = hours - first_hour;
    first_hour * hourly_rate * multipliers.first_hour_rate
        + remaining * hourly_rate * multipliers.subsequent_rate
}
