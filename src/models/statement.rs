//! Period statement output models.
//!
//! These types capture everything a period computation produces: hour
//! totals, the earnings breakdown, the deductions breakdown, the net
//! salary, and the per-session line items for itemized views. Statements
//! are always computed on demand and never persisted; they are a pure
//! function of (sessions, date range, finance settings).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// Hour totals across a period, one field per bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourTotals {
    /// Total regular hours.
    pub regular: Decimal,
    /// Total exempt-overtime ("Isenção"/IHT) hours.
    pub exempt_overtime: Decimal,
    /// Total paid-overtime hours.
    pub paid_overtime: Decimal,
}

impl HourTotals {
    /// Sum of all three buckets.
    pub fn total(&self) -> Decimal {
        self.regular + self.exempt_overtime + self.paid_overtime
    }
}

/// Earnings breakdown for a period, before deductions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsBreakdown {
    /// Regular hours times the hourly rate.
    pub base_salary: Decimal,
    /// Exempt-hours supplement (fixed lump sum or per-working-day amount).
    pub exempt_supplement: Decimal,
    /// Overtime pay summed across sessions at tiered/weekend/holiday rates.
    pub overtime_pay: Decimal,
    /// Sum of externally supplied per-session weekend bonuses.
    pub weekend_bonus: Decimal,
    /// Sum of per-session lunch and dinner allowances, when included.
    pub meal_allowances: Decimal,
    /// Flat bonus for the period.
    pub fixed_bonus: Decimal,
    /// Daily meal subsidy times the number of working days.
    pub meal_subsidy: Decimal,
    /// Sum of every earnings component above.
    pub gross_salary: Decimal,
}

/// Deductions breakdown for a period.
///
/// `total` covers income-tax, social-security and custom deductions. The
/// meal-card deduction is tracked separately and netted from gross pay on
/// its own, outside `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionsBreakdown {
    /// IRS deduction on the base-salary slice (separate-rates mode only).
    pub irs_base: Decimal,
    /// IRS deduction on the exempt-supplement slice (separate-rates mode only).
    pub irs_exempt: Decimal,
    /// IRS deduction on the overtime slice (separate-rates mode only).
    pub irs_overtime: Decimal,
    /// Total IRS deduction (slice sum, or the legacy single-rate amount).
    pub irs: Decimal,
    /// Social-security deduction, always based on base + exempt supplement.
    pub social_security: Decimal,
    /// Custom flat tax deduction.
    pub custom: Decimal,
    /// Flat meal-card deduction, netted separately from `total`.
    pub meal_card_deduction: Decimal,
    /// irs + social_security + custom.
    pub total: Decimal,
}

/// A per-session line item reconstructing that session's contribution to
/// the period earnings, for itemized views.
///
/// The per-day exempt supplement is attributed to exactly one session per
/// calendar day (the first encountered), so itemized lists never double
/// count it. The statement's aggregate totals are computed independently
/// of this attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEarnings {
    /// The ID of the session this line item originated from.
    pub session_id: String,
    /// The calendar date of the session.
    pub date: NaiveDate,
    /// Regular hours for this session.
    pub regular_hours: Decimal,
    /// Exempt-overtime hours for this session.
    pub exempt_overtime_hours: Decimal,
    /// Paid-overtime hours for this session.
    pub paid_overtime_hours: Decimal,
    /// Regular hours times the hourly rate.
    pub base_pay: Decimal,
    /// The supplement share attributed to this session (first session of
    /// each working day only; zero for the rest).
    pub exempt_supplement: Decimal,
    /// Overtime pay for this session.
    pub overtime_pay: Decimal,
    /// Weekend bonus carried by this session.
    pub weekend_bonus: Decimal,
    /// Meal allowance for this session, when included.
    pub meal_allowance: Decimal,
    /// Sum of the earnings components above.
    pub total: Decimal,
}

/// The computed earnings statement for a date window.
///
/// # Example
///
/// ```
/// use earnings_engine::models::{DateRange, PeriodEarningsStatement};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let range = DateRange::new(
///     Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap(),
/// );
/// let statement = PeriodEarningsStatement::zeroed(range);
/// assert_eq!(statement.net_salary, Decimal::ZERO);
/// assert!(statement.sessions.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodEarningsStatement {
    /// The date window this statement covers.
    pub period: DateRange,
    /// Hour totals across the period.
    pub hours: HourTotals,
    /// Count of distinct calendar days with at least one session.
    pub working_days: u32,
    /// Earnings breakdown.
    pub earnings: EarningsBreakdown,
    /// Deductions breakdown.
    pub deductions: DeductionsBreakdown,
    /// Gross salary minus deductions and the meal-card deduction,
    /// floored at zero.
    pub net_salary: Decimal,
    /// Per-session line items for itemized views.
    pub sessions: Vec<SessionEarnings>,
}

impl PeriodEarningsStatement {
    /// An all-zero statement for a window with no sessions.
    pub fn zeroed(period: DateRange) -> Self {
        Self {
            period,
            hours: HourTotals::default(),
            working_days: 0,
            earnings: EarningsBreakdown::default(),
            deductions: DeductionsBreakdown::default(),
            net_salary: Decimal::ZERO,
            sessions: Vec::new(),
        }
    }
}

/// One chart-ready data point produced by the trend aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Formatted label for the sub-window (e.g. "2025-03-10", "Mar 2025").
    pub label: String,
    /// Gross salary for the sub-window.
    pub gross_income: Decimal,
    /// Net salary for the sub-window.
    pub net_income: Decimal,
    /// Total deductions (including the meal-card deduction) for the
    /// sub-window.
    pub taxes: Decimal,
}

impl TrendPoint {
    /// A zero-valued point, used when a sub-window fails to compute.
    pub fn zeroed(label: String) -> Self {
        Self {
            label,
            gross_income: Decimal::ZERO,
            net_income: Decimal::ZERO,
            taxes: Decimal::ZERO,
        }
    }
}
