//! Period statement assembly.
//!
//! This module implements the period aggregation contract: filter sessions
//! to a date window, sum the frozen hour buckets, run the earnings and
//! deduction calculators, and assemble the full statement together with
//! per-session line items for itemized views.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::FinanceSettings;
use crate::models::{
    DateRange, EarningsBreakdown, HourTotals, PeriodEarningsStatement, SessionEarnings,
    WorkSession,
};

use super::deductions::{calculate_deductions, net_salary};
use super::meal::{meal_subsidy, session_meal_allowance};
use super::overtime_pay::session_overtime_pay;
use super::supplement::exempt_supplement;

/// Computes the earnings statement for a date window.
///
/// Sessions whose clock-in falls within the (inclusive) range participate;
/// their frozen hour buckets are summed as stored — the annual exempt
/// budget is never re-derived here. A window with no sessions yields a
/// fully zeroed statement, never an error.
///
/// The computation is a pure function of its inputs: calling it twice
/// with identical arguments produces identical output.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::calculate_period_statement;
/// use earnings_engine::config::FinanceSettings;
/// use earnings_engine::models::DateRange;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let range = DateRange::new(
///     Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap(),
/// );
/// let statement = calculate_period_statement(&[], &range, &FinanceSettings::default());
/// assert_eq!(statement.net_salary, Decimal::ZERO);
/// ```
pub fn calculate_period_statement(
    sessions: &[WorkSession],
    range: &DateRange,
    finance: &FinanceSettings,
) -> PeriodEarningsStatement {
    let mut filtered: Vec<&WorkSession> = sessions
        .iter()
        .filter(|session| range.contains(session.clock_in))
        .collect();

    if filtered.is_empty() {
        debug!(start = %range.start, end = %range.end, "no sessions in window");
        return PeriodEarningsStatement::zeroed(*range);
    }

    // Deterministic order regardless of how the host stores sessions; the
    // supplement attribution below depends on it.
    filtered.sort_by(|a, b| a.clock_in.cmp(&b.clock_in).then_with(|| a.id.cmp(&b.id)));

    let hourly_rate = finance.hourly_rate.max(Decimal::ZERO);

    let hours = HourTotals {
        regular: filtered
            .iter()
            .map(|s| s.regular_hours.max(Decimal::ZERO))
            .sum(),
        exempt_overtime: filtered
            .iter()
            .map(|s| s.exempt_overtime_hours.max(Decimal::ZERO))
            .sum(),
        paid_overtime: filtered
            .iter()
            .map(|s| s.paid_overtime_hours.max(Decimal::ZERO))
            .sum(),
    };

    let distinct_days: BTreeSet<NaiveDate> = filtered.iter().map(|s| s.work_date()).collect();
    let working_days = distinct_days.len() as u32;

    let overtime_pay: Decimal = filtered
        .iter()
        .map(|s| {
            session_overtime_pay(
                s.paid_overtime_hours,
                hourly_rate,
                s.is_weekend,
                s.is_bank_holiday,
                &finance.overtime,
            )
        })
        .sum();

    let base_salary = hours.regular * hourly_rate;
    let supplement = exempt_supplement(finance, working_days);
    let weekend_bonus: Decimal = filtered
        .iter()
        .map(|s| s.weekend_bonus.max(Decimal::ZERO))
        .sum();
    let meal_allowances: Decimal = filtered
        .iter()
        .map(|s| session_meal_allowance(s, finance))
        .sum();
    let fixed_bonus = finance.fixed_bonus.max(Decimal::ZERO);
    let subsidy = meal_subsidy(finance, working_days);

    let gross_salary = base_salary
        + supplement
        + overtime_pay
        + weekend_bonus
        + meal_allowances
        + fixed_bonus
        + subsidy;

    let earnings = EarningsBreakdown {
        base_salary,
        exempt_supplement: supplement,
        overtime_pay,
        weekend_bonus,
        meal_allowances,
        fixed_bonus,
        meal_subsidy: subsidy,
        gross_salary,
    };

    // Resolved once per statement, then threaded through.
    let strategy = finance.irs_strategy();
    let deductions = calculate_deductions(base_salary, supplement, overtime_pay, finance, strategy);
    let net = net_salary(gross_salary, &deductions);

    let session_items = itemize_sessions(&filtered, finance, hourly_rate, supplement, working_days);

    debug!(
        sessions = filtered.len(),
        working_days,
        gross = %gross_salary,
        net = %net,
        "period statement computed"
    );

    PeriodEarningsStatement {
        period: *range,
        hours,
        working_days,
        earnings,
        deductions,
        net_salary: net,
        sessions: session_items,
    }
}

/// Builds the per-session line items for itemized views.
///
/// This is a display-oriented reconstruction downstream of the aggregate
/// totals: the supplement share (`total / working_days`) is attributed to
/// the first session of each calendar day so itemized lists never double
/// count it. The statement totals are computed independently and are
/// never derived from these order-dependent values.
fn itemize_sessions(
    filtered: &[&WorkSession],
    finance: &FinanceSettings,
    hourly_rate: Decimal,
    supplement_total: Decimal,
    working_days: u32,
) -> Vec<SessionEarnings> {
    let per_day_supplement = if working_days > 0 {
        supplement_total / Decimal::from(working_days)
    } else {
        Decimal::ZERO
    };

    let mut seen_days: BTreeSet<NaiveDate> = BTreeSet::new();
    filtered
        .iter()
        .map(|session| {
            let regular_hours = session.regular_hours.max(Decimal::ZERO);
            let exempt_overtime_hours = session.exempt_overtime_hours.max(Decimal::ZERO);
            let paid_overtime_hours = session.paid_overtime_hours.max(Decimal::ZERO);

            let first_of_day = seen_days.insert(session.work_date());
            let supplement = if first_of_day {
                per_day_supplement
            } else {
                Decimal::ZERO
            };

            let base_pay = regular_hours * hourly_rate;
            let overtime_pay = session_overtime_pay(
                paid_overtime_hours,
                hourly_rate,
                session.is_weekend,
                session.is_bank_holiday,
                &finance.overtime,
            );
            let weekend_bonus = session.weekend_bonus.max(Decimal::ZERO);
            let meal_allowance = session_meal_allowance(session, finance);

            SessionEarnings {
                session_id: session.id.clone(),
                date: session.work_date(),
                regular_hours,
                exempt_overtime_hours,
                paid_overtime_hours,
                base_pay,
                exempt_supplement: supplement,
                overtime_pay,
                weekend_bonus,
                meal_allowance,
                total: base_pay + supplement + overtime_pay + weekend_bonus + meal_allowance,
            }
        })
        .collect()
}
