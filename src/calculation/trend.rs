//! Trend aggregation.
//!
//! Splits a date range into sub-windows at a chosen granularity, runs the
//! period statement computation over each, and emits chart-ready points.
//! The series always covers the whole range: sub-windows with no sessions
//! produce zero-valued points rather than gaps.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::FinanceSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, TrendPoint, WorkSession};

use super::statement::calculate_period_statement;

/// Sub-window granularity for trend aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One point per calendar day.
    Daily,
    /// One point per seven-day chunk, anchored at the range start.
    Weekly,
    /// One point per calendar month.
    Monthly,
    /// One point per calendar year.
    Yearly,
}

/// A sub-window ready to be computed: its label, its clipped date range,
/// and the first date of the next window.
struct SubWindow {
    label: String,
    range: DateRange,
    next: NaiveDate,
}

/// Aggregates earnings over a range into one point per sub-window.
///
/// Sub-windows are clipped to the overall range, so the first and last
/// points may cover partial weeks, months or years. Labels are
/// `YYYY-MM-DD` for daily, `Week of YYYY-MM-DD` for weekly, `Mon YYYY`
/// for monthly and `YYYY` for yearly points.
///
/// An inverted range yields an empty series; a sub-window whose bounds
/// cannot be computed yields a zero-valued point. Neither aborts the
/// series as a whole.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::{Granularity, aggregate_by_period};
/// use earnings_engine::config::FinanceSettings;
/// use earnings_engine::models::DateRange;
/// use chrono::{TimeZone, Utc};
///
/// let range = DateRange::new(
///     Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 59).unwrap(),
/// );
/// let series = aggregate_by_period(&[], &range, Granularity::Daily, &FinanceSettings::default());
/// assert_eq!(series.len(), 30);
/// assert_eq!(series[0].label, "2025-06-01");
/// ```
pub fn aggregate_by_period(
    sessions: &[WorkSession],
    range: &DateRange,
    granularity: Granularity,
    finance: &FinanceSettings,
) -> Vec<TrendPoint> {
    if range.end < range.start {
        let error = EngineError::InvalidDateRange {
            start: range.start,
            end: range.end,
        };
        warn!(error = %error, "trend aggregation over inverted range");
        return Vec::new();
    }

    let end_date = range.end.date_naive();
    let mut cursor = range.start.date_naive();
    let mut points = Vec::new();

    while cursor <= end_date {
        match sub_window(cursor, range, end_date, granularity) {
            Ok(window) => {
                let statement = calculate_period_statement(sessions, &window.range, finance);
                points.push(TrendPoint {
                    label: window.label,
                    gross_income: statement.earnings.gross_salary,
                    net_income: statement.net_salary,
                    taxes: statement.deductions.total + statement.deductions.meal_card_deduction,
                });
                cursor = window.next;
            }
            Err(error) => {
                // Cannot advance past this window; emit a zero point for
                // it and stop rather than loop forever.
                warn!(error = %error, date = %cursor, "sub-window bounds failed");
                points.push(TrendPoint::zeroed(cursor.format("%Y-%m-%d").to_string()));
                break;
            }
        }
    }

    points
}

fn sub_window(
    cursor: NaiveDate,
    range: &DateRange,
    end_date: NaiveDate,
    granularity: Granularity,
) -> EngineResult<SubWindow> {
    let (label, last_date, next) = match granularity {
        Granularity::Daily => {
            let next = cursor
                .succ_opt()
                .ok_or_else(|| window_error(cursor, "next day"))?;
            (cursor.format("%Y-%m-%d").to_string(), cursor, next)
        }
        Granularity::Weekly => {
            let last = cursor
                .checked_add_days(Days::new(6))
                .ok_or_else(|| window_error(cursor, "week end"))?;
            let next = cursor
                .checked_add_days(Days::new(7))
                .ok_or_else(|| window_error(cursor, "next week"))?;
            (
                format!("Week of {}", cursor.format("%Y-%m-%d")),
                last,
                next,
            )
        }
        Granularity::Monthly => {
            let first = cursor
                .with_day(1)
                .ok_or_else(|| window_error(cursor, "first of month"))?;
            let next = first
                .checked_add_months(Months::new(1))
                .ok_or_else(|| window_error(cursor, "next month"))?;
            let last = next
                .pred_opt()
                .ok_or_else(|| window_error(cursor, "last of month"))?;
            (cursor.format("%b %Y").to_string(), last, next)
        }
        Granularity::Yearly => {
            let last = NaiveDate::from_ymd_opt(cursor.year(), 12, 31)
                .ok_or_else(|| window_error(cursor, "last of year"))?;
            let next = NaiveDate::from_ymd_opt(cursor.year() + 1, 1, 1)
                .ok_or_else(|| window_error(cursor, "next year"))?;
            (cursor.format("%Y").to_string(), last, next)
        }
    };

    let clipped_last = last_date.min(end_date);
    let window_start = cursor
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| window_error(cursor, "window start"))?
        .and_utc()
        .max(range.start);
    let window_end = clipped_last
        .and_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| window_error(clipped_last, "window end"))?
        .and_utc()
        .min(range.end);

    Ok(SubWindow {
        label,
        range: DateRange::new(window_start, window_end),
        next,
    })
}

fn window_error(date: NaiveDate, what: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("could not compute {what} from {date}"),
    }
}
