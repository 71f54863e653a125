//! Data models for the Time & Earnings Calculation Engine.

mod date_range;
mod session;
mod statement;

pub use date_range::DateRange;
pub use session::WorkSession;
pub use statement::{
    DeductionsBreakdown, EarningsBreakdown, HourTotals, PeriodEarningsStatement, SessionEarnings,
    TrendPoint,
};
