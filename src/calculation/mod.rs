//! Calculation logic for the Time & Earnings Calculation Engine.
//!
//! This module contains the full deterministic pipeline: session
//! classification into hour buckets, annual exempt-budget tracking,
//! per-rule earnings calculations (overtime pay, exempt supplement, meal
//! amounts), tax deductions, and the period aggregation contracts that
//! assemble statements and chart-ready trend series.

mod classifier;
mod deductions;
mod exempt_budget;
mod meal;
mod overtime_pay;
mod statement;
mod supplement;
mod trend;

pub use classifier::{HourSplit, classify_hours, classify_new_session};
pub use deductions::{calculate_deductions, net_salary};
pub use exempt_budget::{remaining_exempt_budget, used_exempt_hours};
pub use meal::{meal_subsidy, session_meal_allowance};
pub use overtime_pay::{OVERTIME_FIRST_HOUR, session_overtime_pay};
pub use statement::calculate_period_statement;
pub use supplement::exempt_supplement;
pub use trend::{Granularity, aggregate_by_period};
