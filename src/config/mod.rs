//! Settings types and loading for the calculation engine.
//!
//! Settings are normally supplied wholesale by the host application's
//! settings store; [`SettingsLoader`] additionally supports hosts that keep
//! per-worker settings as YAML or JSON files.

mod loader;
mod types;

pub use loader::SettingsLoader;
pub use types::{
    CalculationMethod, DEFAULT_ANNUAL_EXEMPT_LIMIT, DEFAULT_EXEMPT_OVERTIME_THRESHOLD,
    DEFAULT_REGULAR_HOURS_THRESHOLD, FinanceSettings, IrsRateStrategy, OvertimeMultipliers,
    TaxDeductionMode, ThresholdSettings,
};
