//! Exempt-hours supplement calculation.
//!
//! Workers in the exemption regime are not paid per exempt hour; they
//! receive a flat supplement instead, either as a percentage of the hourly
//! rate per working day or as a configured lump sum.

use rust_decimal::Decimal;

use crate::config::{CalculationMethod, FinanceSettings};

/// Calculates the exempt-hours ("Isenção"/IHT) supplement for a period.
///
/// * `Fixed` method: returns the configured amount verbatim. The amount is
///   a whole-period lump sum and is deliberately not prorated by period
///   length — it assumes monthly reporting windows.
/// * `Percentage` method: `hourly_rate × rate/100 × working_days`, a flat
///   per-working-day amount independent of how many exempt hours were
///   actually used that day. Any day with at least one session counts.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::exempt_supplement;
/// use earnings_engine::config::FinanceSettings;
/// use rust_decimal::Decimal;
///
/// let finance = FinanceSettings {
///     hourly_rate: Decimal::from(10),
///     exempt_supplement_rate: Decimal::from(20),
///     ..FinanceSettings::default()
/// };
/// // 10 × 20% × 22 working days
/// assert_eq!(exempt_supplement(&finance, 22), Decimal::from(44));
/// ```
pub fn exempt_supplement(finance: &FinanceSettings, working_days: u32) -> Decimal {
    match finance.calculation_method {
        CalculationMethod::Fixed => finance.exempt_fixed_amount.max(Decimal::ZERO),
        CalculationMethod::Percentage => {
            finance.hourly_rate * finance.exempt_supplement_rate / Decimal::ONE_HUNDRED
                * Decimal::from(working_days)
        }
    }
}
