//! Tax deduction calculation.
//!
//! Computes income-tax-style (IRS) and social-security-style deductions
//! from the period's (base, exempt-supplement, overtime) sub-totals, plus
//! an optional custom flat tax, and nets gross pay down to final pay.
//!
//! The social-security base is always `base + exempt supplement` —
//! overtime, bonuses and meal amounts are explicitly excluded from it.
//! The meal-card deduction is tracked on the breakdown but netted
//! separately, outside the deductions `total`.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{FinanceSettings, IrsRateStrategy, TaxDeductionMode};
use crate::models::DeductionsBreakdown;

/// Calculates the deductions breakdown for a period.
///
/// Which deductions apply depends on `tax_deduction_mode`:
///
/// * `irs`: IRS only — per-slice rates when the strategy is
///   [`IrsRateStrategy::SeparateRates`], otherwise the legacy single rate
///   applied to `base + exempt + overtime`.
/// * `social_security`: social security only, on `base + exempt`.
/// * `custom`: the custom flat rate only, on `base + exempt + overtime`.
/// * `both`: IRS and social security; a non-zero custom rate additionally
///   applies to `(taxable gross − IRS)` — the custom tax stacks after
///   IRS, not before.
///
/// Negative sub-totals and negative rates clamp to zero.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::calculate_deductions;
/// use earnings_engine::config::{FinanceSettings, TaxDeductionMode};
/// use rust_decimal::Decimal;
///
/// let finance = FinanceSettings {
///     tax_deduction_mode: TaxDeductionMode::Both,
///     irs_base_salary_rate: Decimal::from(10),
///     irs_iht_rate: Decimal::from(5),
///     social_security_rate: Decimal::from(11),
///     ..FinanceSettings::default()
/// };
/// let deductions = calculate_deductions(
///     Decimal::from(800),
///     Decimal::from(100),
///     Decimal::ZERO,
///     &finance,
///     finance.irs_strategy(),
/// );
/// assert_eq!(deductions.irs, Decimal::from(85));
/// assert_eq!(deductions.social_security, Decimal::from(99));
/// assert_eq!(deductions.total, Decimal::from(184));
/// ```
pub fn calculate_deductions(
    base_salary: Decimal,
    exempt_supplement: Decimal,
    overtime_pay: Decimal,
    finance: &FinanceSettings,
    strategy: IrsRateStrategy,
) -> DeductionsBreakdown {
    let base = base_salary.max(Decimal::ZERO);
    let exempt = exempt_supplement.max(Decimal::ZERO);
    let overtime = overtime_pay.max(Decimal::ZERO);
    let gross_for_tax = base + exempt + overtime;
    let mode = finance.tax_deduction_mode;

    let mut breakdown = DeductionsBreakdown {
        meal_card_deduction: finance.meal_card_deduction.max(Decimal::ZERO),
        ..DeductionsBreakdown::default()
    };

    if matches!(mode, TaxDeductionMode::Irs | TaxDeductionMode::Both) {
        match strategy {
            IrsRateStrategy::SeparateRates => {
                breakdown.irs_base = base * rate(finance.irs_base_salary_rate);
                breakdown.irs_exempt = exempt * rate(finance.irs_iht_rate);
                breakdown.irs_overtime = overtime * rate(finance.irs_overtime_rate);
                breakdown.irs = breakdown.irs_base + breakdown.irs_exempt + breakdown.irs_overtime;
            }
            IrsRateStrategy::LegacySingleRate => {
                breakdown.irs = gross_for_tax * rate(finance.irs_rate);
            }
        }
    }

    if matches!(mode, TaxDeductionMode::SocialSecurity | TaxDeductionMode::Both) {
        breakdown.social_security = (base + exempt) * rate(finance.social_security_rate);
    }

    match mode {
        TaxDeductionMode::Custom => {
            breakdown.custom = gross_for_tax * rate(finance.custom_tax_rate);
        }
        TaxDeductionMode::Both if finance.custom_tax_rate > Decimal::ZERO => {
            // Custom tax stacks after IRS, not before.
            breakdown.custom = (gross_for_tax - breakdown.irs) * rate(finance.custom_tax_rate);
        }
        _ => {}
    }

    breakdown.total = breakdown.irs + breakdown.social_security + breakdown.custom;
    debug!(
        mode = ?mode,
        strategy = ?strategy,
        irs = %breakdown.irs,
        social_security = %breakdown.social_security,
        custom = %breakdown.custom,
        total = %breakdown.total,
        "deductions calculated"
    );
    breakdown
}

/// Nets gross salary down to final pay: gross minus the deductions total
/// minus the meal-card deduction, floored at zero — a statement never
/// reports a negative net salary.
pub fn net_salary(gross_salary: Decimal, deductions: &DeductionsBreakdown) -> Decimal {
    (gross_salary - deductions.total - deductions.meal_card_deduction).max(Decimal::ZERO)
}

/// Converts a whole-percentage rate to a multiplier, clamping negatives.
fn rate(percentage: Decimal) -> Decimal {
    percentage.max(Decimal::ZERO) / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn deductions_for(finance: &FinanceSettings, base: &str, exempt: &str, overtime: &str) -> DeductionsBreakdown {
        calculate_deductions(
            dec(base),
            dec(exempt),
            dec(overtime),
            finance,
            finance.irs_strategy(),
        )
    }

    // ==========================================================================
    // TD-001: mode `both` with separate slice rates
    // ==========================================================================
    #[test]
    fn test_td_001_both_mode_with_slice_rates() {
        let finance = FinanceSettings {
            tax_deduction_mode: TaxDeductionMode::Both,
            irs_base_salary_rate: dec("10"),
            irs_iht_rate: dec("5"),
            social_security_rate: dec("11"),
            ..FinanceSettings::default()
        };
        let breakdown = deductions_for(&finance, "800", "100", "0");

        assert_eq!(breakdown.irs_base, dec("80"));
        assert_eq!(breakdown.irs_exempt, dec("5"));
        assert_eq!(breakdown.irs_overtime, dec("0"));
        assert_eq!(breakdown.irs, dec("85"));
        assert_eq!(breakdown.social_security, dec("99"));
        assert_eq!(breakdown.custom, dec("0"));
        assert_eq!(breakdown.total, dec("184"));
    }

    // ==========================================================================
    // TD-002: legacy single rate applies to the combined taxable gross
    // ==========================================================================
    #[test]
    fn test_td_002_legacy_single_rate_fallback() {
        let finance = FinanceSettings {
            tax_deduction_mode: TaxDeductionMode::Irs,
            irs_rate: dec("20"),
            ..FinanceSettings::default()
        };
        let breakdown = deductions_for(&finance, "800", "100", "100");

        assert_eq!(breakdown.irs, dec("200"));
        assert_eq!(breakdown.irs_base, dec("0"));
        assert_eq!(breakdown.social_security, dec("0"));
        assert_eq!(breakdown.total, dec("200"));
    }

    // ==========================================================================
    // TD-003: any non-zero slice rate disables the legacy fallback
    // ==========================================================================
    #[test]
    fn test_td_003_slice_rate_wins_over_legacy() {
        let finance = FinanceSettings {
            tax_deduction_mode: TaxDeductionMode::Irs,
            irs_overtime_rate: dec("15"),
            irs_rate: dec("20"), // must be ignored
            ..FinanceSettings::default()
        };
        let breakdown = deductions_for(&finance, "800", "100", "100");

        assert_eq!(breakdown.irs_overtime, dec("15"));
        assert_eq!(breakdown.irs, dec("15"));
    }

    // ==========================================================================
    // TD-004: social security excludes overtime from its base
    // ==========================================================================
    #[test]
    fn test_td_004_social_security_base() {
        let finance = FinanceSettings {
            tax_deduction_mode: TaxDeductionMode::SocialSecurity,
            social_security_rate: dec("11"),
            ..FinanceSettings::default()
        };
        let breakdown = deductions_for(&finance, "800", "100", "500");

        // (800 + 100) × 11%, overtime excluded.
        assert_eq!(breakdown.social_security, dec("99"));
        assert_eq!(breakdown.irs, dec("0"));
        assert_eq!(breakdown.total, dec("99"));
    }

    // ==========================================================================
    // TD-005: custom mode applies the flat rate to the taxable gross
    // ==========================================================================
    #[test]
    fn test_td_005_custom_mode() {
        let finance = FinanceSettings {
            tax_deduction_mode: TaxDeductionMode::Custom,
            custom_tax_rate: dec("10"),
            social_security_rate: dec("11"), // must not apply in custom mode
            ..FinanceSettings::default()
        };
        let breakdown = deductions_for(&finance, "800", "100", "100");

        assert_eq!(breakdown.custom, dec("100"));
        assert_eq!(breakdown.social_security, dec("0"));
        assert_eq!(breakdown.total, dec("100"));
    }

    // ==========================================================================
    // TD-006: in `both` mode the custom tax stacks after IRS
    // ==========================================================================
    #[test]
    fn test_td_006_custom_stacks_after_irs() {
        let finance = FinanceSettings {
            tax_deduction_mode: TaxDeductionMode::Both,
            irs_rate: dec("20"),
            custom_tax_rate: dec("10"),
            ..FinanceSettings::default()
        };
        let breakdown = deductions_for(&finance, "1000", "0", "0");

        assert_eq!(breakdown.irs, dec("200"));
        // 10% of (1000 − 200), not of 1000.
        assert_eq!(breakdown.custom, dec("80"));
        assert_eq!(breakdown.total, dec("280"));
    }

    // ==========================================================================
    // TD-007: meal-card deduction is tracked but outside the total
    // ==========================================================================
    #[test]
    fn test_td_007_meal_card_outside_total() {
        let finance = FinanceSettings {
            tax_deduction_mode: TaxDeductionMode::Irs,
            irs_rate: dec("10"),
            meal_card_deduction: dec("40"),
            ..FinanceSettings::default()
        };
        let breakdown = deductions_for(&finance, "1000", "0", "0");

        assert_eq!(breakdown.meal_card_deduction, dec("40"));
        assert_eq!(breakdown.total, dec("100"));
        // Net still subtracts both.
        assert_eq!(net_salary(dec("1000"), &breakdown), dec("860"));
    }

    // ==========================================================================
    // TD-008: net salary never goes negative
    // ==========================================================================
    #[test]
    fn test_td_008_net_salary_floor() {
        let finance = FinanceSettings {
            tax_deduction_mode: TaxDeductionMode::Irs,
            irs_rate: dec("90"),
            meal_card_deduction: dec("500"),
            ..FinanceSettings::default()
        };
        let breakdown = deductions_for(&finance, "1000", "0", "0");
        assert_eq!(net_salary(dec("1000"), &breakdown), Decimal::ZERO);
    }

    #[test]
    fn test_negative_inputs_clamp_to_zero() {
        let finance = FinanceSettings {
            tax_deduction_mode: TaxDeductionMode::Both,
            irs_rate: dec("20"),
            social_security_rate: dec("-11"),
            ..FinanceSettings::default()
        };
        let breakdown = deductions_for(&finance, "-500", "100", "0");

        // Negative base clamps; negative rate clamps.
        assert_eq!(breakdown.irs, dec("20"));
        assert_eq!(breakdown.social_security, dec("0"));
    }

    #[test]
    fn test_zero_rates_yield_zero_deductions() {
        let breakdown = deductions_for(&FinanceSettings::default(), "1000", "100", "50");
        assert_eq!(breakdown.total, Decimal::ZERO);
        assert_eq!(net_salary(dec("1150"), &breakdown), dec("1150"));
    }

    #[test]
    fn test_custom_rate_zero_does_not_stack_in_both_mode() {
        let finance = FinanceSettings {
            tax_deduction_mode: TaxDeductionMode::Both,
            irs_rate: dec("20"),
            ..FinanceSettings::default()
        };
        let breakdown = deductions_for(&finance, "1000", "0", "0");
        assert_eq!(breakdown.custom, Decimal::ZERO);
    }
}
