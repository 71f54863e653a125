//! Settings types for the calculation engine.
//!
//! The host application keeps per-worker settings as loosely-typed document
//! blobs with many optional fields. These structs give that configuration an
//! explicit, immutable shape: documented defaults are applied once at the
//! deserialization boundary, and malformed numeric fields coerce to zero
//! rather than failing the whole settings load.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default regular-hours threshold: 8 hours per day.
pub const DEFAULT_REGULAR_HOURS_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default exempt-overtime threshold: 10 hours per day.
pub const DEFAULT_EXEMPT_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Default annual exempt-hours cap: 200 hours per calendar year.
pub const DEFAULT_ANNUAL_EXEMPT_LIMIT: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

fn default_regular_threshold() -> Decimal {
    DEFAULT_REGULAR_HOURS_THRESHOLD
}

fn default_exempt_threshold() -> Decimal {
    DEFAULT_EXEMPT_OVERTIME_THRESHOLD
}

fn default_annual_limit() -> Decimal {
    DEFAULT_ANNUAL_EXEMPT_LIMIT
}

fn default_true() -> bool {
    true
}

fn default_first_hour_rate() -> Decimal {
    Decimal::new(125, 2) // 1.25
}

fn default_subsequent_rate() -> Decimal {
    Decimal::new(150, 2) // 1.50
}

fn default_weekend_rate() -> Decimal {
    Decimal::new(150, 2) // 1.50
}

fn default_holiday_rate() -> Decimal {
    Decimal::new(200, 2) // 2.00
}

/// Per-worker thresholds controlling the session classifier.
///
/// # Example
///
/// ```
/// use earnings_engine::config::ThresholdSettings;
/// use rust_decimal::Decimal;
///
/// let thresholds = ThresholdSettings::default();
/// assert_eq!(thresholds.regular_hours_threshold, Decimal::from(8));
/// assert_eq!(thresholds.exempt_overtime_threshold, Decimal::from(10));
/// assert_eq!(thresholds.annual_exempt_limit, Decimal::from(200));
/// assert!(thresholds.enable_exempt_overtime);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdSettings {
    /// Hours at or below this threshold are regular hours (default 8).
    #[serde(
        default = "default_regular_threshold",
        deserialize_with = "crate::coerce::lenient_decimal"
    )]
    pub regular_hours_threshold: Decimal,
    /// Whether the exempt-overtime ("Isenção"/IHT) regime applies.
    #[serde(default = "default_true", deserialize_with = "crate::coerce::lenient_bool")]
    pub enable_exempt_overtime: bool,
    /// Hours between the regular threshold and this one are exempt
    /// overtime, budget permitting (default 10).
    #[serde(
        default = "default_exempt_threshold",
        deserialize_with = "crate::coerce::lenient_decimal"
    )]
    pub exempt_overtime_threshold: Decimal,
    /// Hard cap on exempt-overtime hours per calendar year (default 200).
    #[serde(
        default = "default_annual_limit",
        deserialize_with = "crate::coerce::lenient_decimal"
    )]
    pub annual_exempt_limit: Decimal,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            regular_hours_threshold: default_regular_threshold(),
            enable_exempt_overtime: true,
            exempt_overtime_threshold: default_exempt_threshold(),
            annual_exempt_limit: default_annual_limit(),
        }
    }
}

/// How the exempt-hours supplement is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    /// The configured fixed amount, returned verbatim as a whole-period
    /// lump sum.
    Fixed,
    /// A flat per-working-day supplement of `hourly_rate × rate / 100`.
    #[default]
    #[serde(other)]
    Percentage,
}

/// Which deductions apply to the period statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxDeductionMode {
    /// Social-security-style deduction only.
    SocialSecurity,
    /// A single custom flat tax only.
    Custom,
    /// IRS and social security, plus the custom tax stacked after IRS.
    Both,
    /// Income-tax-style deduction only.
    #[default]
    #[serde(other)]
    Irs,
}

/// How the IRS deduction rates are resolved.
///
/// Resolved once when settings are loaded, not re-checked per computation
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrsRateStrategy {
    /// Independent rates per income slice (base / exempt / overtime).
    SeparateRates,
    /// The legacy single rate applied to the combined taxable gross.
    LegacySingleRate,
}

/// The four overtime multipliers, flattened into [`FinanceSettings`] on the
/// wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeMultipliers {
    /// Multiplier for the first overtime hour on a normal day (default 1.25).
    #[serde(
        default = "default_first_hour_rate",
        deserialize_with = "crate::coerce::lenient_decimal"
    )]
    pub first_hour_rate: Decimal,
    /// Multiplier for overtime hours after the first (default 1.50).
    #[serde(
        default = "default_subsequent_rate",
        deserialize_with = "crate::coerce::lenient_decimal"
    )]
    pub subsequent_rate: Decimal,
    /// Multiplier for all overtime hours on a weekend (default 1.50).
    #[serde(
        default = "default_weekend_rate",
        deserialize_with = "crate::coerce::lenient_decimal"
    )]
    pub weekend_rate: Decimal,
    /// Multiplier for all overtime hours on a bank holiday (default 2.00).
    #[serde(
        default = "default_holiday_rate",
        deserialize_with = "crate::coerce::lenient_decimal"
    )]
    pub holiday_rate: Decimal,
}

impl Default for OvertimeMultipliers {
    fn default() -> Self {
        Self {
            first_hour_rate: default_first_hour_rate(),
            subsequent_rate: default_subsequent_rate(),
            weekend_rate: default_weekend_rate(),
            holiday_rate: default_holiday_rate(),
        }
    }
}

/// Rates used by the earnings and tax deduction calculators.
///
/// All rates default to zero when absent, which yields a degraded but
/// valid (zero-deduction) statement rather than an error. Percentage
/// fields are expressed as whole percentages (`11` means 11%).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSettings {
    /// Standard hourly rate for regular hours.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub hourly_rate: Decimal,
    /// How the exempt-hours supplement is computed.
    #[serde(default)]
    pub calculation_method: CalculationMethod,
    /// Percentage for the per-working-day supplement (percentage method).
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub exempt_supplement_rate: Decimal,
    /// Lump-sum supplement amount (fixed method).
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub exempt_fixed_amount: Decimal,
    /// Which deductions apply.
    #[serde(default)]
    pub tax_deduction_mode: TaxDeductionMode,
    /// IRS rate for the base-salary slice.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub irs_base_salary_rate: Decimal,
    /// IRS rate for the exempt-supplement (IHT) slice.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub irs_iht_rate: Decimal,
    /// IRS rate for the overtime slice.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub irs_overtime_rate: Decimal,
    /// Legacy single IRS rate, used when no per-slice rate is set.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub irs_rate: Decimal,
    /// Social-security rate, applied to base + exempt supplement.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub social_security_rate: Decimal,
    /// Custom flat tax rate.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub custom_tax_rate: Decimal,
    /// Whether per-session meal allowances are paid out.
    #[serde(default, deserialize_with = "crate::coerce::lenient_bool")]
    pub meal_allowance_included: bool,
    /// Overtime multipliers (flattened on the wire).
    #[serde(flatten)]
    pub overtime: OvertimeMultipliers,
    /// Flat bonus added to gross pay for the period.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub fixed_bonus: Decimal,
    /// Meal subsidy per working day.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub daily_meal_subsidy: Decimal,
    /// Flat meal-card deduction, netted outside the deductions total.
    #[serde(default, deserialize_with = "crate::coerce::lenient_decimal")]
    pub meal_card_deduction: Decimal,
}

impl FinanceSettings {
    /// Resolves the IRS rate strategy for these settings.
    ///
    /// If any of the three per-slice rates is non-zero the slices are
    /// computed independently; otherwise the legacy single rate applies to
    /// the combined taxable gross. Callers resolve this once per
    /// settings load (or once per statement) and pass the result down.
    pub fn irs_strategy(&self) -> IrsRateStrategy {
        let has_slice_rate = self.irs_base_salary_rate != Decimal::ZERO
            || self.irs_iht_rate != Decimal::ZERO
            || self.irs_overtime_rate != Decimal::ZERO;
        if has_slice_rate {
            IrsRateStrategy::SeparateRates
        } else {
            IrsRateStrategy::LegacySingleRate
        }
    }
}
