//! Meal allowance and meal subsidy calculation.

use rust_decimal::Decimal;

use crate::config::FinanceSettings;
use crate::models::WorkSession;

/// Calculates the meal allowance for a single session.
///
/// Returns `lunch_allowance + dinner_allowance` (the dinner part only when
/// the session records a dinner), or zero when meal allowances are not
/// included in the settings. Negative amounts clamp to zero.
pub fn session_meal_allowance(session: &WorkSession, finance: &FinanceSettings) -> Decimal {
    if !finance.meal_allowance_included {
        return Decimal::ZERO;
    }
    let lunch = session.lunch_allowance.max(Decimal::ZERO);
    let dinner = if session.had_dinner {
        session.dinner_allowance.max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    lunch + dinner
}

/// Calculates the daily meal subsidy for a period:
/// `daily_meal_subsidy × working_days`.
pub fn meal_subsidy(finance: &FinanceSettings, working_days: u32) -> Decimal {
    finance.daily_meal_subsidy.max(Decimal::ZERO) * Decimal::from(working_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn session(lunch: &str, dinner: &str, had_dinner: bool) -> WorkSession {
        WorkSession {
            id: "session_001".to_string(),
            clock_in: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            clock_out: Utc.with_ymd_and_hms(2025, 3, 10, 17, 0, 0).unwrap(),
            regular_hours: dec("8"),
            exempt_overtime_hours: Decimal::ZERO,
            paid_overtime_hours: Decimal::ZERO,
            is_weekend: false,
            is_bank_holiday: false,
            lunch_duration: Decimal::ZERO,
            lunch_allowance: dec(lunch),
            dinner_allowance: dec(dinner),
            had_dinner,
            weekend_bonus: Decimal::ZERO,
        }
    }

    fn included() -> FinanceSettings {
        FinanceSettings {
            meal_allowance_included: true,
            ..FinanceSettings::default()
        }
    }

    /// ME-001: lunch only
    #[test]
    fn test_me_001_lunch_only() {
        let allowance = session_meal_allowance(&session("7.5", "10", false), &included());
        assert_eq!(allowance, dec("7.5"));
    }

    /// ME-002: lunch plus dinner when a dinner was taken
    #[test]
    fn test_me_002_lunch_and_dinner() {
        let allowance = session_meal_allowance(&session("7.5", "10", true), &included());
        assert_eq!(allowance, dec("17.5"));
    }

    /// ME-003: excluded by settings
    #[test]
    fn test_me_003_not_included() {
        let allowance =
            session_meal_allowance(&session("7.5", "10", true), &FinanceSettings::default());
        assert_eq!(allowance, Decimal::ZERO);
    }

    /// ME-004: negative amounts clamp to zero
    #[test]
    fn test_me_004_negative_amounts_clamp() {
        let allowance = session_meal_allowance(&session("-5", "-1", true), &included());
        assert_eq!(allowance, Decimal::ZERO);
    }

    #[test]
    fn test_meal_subsidy_scales_with_working_days() {
        let finance = FinanceSettings {
            daily_meal_subsidy: dec("6"),
            ..FinanceSettings::default()
        };
        assert_eq!(meal_subsidy(&finance, 0), Decimal::ZERO);
        assert_eq!(meal_subsidy(&finance, 21), dec("126"));
    }

    #[test]
    fn test_meal_subsidy_negative_rate_clamps() {
        let finance = FinanceSettings {
            daily_meal_subsidy: dec("-6"),
            ..FinanceSettings::default()
        };
        assert_eq!(meal_subsidy(&finance, 21), Decimal::ZERO);
    }
}
