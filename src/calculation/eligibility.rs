//! Eligibility and compliance rules.
//!
//! These predicates never fail: a schedule over the weekly cap or a wage
//! under the minimum is reported through the returned record so the caller
//! can warn or block as it sees fit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LaborRegime;
use crate::models::{WageConfig, WageType, WorkStats};

use super::time_utils::format_won;
use super::work_time::paid_monthly_hours;

/// Outcome of an eligibility rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    /// Whether the rule is satisfied.
    pub is_eligible: bool,
    /// Explanation suitable for display.
    pub reason: String,
}

/// Outcome of the weekly working-hours check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTimeCompliance {
    /// True when neither cap is exceeded.
    pub is_compliant: bool,
    /// Weekly total hours exceed the weekly cap (52 hours).
    pub is_over_52: bool,
    /// Weekly overtime hours exceed the overtime cap (12 hours).
    pub is_over_12_overtime: bool,
}

/// Outcome of the minimum wage check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumWageCheck {
    /// True when the wage meets the statutory minimum.
    pub is_compliant: bool,
    /// The wage expressed per paid hour (rounded to two decimals).
    pub effective_hourly_wage: Decimal,
    /// The statutory minimum hourly wage.
    pub minimum_hourly_wage: Decimal,
    /// The least amount of the configured wage type that complies.
    pub required_amount: Decimal,
    /// How far the wage falls short of `required_amount`.
    pub shortfall: Decimal,
    /// Explanation suitable for display.
    pub message: String,
}

fn display_hours(hours: Decimal) -> Decimal {
    hours.round_dp(1).normalize()
}

/// Social insurance enrollment is mandatory from 15 hours a week or 60
/// hours a month.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::insurance_eligibility;
/// use labor_cost_engine::config::LaborRegime;
/// use rust_decimal::Decimal;
///
/// let regime = LaborRegime::korea_2025();
/// let result = insurance_eligibility(Decimal::from(14), Decimal::from(61), &regime);
/// assert!(result.is_eligible);
/// ```
pub fn insurance_eligibility(
    weekly_hours: Decimal,
    monthly_hours: Decimal,
    regime: &LaborRegime,
) -> Eligibility {
    let thresholds = &regime.thresholds;
    let weekly_ok = weekly_hours >= thresholds.insurance_weekly_hours;
    let monthly_ok = monthly_hours >= thresholds.insurance_monthly_hours;

    let reason = if weekly_ok {
        format!(
            "주 {}시간 근무로 주 {}시간 이상이므로 4대보험 의무가입 대상입니다",
            display_hours(weekly_hours),
            thresholds.insurance_weekly_hours.normalize()
        )
    } else if monthly_ok {
        format!(
            "월 {}시간 근무로 월 {}시간 이상이므로 4대보험 의무가입 대상입니다",
            display_hours(monthly_hours),
            thresholds.insurance_monthly_hours.normalize()
        )
    } else {
        format!(
            "주 {}시간, 월 {}시간 근무로 주 {}시간 미만이며 월 {}시간 미만이므로 4대보험 의무가입 대상이 아닙니다 (산재보험은 적용)",
            display_hours(weekly_hours),
            display_hours(monthly_hours),
            thresholds.insurance_weekly_hours.normalize(),
            thresholds.insurance_monthly_hours.normalize()
        )
    };

    Eligibility {
        is_eligible: weekly_ok || monthly_ok,
        reason,
    }
}

/// Weekly-holiday pay is owed from 15 hours a week.
pub fn weekly_holiday_eligibility(weekly_hours: Decimal, regime: &LaborRegime) -> Eligibility {
    let threshold = regime.thresholds.weekly_holiday_min_hours;
    let is_eligible = weekly_hours >= threshold;

    let reason = if is_eligible {
        format!(
            "주 {}시간 근무로 주 {}시간 이상이므로 주휴수당 지급 대상입니다",
            display_hours(weekly_hours),
            threshold.normalize()
        )
    } else {
        format!(
            "주 {}시간 근무로 주 {}시간 미만이므로 주휴수당 지급 대상이 아닙니다",
            display_hours(weekly_hours),
            threshold.normalize()
        )
    };

    Eligibility {
        is_eligible,
        reason,
    }
}

/// Checks the weekly total and weekly overtime against the regime's caps.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::work_time_compliance;
/// use labor_cost_engine::config::LaborRegime;
/// use rust_decimal::Decimal;
///
/// let regime = LaborRegime::korea_2025();
/// let result = work_time_compliance(Decimal::from(53), Decimal::from(10), &regime);
/// assert!(!result.is_compliant);
/// assert!(result.is_over_52);
/// assert!(!result.is_over_12_overtime);
/// ```
pub fn work_time_compliance(
    weekly_total_hours: Decimal,
    weekly_overtime_hours: Decimal,
    regime: &LaborRegime,
) -> WorkTimeCompliance {
    let is_over_52 = weekly_total_hours > regime.time.weekly_hour_cap;
    let is_over_12_overtime = weekly_overtime_hours > regime.time.weekly_overtime_cap;

    WorkTimeCompliance {
        is_compliant: !is_over_52 && !is_over_12_overtime,
        is_over_52,
        is_over_12_overtime,
    }
}

/// The least monthly wage that complies for this schedule: the statutory
/// monthly minimum for a full-time week, otherwise the hourly minimum over
/// the paid monthly hours rounded up to whole won.
pub fn minimum_monthly_amount(stats: &WorkStats, regime: &LaborRegime) -> Decimal {
    if stats.weekly_net_hours() >= regime.thresholds.weekly_holiday_full_hours {
        regime.wages.minimum_monthly
    } else {
        (regime.wages.minimum_hourly * paid_monthly_hours(stats, regime)).ceil()
    }
}

/// Compares the configured wage with the statutory minimum.
///
/// Hourly wages are compared directly. Monthly wages, which include
/// weekly-holiday pay, are compared with [`minimum_monthly_amount`].
pub fn minimum_wage_check(
    wage: &WageConfig,
    stats: &WorkStats,
    regime: &LaborRegime,
) -> MinimumWageCheck {
    let minimum_hourly_wage = regime.wages.minimum_hourly;

    let (effective_hourly_wage, required_amount) = match wage.wage_type {
        WageType::Hourly => (wage.amount, minimum_hourly_wage),
        WageType::Monthly => {
            let paid_hours = paid_monthly_hours(stats, regime);
            let effective = if paid_hours > Decimal::ZERO {
                (wage.amount / paid_hours).round_dp(2)
            } else {
                Decimal::ZERO
            };
            (effective, minimum_monthly_amount(stats, regime))
        }
    };

    let is_compliant = wage.amount >= required_amount;
    let shortfall = (required_amount - wage.amount).max(Decimal::ZERO);

    let label = match wage.wage_type {
        WageType::Hourly => "시급",
        WageType::Monthly => "월급",
    };
    let message = if is_compliant {
        format!(
            "{} {}은(는) 최저임금 기준 {} 이상입니다",
            label,
            format_won(wage.amount),
            format_won(required_amount)
        )
    } else {
        format!(
            "{} {}은(는) 최저임금 기준 {}보다 {} 부족합니다",
            label,
            format_won(wage.amount),
            format_won(required_amount),
            format_won(shortfall)
        )
    };

    MinimumWageCheck {
        is_compliant,
        effective_hourly_wage,
        minimum_hourly_wage,
        required_amount,
        shortfall,
        message,
    }
}
