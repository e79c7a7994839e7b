//! Social insurance contributions.
//!
//! Pension, health, long-term care and employment insurance are mandatory
//! only for eligible employees and are split between employee and
//! employer. Industrial-accident insurance covers every employee and is
//! paid by the employer alone, on a reference salary rather than actual
//! pay.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::LaborRegime;
use crate::models::{Contribution, InsuranceBreakdown, PayBreakdown, WageConfig, WageType};

use super::time_utils::round_won;

/// Computes the five contributions.
///
/// Each amount is `round(base × rate)`. When `eligible` is false the four
/// mandatory contributions are zero; industrial-accident insurance is
/// always charged on `accident_base`.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::calculate_insurance;
/// use labor_cost_engine::config::LaborRegime;
/// use rust_decimal::Decimal;
///
/// let regime = LaborRegime::korea_2025();
/// let salary = Decimal::from(2_000_000);
/// let insurance = calculate_insurance(salary, salary, true, &regime);
///
/// assert_eq!(insurance.national_pension.amount, Decimal::from(90_000));
/// assert_eq!(insurance.national_pension.employee_share, Decimal::from(45_000));
/// assert_eq!(insurance.industrial_accident.employer_share, Decimal::from(29_400));
/// ```
pub fn calculate_insurance(
    insured_salary: Decimal,
    accident_base: Decimal,
    eligible: bool,
    regime: &LaborRegime,
) -> InsuranceBreakdown {
    debug_assert!(insured_salary >= Decimal::ZERO, "insured salary must not be negative");

    let rates = &regime.insurance;
    let mandatory = |rate: Decimal| {
        if eligible {
            Contribution::shared(round_won(insured_salary * rate))
        } else {
            Contribution::default()
        }
    };

    let breakdown = InsuranceBreakdown::from_contributions(
        insured_salary,
        accident_base,
        [
            mandatory(rates.national_pension),
            mandatory(rates.health),
            mandatory(rates.long_term_care),
            mandatory(rates.employment),
            Contribution::employer_only(round_won(accident_base * rates.industrial_accident)),
        ],
    );

    debug!(
        insured_salary = %insured_salary,
        accident_base = %accident_base,
        eligible,
        employee_total = %breakdown.employee_total,
        employer_total = %breakdown.employer_total,
        "Calculated insurance contributions"
    );

    breakdown
}

/// Reference salary for industrial-accident insurance: the hourly wage
/// over the legal reference hours (209), or the monthly amount.
pub fn industrial_accident_base(wage: &WageConfig, regime: &LaborRegime) -> Decimal {
    match wage.wage_type {
        WageType::Hourly => wage.amount * regime.wages.reference_monthly_hours,
        WageType::Monthly => wage.amount,
    }
}

/// Contributions for a computed monthly pay, insured on the gross total.
pub fn insurance_for_pay(
    wage: &WageConfig,
    pay: &PayBreakdown,
    eligible: bool,
    regime: &LaborRegime,
) -> InsuranceBreakdown {
    calculate_insurance(
        pay.total_pay,
        industrial_accident_base(wage, regime),
        eligible,
        regime,
    )
}
