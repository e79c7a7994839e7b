//! Pay and insurance breakdown models.
//!
//! These records are the numeric output handed to contract and report
//! rendering. All amounts are whole won.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_won;

use super::WageType;

/// Monthly pay split into its legal components.
///
/// # Example
///
/// ```
/// use labor_cost_engine::models::{PayBreakdown, WageType};
/// use rust_decimal::Decimal;
///
/// let pay = PayBreakdown {
///     wage_type: WageType::Hourly,
///     hourly_wage: Decimal::from(10030),
///     base_pay: Decimal::from(1_743_214),
///     overtime_pay: Decimal::ZERO,
///     night_pay: Decimal::ZERO,
///     weekly_holiday_pay: Decimal::from(349_000),
///     allowances: Decimal::ZERO,
///     total_pay: Decimal::from(2_092_214),
/// };
/// assert_eq!(pay.premium_pay(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The wage type the breakdown was computed for.
    pub wage_type: WageType,
    /// Ordinary hourly wage used for the premiums.
    pub hourly_wage: Decimal,
    /// Pay for net working time (the monthly amount for monthly wages).
    pub base_pay: Decimal,
    /// Overtime premium on top of the base pay.
    pub overtime_pay: Decimal,
    /// Night-work premium on top of the base pay.
    pub night_pay: Decimal,
    /// Weekly-holiday pay (zero for monthly wages, which include it).
    pub weekly_holiday_pay: Decimal,
    /// Fixed allowances.
    pub allowances: Decimal,
    /// Sum of all components.
    pub total_pay: Decimal,
}

impl PayBreakdown {
    /// Overtime plus night premiums.
    pub fn premium_pay(&self) -> Decimal {
        self.overtime_pay + self.night_pay
    }
}

/// One insurance contribution and who pays it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// The full contribution.
    pub amount: Decimal,
    /// Part withheld from the employee's pay.
    pub employee_share: Decimal,
    /// Part borne by the employer.
    pub employer_share: Decimal,
}

impl Contribution {
    /// Splits `amount` in half. The employee half is rounded to whole won and
    /// the employer takes the remainder, so the shares always add up.
    pub fn shared(amount: Decimal) -> Self {
        let employee_share = round_won(amount / Decimal::from(2));
        Self {
            amount,
            employee_share,
            employer_share: amount - employee_share,
        }
    }

    /// A contribution paid entirely by the employer.
    pub fn employer_only(amount: Decimal) -> Self {
        Self {
            amount,
            employee_share: Decimal::ZERO,
            employer_share: amount,
        }
    }
}

/// The five statutory insurance contributions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceBreakdown {
    /// Salary the mandatory contributions were computed from.
    pub insured_salary: Decimal,
    /// Salary the industrial-accident premium was computed from.
    pub accident_base: Decimal,
    /// National pension.
    pub national_pension: Contribution,
    /// National health insurance.
    pub health: Contribution,
    /// Long-term care insurance.
    pub long_term_care: Contribution,
    /// Employment insurance.
    pub employment: Contribution,
    /// Industrial-accident insurance.
    pub industrial_accident: Contribution,
    /// Sum of all five amounts.
    pub total: Decimal,
    /// Sum of the employee shares.
    pub employee_total: Decimal,
    /// Sum of the employer shares.
    pub employer_total: Decimal,
}

impl InsuranceBreakdown {
    /// Builds the breakdown and its totals from the five contributions.
    pub fn from_contributions(
        insured_salary: Decimal,
        accident_base: Decimal,
        contributions: [Contribution; 5],
    ) -> Self {
        let [national_pension, health, long_term_care, employment, industrial_accident] =
            contributions;
        let total: Decimal = contributions.iter().map(|c| c.amount).sum();
        let employee_total: Decimal = contributions.iter().map(|c| c.employee_share).sum();
        let employer_total: Decimal = contributions.iter().map(|c| c.employer_share).sum();

        Self {
            insured_salary,
            accident_base,
            national_pension,
            health,
            long_term_care,
            employment,
            industrial_accident,
            total,
            employee_total,
            employer_total,
        }
    }
}
