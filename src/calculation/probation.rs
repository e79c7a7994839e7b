//! Probation pay.
//!
//! During probation an employer may pay a discounted wage, but never less
//! than 90% of the minimum wage for the contractual hours (Minimum Wage Act
//! article 5(2)). Whether a contract qualifies (a term of at least a year,
//! not simple manual labor) is decided by the caller and passed in as
//! [`ProbationConfig::applicable`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LaborRegime;
use crate::models::ProbationConfig;

use super::time_utils::{round_to_nearest_thousand, round_won};

/// Monthly pay during probation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbationPay {
    /// Discount actually applied, in percent (0 when not applicable).
    pub discount_percent: u8,
    /// Base salary after the discount, before the floor.
    pub discounted_base: Decimal,
    /// The minimum-wage floor for the contractual hours.
    pub floor: Decimal,
    /// Base salary actually paid.
    pub effective_base: Decimal,
    /// Weekly-holiday pay, never discounted.
    pub weekly_holiday_pay: Decimal,
    /// Fixed allowances, never discounted.
    pub allowances: Decimal,
    /// Effective base plus weekly-holiday pay plus allowances.
    pub total: Decimal,
    /// True when the floor raised the discounted base.
    pub floor_applied: bool,
    /// True when a discount was applied at all.
    pub discount_applied: bool,
}

/// Applies a probation discount to `base_salary`.
///
/// The discounted base is raised to the floor of
/// `minimum_hourly × probation_floor_ratio × monthly_hours` when it falls
/// below it, and the larger of the two is rounded once to the nearest 1,000
/// won. `discounted_base` and `floor` are reported in whole won.
/// Weekly-holiday pay and allowances pass through unchanged.
///
/// When the contract does not qualify, the base is paid in full and the
/// floor is only reported.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::calculate_probation_pay;
/// use labor_cost_engine::config::LaborRegime;
/// use labor_cost_engine::models::{ProbationConfig, ProbationDiscount};
/// use rust_decimal::Decimal;
///
/// let regime = LaborRegime::korea_2025();
/// let probation = ProbationConfig {
///     discount: ProbationDiscount::Thirty,
///     applicable: true,
/// };
///
/// let pay = calculate_probation_pay(
///     Decimal::from(2_000_000),
///     &probation,
///     Decimal::from(209),
///     Decimal::ZERO,
///     Decimal::ZERO,
///     &regime,
/// );
///
/// // max(1,400,000, 10030 * 0.9 * 209 = 1,886,643) rounded
/// assert_eq!(pay.effective_base, Decimal::from(1_887_000));
/// assert!(pay.floor_applied);
/// ```
pub fn calculate_probation_pay(
    base_salary: Decimal,
    probation: &ProbationConfig,
    monthly_hours: Decimal,
    weekly_holiday_pay: Decimal,
    allowances: Decimal,
    regime: &LaborRegime,
) -> ProbationPay {
    let exact_floor =
        regime.wages.minimum_hourly * regime.wages.probation_floor_ratio * monthly_hours;
    let floor = round_won(exact_floor);

    if !probation.applicable {
        return ProbationPay {
            discount_percent: 0,
            discounted_base: base_salary,
            floor,
            effective_base: base_salary,
            weekly_holiday_pay,
            allowances,
            total: base_salary + weekly_holiday_pay + allowances,
            floor_applied: false,
            discount_applied: false,
        };
    }

    let exact_discounted = base_salary * (Decimal::ONE - probation.discount.rate());
    let discounted_base = round_won(exact_discounted);
    let floor_applied = exact_discounted < exact_floor;
    let effective_base = round_to_nearest_thousand(exact_discounted.max(exact_floor));
    let total = effective_base + weekly_holiday_pay + allowances;

    debug!(
        base_salary = %base_salary,
        discount_percent = probation.discount.percent(),
        discounted_base = %discounted_base,
        floor = %floor,
        effective_base = %effective_base,
        floor_applied,
        "Calculated probation pay"
    );

    ProbationPay {
        discount_percent: probation.discount.percent(),
        discounted_base,
        floor,
        effective_base,
        weekly_holiday_pay,
        allowances,
        total,
        floor_applied,
        discount_applied: true,
    }
}
