//! Budget solver.
//!
//! Given a monthly labor budget, finds the highest whole-won wage whose
//! employer cost stays within the budget less its safety margin. The cost
//! of a wage is linear in the wage:
//!
//! ```text
//! hourly:  W × H × m + W × 209 × r_accident
//! monthly: M × m + M × r_accident
//! ```
//!
//! where `H` is the paid monthly hours and `m` is the employer cost
//! multiplier for an enrolled employee (1 otherwise). The search bisects
//! whole won from the minimum wage upward and never returns a wage below
//! the minimum: when even the minimum is too expensive the solution is
//! infeasible.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LaborRegime;
use crate::models::{WageConfig, WageType, WorkStats};

use super::eligibility::{insurance_eligibility, minimum_monthly_amount};
use super::time_utils::{format_won, round_won};
use super::work_time::paid_monthly_hours;

/// Result of solving a budget for a wage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSolution {
    /// Whether a wage at or above the minimum fits the budget.
    pub feasible: bool,
    /// The wage type solved for.
    pub wage_type: WageType,
    /// The highest affordable wage, when feasible.
    pub wage: Option<Decimal>,
    /// The budget as given.
    pub budget: Decimal,
    /// The budget less the safety margin.
    pub spendable_budget: Decimal,
    /// Monthly employer cost of `wage`, when feasible.
    pub estimated_cost: Option<Decimal>,
    /// The least wage the solver may return.
    pub minimum_wage: Decimal,
    /// Explanation suitable for display.
    pub reason: String,
}

/// Result of checking a chosen wage against a budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCheck {
    /// True when the estimated cost fits the spendable budget.
    pub within_budget: bool,
    /// Monthly employer cost of the wage and allowances.
    pub estimated_cost: Decimal,
    /// The budget less the safety margin.
    pub spendable_budget: Decimal,
    /// Spendable budget minus the estimated cost; negative when over.
    pub surplus: Decimal,
}

/// The budget left after holding back the regime's safety margin.
pub fn spendable_budget(budget: Decimal, regime: &LaborRegime) -> Decimal {
    budget * (Decimal::ONE - regime.budget.safety_margin)
}

fn payroll_multiplier(eligible: bool, regime: &LaborRegime) -> Decimal {
    if eligible {
        regime.employer_cost_multiplier()
    } else {
        Decimal::ONE
    }
}

fn hourly_cost_coefficient(stats: &WorkStats, eligible: bool, regime: &LaborRegime) -> Decimal {
    paid_monthly_hours(stats, regime) * payroll_multiplier(eligible, regime)
        + regime.wages.reference_monthly_hours * regime.insurance.industrial_accident
}

fn monthly_cost_coefficient(eligible: bool, regime: &LaborRegime) -> Decimal {
    payroll_multiplier(eligible, regime) + regime.insurance.industrial_accident
}

/// Monthly employer cost of an hourly wage, in whole won.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::{BreakPolicy, calculate_work_stats, hourly_employer_cost};
/// use labor_cost_engine::config::LaborRegime;
/// use labor_cost_engine::models::{Weekday, WorkSchedule};
/// use rust_decimal::Decimal;
///
/// let regime = LaborRegime::korea_2025();
/// let schedule = WorkSchedule::uniform(Weekday::WEEKDAYS, "09:00", "18:00", BreakPolicy::Practical);
/// let stats = calculate_work_stats(&schedule, &regime);
///
/// // 10030 × (208.56 × 1.096541 + 209 × 0.0147)
/// let cost = hourly_employer_cost(Decimal::from(10030), &stats, true, &regime);
/// assert_eq!(cost, Decimal::from(2_324_622));
/// ```
pub fn hourly_employer_cost(
    hourly_wage: Decimal,
    stats: &WorkStats,
    eligible: bool,
    regime: &LaborRegime,
) -> Decimal {
    round_won(hourly_wage * hourly_cost_coefficient(stats, eligible, regime))
}

/// Monthly employer cost of a monthly wage, in whole won.
pub fn monthly_employer_cost(
    monthly_wage: Decimal,
    eligible: bool,
    regime: &LaborRegime,
) -> Decimal {
    round_won(monthly_wage * monthly_cost_coefficient(eligible, regime))
}

/// Largest whole `wage >= floor` with `cost(wage) <= limit`.
///
/// `cost` must be non-decreasing and `cost(floor) <= limit` must hold. The
/// upper end is found by doubling the step from the floor, then bisected
/// until the interval is one won wide.
fn max_affordable_wage(
    floor: Decimal,
    limit: Decimal,
    cost: impl Fn(Decimal) -> Decimal,
) -> Decimal {
    let two = Decimal::from(2);
    let mut low = floor;
    let mut step = Decimal::ONE;
    let mut high = low + step;
    while cost(high) <= limit {
        low = high;
        step *= two;
        high = low + step;
    }

    while high - low > Decimal::ONE {
        let mid = ((low + high) / two).floor();
        if cost(mid) <= limit {
            low = mid;
        } else {
            high = mid;
        }
    }

    while low > floor && cost(low) > limit {
        low -= Decimal::ONE;
    }
    low
}

fn solve(
    wage_type: WageType,
    budget: Decimal,
    floor: Decimal,
    coefficient: Decimal,
    regime: &LaborRegime,
) -> BudgetSolution {
    let spendable = spendable_budget(budget, regime);
    let cost = |wage: Decimal| round_won(wage * coefficient);

    let infeasible = |reason: String| BudgetSolution {
        feasible: false,
        wage_type,
        wage: None,
        budget,
        spendable_budget: spendable,
        estimated_cost: None,
        minimum_wage: floor,
        reason,
    };

    if coefficient <= Decimal::ZERO {
        return infeasible(
            "인건비 계수가 0 이하여서 예산으로 임금을 산출할 수 없습니다".to_string(),
        );
    }

    let floor_cost = cost(floor);
    if floor_cost > spendable {
        debug!(
            budget = %budget,
            spendable = %spendable,
            floor = %floor,
            floor_cost = %floor_cost,
            "Budget below minimum wage cost"
        );
        return infeasible(format!(
            "최저임금 {} 기준 인건비 {}이(가) 사용 가능 예산 {}을(를) 초과합니다",
            format_won(floor),
            format_won(floor_cost),
            format_won(spendable)
        ));
    }

    let wage = max_affordable_wage(floor, spendable, &cost);
    let estimated_cost = cost(wage);

    debug!(
        budget = %budget,
        spendable = %spendable,
        wage = %wage,
        estimated_cost = %estimated_cost,
        "Solved budget"
    );

    BudgetSolution {
        feasible: true,
        wage_type,
        wage: Some(wage),
        budget,
        spendable_budget: spendable,
        estimated_cost: Some(estimated_cost),
        minimum_wage: floor,
        reason: format!(
            "사용 가능 예산 {} 내 최대 임금은 {}이며 예상 인건비는 {}입니다",
            format_won(spendable),
            format_won(wage),
            format_won(estimated_cost)
        ),
    }
}

/// Highest affordable hourly wage for a schedule.
pub fn solve_hourly_budget(
    budget: Decimal,
    stats: &WorkStats,
    eligible: bool,
    regime: &LaborRegime,
) -> BudgetSolution {
    solve(
        WageType::Hourly,
        budget,
        regime.wages.minimum_hourly,
        hourly_cost_coefficient(stats, eligible, regime),
        regime,
    )
}

/// Highest affordable monthly wage for a schedule.
///
/// The floor is the same minimum monthly amount the minimum wage check
/// requires.
pub fn solve_monthly_budget(
    budget: Decimal,
    stats: &WorkStats,
    eligible: bool,
    regime: &LaborRegime,
) -> BudgetSolution {
    solve(
        WageType::Monthly,
        budget,
        minimum_monthly_amount(stats, regime),
        monthly_cost_coefficient(eligible, regime),
        regime,
    )
}

/// Solves a budget, deciding insurance enrollment from the schedule.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::{BreakPolicy, calculate_work_stats, solve_budget};
/// use labor_cost_engine::config::LaborRegime;
/// use labor_cost_engine::models::{WageType, Weekday, WorkSchedule};
/// use rust_decimal::Decimal;
///
/// let regime = LaborRegime::korea_2025();
/// let schedule = WorkSchedule::uniform(Weekday::WEEKDAYS, "09:00", "18:00", BreakPolicy::Practical);
/// let stats = calculate_work_stats(&schedule, &regime);
///
/// let solution = solve_budget(Decimal::from(3_000_000), WageType::Hourly, &stats, &regime);
/// assert!(solution.feasible);
/// assert_eq!(solution.wage, Some(Decimal::from(12_296)));
/// ```
pub fn solve_budget(
    budget: Decimal,
    wage_type: WageType,
    stats: &WorkStats,
    regime: &LaborRegime,
) -> BudgetSolution {
    let eligible = insurance_eligibility(
        stats.weekly_net_hours(),
        stats.monthly_net_hours(),
        regime,
    )
    .is_eligible;

    match wage_type {
        WageType::Hourly => solve_hourly_budget(budget, stats, eligible, regime),
        WageType::Monthly => solve_monthly_budget(budget, stats, eligible, regime),
    }
}

/// Checks a chosen wage against a budget.
///
/// Allowances are costed like pay: with the employer burden when the
/// employee is enrolled.
pub fn check_budget(
    budget: Decimal,
    wage: &WageConfig,
    stats: &WorkStats,
    eligible: bool,
    regime: &LaborRegime,
) -> BudgetCheck {
    let wage_cost = match wage.wage_type {
        WageType::Hourly => hourly_employer_cost(wage.amount, stats, eligible, regime),
        WageType::Monthly => monthly_employer_cost(wage.amount, eligible, regime),
    };
    let allowance_cost = round_won(wage.allowances * payroll_multiplier(eligible, regime));
    let estimated_cost = wage_cost + allowance_cost;
    let spendable = spendable_budget(budget, regime);

    BudgetCheck {
        within_budget: estimated_cost <= spendable,
        estimated_cost,
        spendable_budget: spendable,
        surplus: spendable - estimated_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{BreakPolicy, calculate_work_stats};
    use crate::models::{Weekday, WorkSchedule};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn regime() -> LaborRegime {
        LaborRegime::korea_2025()
    }

    fn full_time_stats() -> WorkStats {
        let schedule = WorkSchedule::uniform(
            Weekday::WEEKDAYS,
            "09:00",
            "18:00",
            BreakPolicy::Practical,
        );
        calculate_work_stats(&schedule, &regime())
    }

    fn ten_hour_week_stats() -> WorkStats {
        let schedule = WorkSchedule::uniform(
            [Weekday::Mon, Weekday::Wed],
            "09:00",
            "14:30",
            BreakPolicy::Practical,
        );
        calculate_work_stats(&schedule, &regime())
    }

    // ==========================================================================
    // BG-001: cost model
    // ==========================================================================

    #[test]
    fn test_bg_001_hourly_cost() {
        let regime = regime();
        let stats = full_time_stats();
        assert_eq!(
            hourly_employer_cost(dec("10030"), &stats, true, &regime),
            dec("2324622")
        );
    }

    #[test]
    fn test_bg_001_monthly_cost() {
        let regime = regime();
        // 2,096,270 × 1.111241
        assert_eq!(
            monthly_employer_cost(dec("2096270"), true, &regime),
            dec("2329461")
        );
        // Not enrolled: only industrial accident
        assert_eq!(
            monthly_employer_cost(dec("1000000"), false, &regime),
            dec("1014700")
        );
    }

    // ==========================================================================
    // BG-002: solver
    // ==========================================================================

    #[test]
    fn test_bg_002_hourly_solution_is_maximal() {
        let regime = regime();
        let stats = full_time_stats();
        let solution = solve_hourly_budget(dec("3000000"), &stats, true, &regime);

        assert!(solution.feasible);
        assert_eq!(solution.spendable_budget, dec("2850000"));
        let wage = solution.wage.unwrap();
        assert_eq!(wage, dec("12296"));
        assert_eq!(solution.estimated_cost, Some(dec("2849806")));
        assert!(
            hourly_employer_cost(wage + Decimal::ONE, &stats, true, &regime)
                > solution.spendable_budget
        );
    }

    #[test]
    fn test_bg_002_monthly_solution_hits_exact_boundary() {
        let regime = regime();
        let solution = solve_monthly_budget(dec("3000000"), &full_time_stats(), true, &regime);

        // 2,564,700 × 1.111241 = 2,849,999.79
        assert_eq!(solution.wage, Some(dec("2564700")));
        assert_eq!(solution.estimated_cost, Some(dec("2850000")));
        assert_eq!(solution.minimum_wage, dec("2096270"));
    }

    #[test]
    fn test_bg_002_budget_equal_to_minimum_cost_returns_minimum() {
        let mut regime = regime();
        regime.budget.safety_margin = Decimal::ZERO;
        let stats = full_time_stats();
        let budget = hourly_employer_cost(dec("10030"), &stats, true, &regime);

        let solution = solve_hourly_budget(budget, &stats, true, &regime);
        assert!(solution.feasible);
        assert_eq!(solution.wage, Some(dec("10030")));
    }

    #[test]
    fn test_bg_002_budget_equal_to_minimum_cost_after_margin() {
        let regime = regime();
        let stats = full_time_stats();
        // 2,324,622 / 0.95 rounded up
        let budget = dec("2446971");

        let solution = solve_hourly_budget(budget, &stats, true, &regime);
        assert!(solution.feasible);
        assert_eq!(solution.wage, Some(dec("10030")));
    }

    #[test]
    fn test_bg_002_budget_below_minimum_is_infeasible() {
        let regime = regime();
        let solution = solve_hourly_budget(dec("1000000"), &full_time_stats(), true, &regime);

        assert!(!solution.feasible);
        assert_eq!(solution.wage, None);
        assert_eq!(solution.estimated_cost, None);
        assert_eq!(solution.minimum_wage, dec("10030"));
        assert!(solution.reason.contains("초과"));
    }

    #[test]
    fn test_bg_002_negative_coefficient_is_infeasible() {
        let solution = solve(
            WageType::Hourly,
            dec("1000000"),
            dec("10030"),
            dec("-1"),
            &regime(),
        );
        assert!(!solution.feasible);
        assert_eq!(solution.wage, None);
    }

    #[test]
    fn test_bg_002_part_time_not_enrolled() {
        let regime = regime();
        let stats = ten_hour_week_stats();
        assert_eq!(stats.monthly_net_minutes, 2607);

        let solution = solve_budget(dec("1000000"), WageType::Hourly, &stats, &regime);

        // 43.45 + 209 × 0.0147 = 46.5223 won of cost per won of wage
        assert_eq!(solution.wage, Some(dec("20420")));
        assert_eq!(solution.estimated_cost, Some(dec("949985")));
    }

    // ==========================================================================
    // BG-003: budget check
    // ==========================================================================

    #[test]
    fn test_bg_003_check_within_budget() {
        let regime = regime();
        let check = check_budget(
            dec("3000000"),
            &WageConfig::hourly(dec("10030")),
            &full_time_stats(),
            true,
            &regime,
        );
        assert!(check.within_budget);
        assert_eq!(check.estimated_cost, dec("2324622"));
        assert_eq!(check.surplus, dec("525378"));
    }

    #[test]
    fn test_bg_003_allowances_count_against_budget() {
        let regime = regime();
        let wage = WageConfig::monthly(dec("2500000")).with_allowances(dec("200000"));
        let check = check_budget(dec("3000000"), &wage, &full_time_stats(), true, &regime);

        // 2,778,103 + 219,308
        assert_eq!(check.estimated_cost, dec("2997411"));
        assert!(!check.within_budget);
        assert!(check.surplus < Decimal::ZERO);
    }
}
