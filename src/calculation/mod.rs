//! Calculation logic for the labor cost engine.
//!
//! This module contains the time and money helpers, the break-time
//! policies, working-time aggregation, the eligibility and compliance
//! rules, pay, probation and insurance calculation, the budget solver and
//! the wage report that ties them together.

mod break_time;
mod budget;
mod eligibility;
mod insurance;
mod pay;
mod probation;
mod report;
mod time_utils;
mod work_time;

pub use break_time::{BreakPolicy, practical_break_minutes, statutory_break_minutes};
pub use budget::{
    BudgetCheck, BudgetSolution, check_budget, hourly_employer_cost, monthly_employer_cost,
    solve_budget, solve_hourly_budget, solve_monthly_budget, spendable_budget,
};
pub use eligibility::{
    Eligibility, MinimumWageCheck, WorkTimeCompliance, insurance_eligibility,
    minimum_monthly_amount, minimum_wage_check, weekly_holiday_eligibility, work_time_compliance,
};
pub use insurance::{calculate_insurance, industrial_accident_base, insurance_for_pay};
pub use pay::{calculate_hourly_pay, calculate_monthly_pay, calculate_pay, weekly_holiday_pay};
pub use probation::{ProbationPay, calculate_probation_pay};
pub use report::{
    BELOW_MINIMUM_WAGE, EXCEEDS_12_OVERTIME_HOURS, EXCEEDS_52_HOURS, PROBATION_FLOOR_APPLIED,
    WageReport, calculate_wage_report,
};
pub use time_utils::{
    format_thousands, format_won, minutes_to_hours, minutes_to_label, parse_thousands,
    round_to_nearest_thousand, round_won, time_to_minutes, try_time_to_minutes,
};
pub use work_time::{
    NIGHT_SAMPLE_STEP, calculate_day_stats, calculate_work_stats, contract_monthly_hours,
    night_minutes, paid_monthly_hours, weekly_holiday_hours, weekly_to_monthly_minutes,
};
