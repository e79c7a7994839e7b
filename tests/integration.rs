//! Integration tests for the labor cost engine.
//!
//! This test suite covers the full pipeline with the regime loaded from
//! `./config/kr2025`:
//! - Standard full-time week at the minimum wage
//! - Statutory versus practical break policies
//! - Per-day and overnight schedules from JSON input
//! - Monthly wages
//! - Probation
//! - Budget solving and checking
//! - Error cases

use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

use labor_cost_engine::calculation::{
    BELOW_MINIMUM_WAGE, BreakPolicy, EXCEEDS_12_OVERTIME_HOURS, calculate_wage_report,
    calculate_work_stats, check_budget, hourly_employer_cost, solve_budget, try_time_to_minutes,
};
use labor_cost_engine::config::{ConfigLoader, LaborRegime};
use labor_cost_engine::error::EngineError;
use labor_cost_engine::models::{
    ProbationConfig, ProbationDiscount, WageConfig, WageType, Weekday, WorkSchedule,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn load_regime() -> LaborRegime {
    ConfigLoader::load("./config/kr2025")
        .expect("Failed to load config")
        .into_regime()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn nine_to_six(policy: BreakPolicy) -> WorkSchedule {
    WorkSchedule::uniform(Weekday::WEEKDAYS, "09:00", "18:00", policy)
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_bundle_equals_builtin_regime() {
    assert_eq!(load_regime(), LaborRegime::korea_2025());
}

#[test]
fn test_config_missing_directory() {
    match ConfigLoader::load("./config/kr1999") {
        Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("kr1999")),
        other => panic!("Expected ConfigNotFound, got {:?}", other),
    }
}

// =============================================================================
// Standard full-time week
// =============================================================================

#[test]
fn test_full_time_week_at_minimum_wage() {
    let regime = load_regime();
    let report = calculate_wage_report(
        &nine_to_six(BreakPolicy::Practical),
        &WageConfig::hourly(decimal("10030")),
        None,
        &regime,
    );

    let monday = report.stats.per_day[&Weekday::Mon];
    assert_eq!(monday.net_minutes, 480);
    assert_eq!(report.stats.weekly_net_minutes, 2400);
    assert_eq!(report.stats.monthly_net_minutes, 10428);

    assert!(report.weekly_holiday_eligibility.is_eligible);
    assert!(report.insurance_eligibility.is_eligible);

    assert_eq!(report.pay.base_pay, decimal("1743214"));
    assert_eq!(report.pay.weekly_holiday_pay, decimal("349000"));
    assert_eq!(report.pay.overtime_pay, Decimal::ZERO);
    assert_eq!(report.pay.night_pay, Decimal::ZERO);
    assert_eq!(report.pay.total_pay, decimal("2092214"));

    assert_eq!(report.net_pay_estimate, decimal("1993836"));
    assert_eq!(report.employer_cost, decimal("2221405"));
    assert!(report.is_clean());
}

#[test]
fn test_statutory_breaks_shorten_the_week() {
    let regime = load_regime();
    let report = calculate_wage_report(
        &nine_to_six(BreakPolicy::Statutory),
        &WageConfig::hourly(decimal("10030")),
        None,
        &regime,
    );

    // 540 - 90 = 450 per day, 37.5 hours a week
    assert_eq!(report.stats.weekly_net_minutes, 2250);
    assert_eq!(report.stats.monthly_net_minutes, 9776);
    assert_eq!(report.pay.base_pay, decimal("1634221"));
    // 10030 * 7.5 * 4.345 = 326,852.63
    assert_eq!(report.pay.weekly_holiday_pay, decimal("327000"));
}

// =============================================================================
// JSON input
// =============================================================================

#[test]
fn test_per_day_schedule_from_json() {
    let regime = load_regime();
    let schedule: WorkSchedule = serde_json::from_value(json!({
        "time_mode": "per_day",
        "shifts": {
            "fri": { "start": "18:00", "end": "23:00" },
            "sat": { "start": "22:00", "end": "06:00", "break_minutes": 0 },
            "sun": { "start": "10:00", "end": "14:00", "break_policy": "statutory" }
        }
    }))
    .unwrap();
    let wage: WageConfig = serde_json::from_value(json!({
        "wage_type": "hourly",
        "amount": "11000"
    }))
    .unwrap();

    let stats = calculate_work_stats(&schedule, &regime);

    // Fri: 300 - 30 = 270, night 60
    assert_eq!(stats.per_day[&Weekday::Fri].net_minutes, 270);
    assert_eq!(stats.per_day[&Weekday::Fri].night_minutes, 60);
    // Sat: 480 - 60 = 420 (supplied break ignored), night 480
    assert_eq!(stats.per_day[&Weekday::Sat].net_minutes, 420);
    assert_eq!(stats.per_day[&Weekday::Sat].night_minutes, 480);
    // Sun: 240 - 30 = 210
    assert_eq!(stats.per_day[&Weekday::Sun].net_minutes, 210);
    assert_eq!(stats.weekly_net_minutes, 900);
    assert_eq!(stats.weekly_night_minutes, 540);

    let report = calculate_wage_report(&schedule, &wage, None, &regime);
    // 15 hours a week: both thresholds met exactly
    assert!(report.weekly_holiday_eligibility.is_eligible);
    assert!(report.insurance_eligibility.is_eligible);
    // 540 * 4.345 = 2346.3 -> 2346 minutes at half rate
    assert_eq!(report.pay.night_pay, decimal("215050"));
    // 11000 * 3 * 4.345 = 143,385
    assert_eq!(report.pay.weekly_holiday_pay, decimal("143000"));
}

#[test]
fn test_invalid_probation_discount_rejected() {
    let result: Result<ProbationConfig, _> = serde_json::from_value(json!({
        "discount": 12,
        "applicable": true
    }));
    assert!(result.is_err());

    let config: ProbationConfig = serde_json::from_value(json!({
        "discount": 25,
        "applicable": true
    }))
    .unwrap();
    assert_eq!(config.discount, ProbationDiscount::TwentyFive);
}

#[test]
fn test_strict_time_parsing() {
    assert_eq!(try_time_to_minutes("18:30").unwrap(), 1110);
    assert!(matches!(
        try_time_to_minutes("6pm"),
        Err(EngineError::InvalidTime { .. })
    ));
}

// =============================================================================
// Overtime and caps
// =============================================================================

#[test]
fn test_long_days_exceed_overtime_cap() {
    let regime = load_regime();
    // 08:00 - 22:00: 840 - 120 = 720 net, 240 overtime per day, 20 hours a week
    let schedule = WorkSchedule::uniform(
        Weekday::WEEKDAYS,
        "08:00",
        "22:00",
        BreakPolicy::Practical,
    );
    let report =
        calculate_wage_report(&schedule, &WageConfig::hourly(decimal("10030")), None, &regime);

    assert_eq!(report.stats.weekly_overtime_minutes, 1200);
    assert!(report.compliance.is_over_52);
    assert!(report.compliance.is_over_12_overtime);
    assert!(report.audit.has_warning(EXCEEDS_12_OVERTIME_HOURS));
    assert!(report.pay.overtime_pay > Decimal::ZERO);
    assert_eq!(report.pay.night_pay, Decimal::ZERO);
}

// =============================================================================
// Monthly wage and probation
// =============================================================================

#[test]
fn test_monthly_wage_below_minimum_warns() {
    let regime = load_regime();
    let report = calculate_wage_report(
        &nine_to_six(BreakPolicy::Practical),
        &WageConfig::monthly(decimal("2000000")),
        None,
        &regime,
    );

    assert_eq!(report.pay.wage_type, WageType::Monthly);
    assert_eq!(report.minimum_wage.required_amount, decimal("2096270"));
    assert_eq!(report.minimum_wage.shortfall, decimal("96270"));
    assert!(report.audit.has_warning(BELOW_MINIMUM_WAGE));
}

#[test]
fn test_probation_floor_for_deep_discount() {
    let regime = load_regime();
    let probation = ProbationConfig {
        discount: ProbationDiscount::Thirty,
        applicable: true,
    };
    let report = calculate_wage_report(
        &nine_to_six(BreakPolicy::Practical),
        &WageConfig::monthly(decimal("2000000")),
        Some(&probation),
        &regime,
    );

    let result = report.probation.unwrap();
    assert_eq!(result.discounted_base, decimal("1400000"));
    assert_eq!(result.effective_base, decimal("1887000"));
    assert!(result.floor_applied);
}

// =============================================================================
// Budget
// =============================================================================

#[test]
fn test_solved_wage_passes_budget_check() {
    let regime = load_regime();
    let schedule = nine_to_six(BreakPolicy::Practical);
    let stats = calculate_work_stats(&schedule, &regime);
    let budget = decimal("2800000");

    let solution = solve_budget(budget, WageType::Hourly, &stats, &regime);
    assert!(solution.feasible);
    let wage = solution.wage.unwrap();
    assert!(wage >= regime.wages.minimum_hourly);

    let check = check_budget(budget, &WageConfig::hourly(wage), &stats, true, &regime);
    assert!(check.within_budget);
    assert_eq!(Some(check.estimated_cost), solution.estimated_cost);

    let over = check_budget(
        budget,
        &WageConfig::hourly(wage + Decimal::ONE),
        &stats,
        true,
        &regime,
    );
    assert!(!over.within_budget);
}

#[test]
fn test_budget_equal_to_minimum_cost() {
    let mut regime = load_regime();
    regime.budget.safety_margin = Decimal::ZERO;
    let stats = calculate_work_stats(&nine_to_six(BreakPolicy::Practical), &regime);
    let budget = hourly_employer_cost(regime.wages.minimum_hourly, &stats, true, &regime);

    let solution = solve_budget(budget, WageType::Hourly, &stats, &regime);
    assert!(solution.feasible);
    assert_eq!(solution.wage, Some(regime.wages.minimum_hourly));

    let short = solve_budget(budget - Decimal::ONE, WageType::Hourly, &stats, &regime);
    assert!(!short.feasible);
    assert_eq!(short.wage, None);
}

// =============================================================================
// Repeatability
// =============================================================================

#[test]
fn test_reports_are_bit_identical() {
    let regime = load_regime();
    let schedule = nine_to_six(BreakPolicy::Statutory);
    let wage = WageConfig::hourly(decimal("12500")).with_allowances(decimal("50000"));

    let first = serde_json::to_string(&calculate_wage_report(&schedule, &wage, None, &regime))
        .unwrap();
    let second = serde_json::to_string(&calculate_wage_report(&schedule, &wage, None, &regime))
        .unwrap();
    assert_eq!(first, second);
}
