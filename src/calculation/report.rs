//! Wage report.
//!
//! Runs every rule for one schedule and wage and collects the results,
//! together with an audit trace naming the article each rule implements.
//! Business-rule violations never fail the report; they are recorded as
//! warnings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::config::LaborRegime;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, InsuranceBreakdown, PayBreakdown, ProbationConfig,
    WageConfig, WageType, WorkSchedule, WorkStats,
};

use super::eligibility::{
    Eligibility, MinimumWageCheck, WorkTimeCompliance, insurance_eligibility, minimum_wage_check,
    weekly_holiday_eligibility, work_time_compliance,
};
use super::insurance::{calculate_insurance, industrial_accident_base, insurance_for_pay};
use super::pay::calculate_pay;
use super::probation::{ProbationPay, calculate_probation_pay};
use super::time_utils::{format_won, minutes_to_label};
use super::work_time::{calculate_work_stats, contract_monthly_hours, paid_monthly_hours};

/// Warning code: the wage is below the statutory minimum.
pub const BELOW_MINIMUM_WAGE: &str = "BELOW_MINIMUM_WAGE";
/// Warning code: weekly hours exceed the weekly cap.
pub const EXCEEDS_52_HOURS: &str = "EXCEEDS_52_HOURS";
/// Warning code: weekly overtime exceeds the overtime cap.
pub const EXCEEDS_12_OVERTIME_HOURS: &str = "EXCEEDS_12_OVERTIME_HOURS";
/// Warning code: the probation discount was limited by the floor.
pub const PROBATION_FLOOR_APPLIED: &str = "PROBATION_FLOOR_APPLIED";

/// Everything computed for one schedule and wage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageReport {
    /// Code of the regime the report was computed under.
    pub regime_code: String,
    /// Working-time totals.
    pub stats: WorkStats,
    /// Monthly pay before any probation discount.
    pub pay: PayBreakdown,
    /// Probation pay, when probation was requested.
    pub probation: Option<ProbationPay>,
    /// Monthly pay actually owed: the pay total, or the probation total
    /// plus premiums while a discount applies.
    pub gross_pay: Decimal,
    /// Insurance contributions on `gross_pay`.
    pub insurance: InsuranceBreakdown,
    /// Social insurance enrollment.
    pub insurance_eligibility: Eligibility,
    /// Weekly-holiday pay entitlement.
    pub weekly_holiday_eligibility: Eligibility,
    /// Weekly hour caps.
    pub compliance: WorkTimeCompliance,
    /// Minimum wage check.
    pub minimum_wage: MinimumWageCheck,
    /// Gross pay less the employee's insurance shares.
    pub net_pay_estimate: Decimal,
    /// Gross pay plus the employer's insurance shares.
    pub employer_cost: Decimal,
    /// Rules applied and warnings raised.
    pub audit: AuditTrace,
}

impl WageReport {
    /// Returns true if no warning was raised.
    pub fn is_clean(&self) -> bool {
        self.audit.warnings.is_empty()
    }
}

fn record_step(
    audit: &mut AuditTrace,
    rule_id: &str,
    rule_name: &str,
    legal_ref: &str,
    input: Value,
    output: Value,
    reasoning: String,
) {
    audit.steps.push(AuditStep {
        step_number: audit.next_step_number(),
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        legal_ref: legal_ref.to_string(),
        input,
        output,
        reasoning,
    });
}

fn record_warning(audit: &mut AuditTrace, code: &str, message: String, severity: &str) {
    warn!(code, message = %message, "Wage report warning");
    audit.warnings.push(AuditWarning::new(code, message, severity));
}

/// Builds the complete wage report.
///
/// Steps are recorded in this order: working time, breaks, insurance
/// eligibility, weekly-holiday eligibility, hour caps, pay, minimum wage,
/// probation (when requested) and insurance.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::{BreakPolicy, calculate_wage_report};
/// use labor_cost_engine::config::LaborRegime;
/// use labor_cost_engine::models::{WageConfig, Weekday, WorkSchedule};
/// use rust_decimal::Decimal;
///
/// let regime = LaborRegime::korea_2025();
/// let schedule = WorkSchedule::uniform(Weekday::WEEKDAYS, "09:00", "18:00", BreakPolicy::Practical);
/// let wage = WageConfig::hourly(Decimal::from(10030));
///
/// let report = calculate_wage_report(&schedule, &wage, None, &regime);
/// assert_eq!(report.pay.total_pay, Decimal::from(2_092_214));
/// assert!(report.is_clean());
/// ```
pub fn calculate_wage_report(
    schedule: &WorkSchedule,
    wage: &WageConfig,
    probation: Option<&ProbationConfig>,
    regime: &LaborRegime,
) -> WageReport {
    let mut audit = AuditTrace::default();

    // Working time
    let stats = calculate_work_stats(schedule, regime);
    record_step(
        &mut audit,
        "work_time_aggregation",
        "근로시간 집계",
        "근로기준법 제50조",
        json!({
            "work_days": schedule.work_days(),
            "weeks_per_month": regime.time.weeks_per_month,
        }),
        json!({
            "weekly_net_minutes": stats.weekly_net_minutes,
            "weekly_night_minutes": stats.weekly_night_minutes,
            "weekly_overtime_minutes": stats.weekly_overtime_minutes,
            "monthly_net_minutes": stats.monthly_net_minutes,
        }),
        format!(
            "주 {}일 근무, 주 실근로 {}, 월 평균 {}",
            stats.work_days(),
            minutes_to_label(stats.weekly_net_minutes),
            minutes_to_label(stats.monthly_net_minutes)
        ),
    );

    let breaks: Vec<Value> = schedule
        .shifts()
        .into_iter()
        .map(|(day, shift)| {
            json!({
                "day": day,
                "duration_minutes": shift.duration_minutes(),
                "break_minutes": shift.break_minutes(),
                "break_policy": shift.break_policy(),
            })
        })
        .collect();
    let weekly_break_minutes: u32 = schedule
        .shifts()
        .iter()
        .map(|(_, shift)| shift.break_minutes())
        .sum();
    record_step(
        &mut audit,
        "break_time",
        "휴게시간",
        "근로기준법 제54조",
        json!({ "shifts": breaks }),
        json!({ "weekly_break_minutes": weekly_break_minutes }),
        format!(
            "주 {}의 무급 휴게시간을 소정근로시간에서 제외",
            minutes_to_label(weekly_break_minutes)
        ),
    );

    // Eligibility
    let weekly_hours = stats.weekly_net_hours();
    let monthly_hours = stats.monthly_net_hours();

    let insurance_eligibility = insurance_eligibility(weekly_hours, monthly_hours, regime);
    record_step(
        &mut audit,
        "insurance_eligibility",
        "4대보험 가입 대상",
        "국민연금법 시행령 제2조, 고용보험법 시행령 제3조",
        json!({
            "weekly_hours": weekly_hours.round_dp(2),
            "monthly_hours": monthly_hours.round_dp(2),
        }),
        json!({ "is_eligible": insurance_eligibility.is_eligible }),
        insurance_eligibility.reason.clone(),
    );

    let weekly_holiday_eligibility = weekly_holiday_eligibility(weekly_hours, regime);
    record_step(
        &mut audit,
        "weekly_holiday_eligibility",
        "주휴수당 지급 대상",
        "근로기준법 제55조, 제18조 제3항",
        json!({ "weekly_hours": weekly_hours.round_dp(2) }),
        json!({ "is_eligible": weekly_holiday_eligibility.is_eligible }),
        weekly_holiday_eligibility.reason.clone(),
    );

    let overtime_hours = stats.weekly_overtime_hours();
    let compliance = work_time_compliance(weekly_hours, overtime_hours, regime);
    record_step(
        &mut audit,
        "work_time_compliance",
        "주 근로시간 상한",
        "근로기준법 제50조, 제53조",
        json!({
            "weekly_total_hours": weekly_hours.round_dp(2),
            "weekly_overtime_hours": overtime_hours.round_dp(2),
        }),
        json!({
            "is_compliant": compliance.is_compliant,
            "is_over_52": compliance.is_over_52,
            "is_over_12_overtime": compliance.is_over_12_overtime,
        }),
        format!(
            "주 {}시간 (상한 {}시간), 연장근로 {}시간 (한도 {}시간)",
            weekly_hours.round_dp(1).normalize(),
            regime.time.weekly_hour_cap,
            overtime_hours.round_dp(1).normalize(),
            regime.time.weekly_overtime_cap
        ),
    );
    if compliance.is_over_52 {
        record_warning(
            &mut audit,
            EXCEEDS_52_HOURS,
            format!(
                "주 {}시간 근무로 주 {}시간 상한을 초과합니다",
                weekly_hours.round_dp(1).normalize(),
                regime.time.weekly_hour_cap
            ),
            "high",
        );
    }
    if compliance.is_over_12_overtime {
        record_warning(
            &mut audit,
            EXCEEDS_12_OVERTIME_HOURS,
            format!(
                "주 연장근로 {}시간으로 주 {}시간 한도를 초과합니다",
                overtime_hours.round_dp(1).normalize(),
                regime.time.weekly_overtime_cap
            ),
            "high",
        );
    }

    // Pay
    let pay = calculate_pay(wage, &stats, regime);
    record_step(
        &mut audit,
        "pay_calculation",
        "월 급여",
        "근로기준법 제55조, 제56조",
        json!({
            "wage_type": wage.wage_type,
            "amount": wage.amount,
            "allowances": wage.allowances,
            "paid_monthly_hours": paid_monthly_hours(&stats, regime).round_dp(2),
        }),
        serde_json::to_value(&pay).unwrap_or(Value::Null),
        format!(
            "기본급 {} + 연장 {} + 야간 {} + 주휴 {} + 수당 {} = {}",
            format_won(pay.base_pay),
            format_won(pay.overtime_pay),
            format_won(pay.night_pay),
            format_won(pay.weekly_holiday_pay),
            format_won(pay.allowances),
            format_won(pay.total_pay)
        ),
    );

    let minimum_wage = minimum_wage_check(wage, &stats, regime);
    record_step(
        &mut audit,
        "minimum_wage_check",
        "최저임금",
        "최저임금법 제6조",
        json!({
            "wage_type": wage.wage_type,
            "amount": wage.amount,
            "minimum_hourly_wage": minimum_wage.minimum_hourly_wage,
        }),
        json!({
            "is_compliant": minimum_wage.is_compliant,
            "required_amount": minimum_wage.required_amount,
            "shortfall": minimum_wage.shortfall,
        }),
        minimum_wage.message.clone(),
    );
    if !minimum_wage.is_compliant {
        record_warning(
            &mut audit,
            BELOW_MINIMUM_WAGE,
            minimum_wage.message.clone(),
            "high",
        );
    }

    // Probation
    let probation = probation.map(|config| {
        let contract_hours = match wage.wage_type {
            WageType::Hourly => monthly_hours,
            WageType::Monthly => contract_monthly_hours(&stats, regime),
        };
        let result = calculate_probation_pay(
            pay.base_pay,
            config,
            contract_hours,
            pay.weekly_holiday_pay,
            pay.allowances,
            regime,
        );
        record_step(
            &mut audit,
            "probation_pay",
            "수습 감액",
            "최저임금법 제5조 제2항",
            json!({
                "base_salary": pay.base_pay,
                "discount_percent": config.discount.percent(),
                "applicable": config.applicable,
                "monthly_hours": contract_hours.round_dp(2),
            }),
            json!({
                "discounted_base": result.discounted_base,
                "floor": result.floor,
                "effective_base": result.effective_base,
                "total": result.total,
            }),
            if result.discount_applied {
                format!(
                    "{}% 감액 {}, 하한 {}, 지급 {}",
                    result.discount_percent,
                    format_won(result.discounted_base),
                    format_won(result.floor),
                    format_won(result.effective_base)
                )
            } else {
                "수습 감액 적용 대상이 아닌 계약입니다".to_string()
            },
        );
        if result.floor_applied {
            record_warning(
                &mut audit,
                PROBATION_FLOOR_APPLIED,
                format!(
                    "수습 감액 후 기본급이 최저임금의 {}% 하한 {}으로 조정되었습니다",
                    (regime.wages.probation_floor_ratio * Decimal::from(100)).normalize(),
                    format_won(result.floor)
                ),
                "low",
            );
        }
        result
    });

    // Insurance
    let (gross_pay, insurance) = match probation.as_ref().filter(|p| p.discount_applied) {
        Some(result) => {
            let gross_pay = result.total + pay.premium_pay();
            let insurance = calculate_insurance(
                gross_pay,
                industrial_accident_base(wage, regime),
                insurance_eligibility.is_eligible,
                regime,
            );
            (gross_pay, insurance)
        }
        None => (
            pay.total_pay,
            insurance_for_pay(wage, &pay, insurance_eligibility.is_eligible, regime),
        ),
    };
    record_step(
        &mut audit,
        "insurance_calculation",
        "4대보험료",
        "국민연금법 제88조, 국민건강보험법 제73조, 고용보험 및 산업재해보상보험의 보험료징수 등에 관한 법률 제13조",
        json!({
            "insured_salary": insurance.insured_salary,
            "accident_base": insurance.accident_base,
            "eligible": insurance_eligibility.is_eligible,
        }),
        json!({
            "total": insurance.total,
            "employee_total": insurance.employee_total,
            "employer_total": insurance.employer_total,
        }),
        format!(
            "근로자 부담 {}, 사업주 부담 {}",
            format_won(insurance.employee_total),
            format_won(insurance.employer_total)
        ),
    );

    let net_pay_estimate = gross_pay - insurance.employee_total;
    let employer_cost = gross_pay + insurance.employer_total;

    debug!(
        regime = %regime.metadata.code,
        gross_pay = %gross_pay,
        net_pay_estimate = %net_pay_estimate,
        employer_cost = %employer_cost,
        steps = audit.steps.len(),
        warnings = audit.warnings.len(),
        "Built wage report"
    );

    WageReport {
        regime_code: regime.metadata.code.clone(),
        stats,
        pay,
        probation,
        gross_pay,
        insurance,
        insurance_eligibility,
        weekly_holiday_eligibility,
        compliance,
        minimum_wage,
        net_pay_estimate,
        employer_cost,
        audit,
    }
}
