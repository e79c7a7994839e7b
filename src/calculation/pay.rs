//! Monthly pay calculation.
//!
//! Turns a wage and the working-time totals of a schedule into a
//! [`PayBreakdown`]. Overtime and night work earn a premium on top of the
//! base pay (Labor Standards Act article 56), and weekly-holiday pay is owed
//! from 15 hours a week (article 55).
//!
//! The two wage types are read differently:
//!
//! - An **hourly** wage pays the monthly net hours, plus weekly-holiday pay
//!   rounded to the nearest 1,000 won.
//! - A **monthly** wage already includes weekly-holiday pay. Its ordinary
//!   hourly wage is the amount over the paid monthly hours, and only the
//!   premiums are added on top.
//!
//! Overtime minutes are already part of the net minutes the base pays, so
//! overtime and night pay are the premium alone, never the full 1.5×.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::LaborRegime;
use crate::models::{PayBreakdown, WageConfig, WageType, WorkStats};

use super::time_utils::{round_to_nearest_thousand, round_won};
use super::work_time::{paid_monthly_hours, weekly_holiday_hours};

fn wage_for_minutes(hourly_wage: Decimal, minutes: u32) -> Decimal {
    hourly_wage * Decimal::from(minutes) / Decimal::from(60)
}

fn premium_for_minutes(hourly_wage: Decimal, minutes: u32, regime: &LaborRegime) -> Decimal {
    round_won(wage_for_minutes(hourly_wage * regime.wages.premium_rate, minutes))
}

/// Monthly weekly-holiday pay for an hourly wage, rounded to the nearest
/// 1,000 won.
///
/// Nothing is owed under 15 weekly hours. From 40 hours the full eight
/// hours are paid for each of the 4.345 weeks in a month; in between the
/// eight hours are pro-rated by `weekly_hours / 40`.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::weekly_holiday_pay;
/// use labor_cost_engine::config::LaborRegime;
/// use rust_decimal::Decimal;
///
/// let regime = LaborRegime::korea_2025();
/// let wage = Decimal::from(10030);
///
/// assert_eq!(weekly_holiday_pay(wage, Decimal::from(40), &regime), Decimal::from(349_000));
/// assert_eq!(weekly_holiday_pay(wage, Decimal::from(15), &regime), Decimal::from(131_000));
/// assert_eq!(weekly_holiday_pay(wage, Decimal::from(14), &regime), Decimal::ZERO);
/// ```
pub fn weekly_holiday_pay(
    hourly_wage: Decimal,
    weekly_hours: Decimal,
    regime: &LaborRegime,
) -> Decimal {
    let hours = weekly_holiday_hours(weekly_hours, regime);
    if hours.is_zero() {
        return Decimal::ZERO;
    }
    round_to_nearest_thousand(hourly_wage * hours * regime.time.weeks_per_month)
}

/// Pay for an hourly wage.
pub fn calculate_hourly_pay(
    hourly_wage: Decimal,
    allowances: Decimal,
    stats: &WorkStats,
    regime: &LaborRegime,
) -> PayBreakdown {
    debug_assert!(hourly_wage >= Decimal::ZERO, "hourly wage must not be negative");

    let base_pay = round_won(wage_for_minutes(hourly_wage, stats.monthly_net_minutes));
    let overtime_pay = premium_for_minutes(hourly_wage, stats.monthly_overtime_minutes, regime);
    let night_pay = premium_for_minutes(hourly_wage, stats.monthly_night_minutes, regime);
    let weekly_holiday_pay = weekly_holiday_pay(hourly_wage, stats.weekly_net_hours(), regime);
    let total_pay = base_pay + overtime_pay + night_pay + weekly_holiday_pay + allowances;

    debug!(
        hourly_wage = %hourly_wage,
        base_pay = %base_pay,
        overtime_pay = %overtime_pay,
        night_pay = %night_pay,
        weekly_holiday_pay = %weekly_holiday_pay,
        total_pay = %total_pay,
        "Calculated hourly pay"
    );

    PayBreakdown {
        wage_type: WageType::Hourly,
        hourly_wage,
        base_pay,
        overtime_pay,
        night_pay,
        weekly_holiday_pay,
        allowances,
        total_pay,
    }
}

/// Pay for a monthly wage that includes weekly-holiday pay.
///
/// The ordinary hourly wage is the amount over the paid monthly hours,
/// rounded to two decimals; it is zero for a schedule without working time.
pub fn calculate_monthly_pay(
    monthly_amount: Decimal,
    allowances: Decimal,
    stats: &WorkStats,
    regime: &LaborRegime,
) -> PayBreakdown {
    debug_assert!(monthly_amount >= Decimal::ZERO, "monthly wage must not be negative");

    let paid_hours = paid_monthly_hours(stats, regime);
    let hourly_wage = if paid_hours > Decimal::ZERO {
        (monthly_amount / paid_hours).round_dp(2)
    } else {
        Decimal::ZERO
    };

    let overtime_pay = premium_for_minutes(hourly_wage, stats.monthly_overtime_minutes, regime);
    let night_pay = premium_for_minutes(hourly_wage, stats.monthly_night_minutes, regime);
    let total_pay = monthly_amount + overtime_pay + night_pay + allowances;

    debug!(
        monthly_amount = %monthly_amount,
        paid_hours = %paid_hours,
        hourly_wage = %hourly_wage,
        overtime_pay = %overtime_pay,
        night_pay = %night_pay,
        total_pay = %total_pay,
        "Calculated monthly pay"
    );

    PayBreakdown {
        wage_type: WageType::Monthly,
        hourly_wage,
        base_pay: monthly_amount,
        overtime_pay,
        night_pay,
        weekly_holiday_pay: Decimal::ZERO,
        allowances,
        total_pay,
    }
}

/// Pay for a wage configuration.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::{BreakPolicy, calculate_pay, calculate_work_stats};
/// use labor_cost_engine::config::LaborRegime;
/// use labor_cost_engine::models::{WageConfig, Weekday, WorkSchedule};
/// use rust_decimal::Decimal;
///
/// let regime = LaborRegime::korea_2025();
/// let schedule = WorkSchedule::uniform(Weekday::WEEKDAYS, "09:00", "18:00", BreakPolicy::Practical);
/// let stats = calculate_work_stats(&schedule, &regime);
///
/// let pay = calculate_pay(&WageConfig::hourly(Decimal::from(10030)), &stats, &regime);
/// assert_eq!(pay.base_pay, Decimal::from(1_743_214));
/// assert_eq!(pay.weekly_holiday_pay, Decimal::from(349_000));
/// ```
pub fn calculate_pay(wage: &WageConfig, stats: &WorkStats, regime: &LaborRegime) -> PayBreakdown {
    match wage.wage_type {
        WageType::Hourly => calculate_hourly_pay(wage.amount, wage.allowances, stats, regime),
        WageType::Monthly => calculate_monthly_pay(wage.amount, wage.allowances, stats, regime),
    }
}
