//! Working-time aggregation.
//!
//! Turns a weekly schedule into per-day and aggregate net, night and
//! overtime minutes, and derives the paid-hour figures the pay rules,
//! eligibility checks and budget solver share.
//!
//! Night minutes are counted over the whole shift window, break included:
//! where the break falls inside the shift is not known, so a break taken at
//! night still counts toward the night total.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::LaborRegime;
use crate::models::{DailyShift, DayStats, WorkSchedule, WorkStats};

/// Granularity of night-window sampling, in minutes.
pub const NIGHT_SAMPLE_STEP: u32 = 10;

/// Counts the minutes of `[start, start + duration)` that fall in the
/// regime's night window, sampling every [`NIGHT_SAMPLE_STEP`] minutes.
/// A sample in the window counts for its whole step, or for the remaining
/// minutes when the last step is short.
pub fn night_minutes(start: u32, duration: u32, regime: &LaborRegime) -> u32 {
    let mut night = 0;
    let mut offset = 0;
    while offset < duration {
        let step = NIGHT_SAMPLE_STEP.min(duration - offset);
        if regime.is_night_minute(start + offset) {
            night += step;
        }
        offset += NIGHT_SAMPLE_STEP;
    }
    night
}

/// Computes net, night and overtime minutes for one shift.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::{BreakPolicy, calculate_day_stats};
/// use labor_cost_engine::config::LaborRegime;
/// use labor_cost_engine::models::DailyShift;
///
/// let regime = LaborRegime::korea_2025();
/// let shift = DailyShift::new("13:00", "23:00", BreakPolicy::Practical);
/// let stats = calculate_day_stats(&shift, &regime);
///
/// assert_eq!(stats.net_minutes, 510);
/// assert_eq!(stats.night_minutes, 60);
/// assert_eq!(stats.overtime_minutes, 30);
/// ```
pub fn calculate_day_stats(shift: &DailyShift, regime: &LaborRegime) -> DayStats {
    let duration = shift.duration_minutes();
    let net_minutes = shift.net_minutes();

    DayStats {
        net_minutes,
        night_minutes: night_minutes(shift.start_minutes(), duration, regime),
        overtime_minutes: net_minutes
            .saturating_sub(regime.time.daily_overtime_threshold_minutes),
    }
}

/// Scales a weekly minute total to an average month, rounded to the minute.
pub fn weekly_to_monthly_minutes(weekly_minutes: u32, regime: &LaborRegime) -> u32 {
    (Decimal::from(weekly_minutes) * regime.time.weeks_per_month)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(u32::MAX)
}

/// Aggregates a schedule into weekly and average-monthly totals.
pub fn calculate_work_stats(schedule: &WorkSchedule, regime: &LaborRegime) -> WorkStats {
    let mut stats = WorkStats::default();

    for (day, shift) in schedule.shifts() {
        let day_stats = calculate_day_stats(shift, regime);
        stats.weekly_net_minutes += day_stats.net_minutes;
        stats.weekly_night_minutes += day_stats.night_minutes;
        stats.weekly_overtime_minutes += day_stats.overtime_minutes;
        stats.per_day.insert(day, day_stats);
    }

    stats.monthly_net_minutes = weekly_to_monthly_minutes(stats.weekly_net_minutes, regime);
    stats.monthly_night_minutes = weekly_to_monthly_minutes(stats.weekly_night_minutes, regime);
    stats.monthly_overtime_minutes =
        weekly_to_monthly_minutes(stats.weekly_overtime_minutes, regime);

    debug!(
        work_days = stats.work_days(),
        weekly_net_minutes = stats.weekly_net_minutes,
        weekly_night_minutes = stats.weekly_night_minutes,
        weekly_overtime_minutes = stats.weekly_overtime_minutes,
        monthly_net_minutes = stats.monthly_net_minutes,
        "Aggregated work schedule"
    );

    stats
}

/// Hours of pay the weekly holiday is worth for `weekly_hours` of work:
/// nothing under the minimum, the full day from the full-time threshold,
/// pro-rated in between.
pub fn weekly_holiday_hours(weekly_hours: Decimal, regime: &LaborRegime) -> Decimal {
    let thresholds = &regime.thresholds;
    if weekly_hours < thresholds.weekly_holiday_min_hours {
        Decimal::ZERO
    } else if weekly_hours >= thresholds.weekly_holiday_full_hours {
        thresholds.weekly_holiday_paid_hours
    } else {
        weekly_hours / thresholds.weekly_holiday_full_hours * thresholds.weekly_holiday_paid_hours
    }
}

/// Paid hours in an average month: net working hours plus the hours the
/// weekly holiday is worth.
pub fn paid_monthly_hours(stats: &WorkStats, regime: &LaborRegime) -> Decimal {
    stats.monthly_net_hours()
        + weekly_holiday_hours(stats.weekly_net_hours(), regime) * regime.time.weeks_per_month
}

/// Contractual monthly hours: the legal reference hours for a full-time
/// week, the paid monthly hours otherwise.
pub fn contract_monthly_hours(stats: &WorkStats, regime: &LaborRegime) -> Decimal {
    if stats.weekly_net_hours() >= regime.thresholds.weekly_holiday_full_hours {
        regime.wages.reference_monthly_hours
    } else {
        paid_monthly_hours(stats, regime)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::calculation::BreakPolicy;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn net_minutes_never_negative_and_bounded(start in 0u32..1440, end in 0u32..1440) {
            let clock = |m: u32| format!("{:02}:{:02}", m / 60, m % 60);
            let shift = DailyShift::new(clock(start), clock(end), BreakPolicy::Statutory);
            let regime = LaborRegime::korea_2025();
            let stats = calculate_day_stats(&shift, &regime);

            prop_assert!(stats.net_minutes <= shift.duration_minutes());
            prop_assert!(stats.overtime_minutes <= stats.net_minutes);
            prop_assert!(stats.night_minutes <= shift.duration_minutes());
        }
    }
}
