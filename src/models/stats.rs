//! Derived working-time totals.
//!
//! [`WorkStats`] is recomputed from a schedule on every query and carries no
//! identity of its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calculation::minutes_to_hours;

use super::Weekday;

/// Totals for one scheduled day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    /// Scheduled duration minus the break.
    pub net_minutes: u32,
    /// Minutes of the shift window inside the night window.
    pub night_minutes: u32,
    /// Net minutes beyond the daily overtime threshold.
    pub overtime_minutes: u32,
}

/// Weekly and average-monthly working-time totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkStats {
    /// Totals per worked day.
    pub per_day: BTreeMap<Weekday, DayStats>,
    /// Net minutes per week.
    pub weekly_net_minutes: u32,
    /// Night minutes per week.
    pub weekly_night_minutes: u32,
    /// Overtime minutes per week.
    pub weekly_overtime_minutes: u32,
    /// Net minutes per average month.
    pub monthly_net_minutes: u32,
    /// Night minutes per average month.
    pub monthly_night_minutes: u32,
    /// Overtime minutes per average month.
    pub monthly_overtime_minutes: u32,
}

impl WorkStats {
    /// Number of days worked per week.
    pub fn work_days(&self) -> usize {
        self.per_day.len()
    }

    /// Net hours per week.
    pub fn weekly_net_hours(&self) -> Decimal {
        minutes_to_hours(self.weekly_net_minutes)
    }

    /// Overtime hours per week.
    pub fn weekly_overtime_hours(&self) -> Decimal {
        minutes_to_hours(self.weekly_overtime_minutes)
    }

    /// Net hours per average month.
    pub fn monthly_net_hours(&self) -> Decimal {
        minutes_to_hours(self.monthly_net_minutes)
    }
}
