//! Core data models for the labor cost engine.
//!
//! This module contains the schedule and wage inputs, the derived working
//! time totals, the pay and insurance breakdowns, and the audit trace.

mod audit;
mod breakdown;
mod schedule;
mod stats;
mod wage;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use breakdown::{Contribution, InsuranceBreakdown, PayBreakdown};
pub use schedule::{DailyShift, MINUTES_PER_DAY, Weekday, WorkSchedule};
pub use stats::{DayStats, WorkStats};
pub use wage::{ProbationConfig, ProbationDiscount, WageConfig, WageType};
