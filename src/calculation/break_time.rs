//! Break-time policies.
//!
//! Two tables map a shift's raw duration to its unpaid break. The statutory
//! table follows the minimum in article 54 of the Labor Standards Act and has
//! a discontinuity at exactly eight hours. The practical table uses the round
//! nine- and ten-hour boundaries employers commonly schedule with and is the
//! default when a schedule derives its breaks from start and end times.
//!
//! The two are not interchangeable; callers pick one through [`BreakPolicy`].

use serde::{Deserialize, Serialize};

/// Which break table to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakPolicy {
    /// The statutory minimum table.
    Statutory,
    /// The common-practice table.
    #[default]
    Practical,
}

impl BreakPolicy {
    /// Break minutes for `work_minutes` of scheduled time under this policy.
    pub fn break_minutes(self, work_minutes: u32) -> u32 {
        match self {
            BreakPolicy::Statutory => statutory_break_minutes(work_minutes),
            BreakPolicy::Practical => practical_break_minutes(work_minutes),
        }
    }
}

/// Statutory minimum break.
///
/// | Work minutes | Break |
/// |---|---|
/// | < 240 | 0 |
/// | 240 – 479 | 30 |
/// | 480 | 60 |
/// | 481 – 720 | 90 |
/// | > 720 | 120 |
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::statutory_break_minutes;
///
/// assert_eq!(statutory_break_minutes(479), 30);
/// assert_eq!(statutory_break_minutes(480), 60);
/// assert_eq!(statutory_break_minutes(481), 90);
/// ```
pub fn statutory_break_minutes(work_minutes: u32) -> u32 {
    match work_minutes {
        0..240 => 0,
        240..480 => 30,
        480 => 60,
        481..=720 => 90,
        _ => 120,
    }
}

/// Common-practice break.
///
/// | Work minutes | Break |
/// |---|---|
/// | < 240 | 0 |
/// | 240 – 479 | 30 |
/// | 480 – 599 | 60 |
/// | 600 – 719 | 90 |
/// | ≥ 720 | 120 |
pub fn practical_break_minutes(work_minutes: u32) -> u32 {
    match work_minutes {
        0..240 => 0,
        240..480 => 30,
        480..600 => 60,
        600..720 => 90,
        _ => 120,
    }
}
