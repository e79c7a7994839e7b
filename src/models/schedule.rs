//! Work schedule model and related types.
//!
//! A [`WorkSchedule`] is either one shift applied to a set of weekdays or a
//! separate shift per weekday. Each [`DailyShift`] derives its unpaid break
//! from its start and end times; the break cannot be set directly.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::calculation::{BreakPolicy, time_to_minutes};

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A day of the working week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Monday through Friday.
    pub const WEEKDAYS: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Single-character Korean label used on contracts ("월" for Monday).
    pub fn korean_label(self) -> &'static str {
        match self {
            Weekday::Mon => "월",
            Weekday::Tue => "화",
            Weekday::Wed => "수",
            Weekday::Thu => "목",
            Weekday::Fri => "금",
            Weekday::Sat => "토",
            Weekday::Sun => "일",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        };
        f.write_str(name)
    }
}

/// Start and end times as supplied by a caller; the break is derived.
#[derive(Debug, Clone, Deserialize)]
struct ShiftTimes {
    start: String,
    end: String,
    #[serde(default)]
    break_policy: BreakPolicy,
}

impl From<ShiftTimes> for DailyShift {
    fn from(times: ShiftTimes) -> Self {
        DailyShift::new(times.start, times.end, times.break_policy)
    }
}

/// One day's working hours.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::BreakPolicy;
/// use labor_cost_engine::models::DailyShift;
///
/// let shift = DailyShift::new("09:00", "18:00", BreakPolicy::Practical);
/// assert_eq!(shift.duration_minutes(), 540);
/// assert_eq!(shift.break_minutes(), 60);
/// assert_eq!(shift.net_minutes(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ShiftTimes")]
pub struct DailyShift {
    start: String,
    end: String,
    break_minutes: u32,
    break_policy: BreakPolicy,
}

impl DailyShift {
    /// Creates a shift, deriving its break from the duration with `policy`.
    pub fn new(start: impl Into<String>, end: impl Into<String>, policy: BreakPolicy) -> Self {
        let mut shift = Self {
            start: start.into(),
            end: end.into(),
            break_minutes: 0,
            break_policy: policy,
        };
        shift.break_minutes = policy.break_minutes(shift.duration_minutes());
        shift
    }

    /// Changes the start and end times and recomputes the break.
    pub fn reschedule(&mut self, start: impl Into<String>, end: impl Into<String>) {
        *self = Self::new(start, end, self.break_policy);
    }

    /// Start clock time as supplied.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// End clock time as supplied.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Start as minutes since midnight.
    pub fn start_minutes(&self) -> u32 {
        time_to_minutes(&self.start)
    }

    /// The derived unpaid break.
    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// The policy the break was derived with.
    pub fn break_policy(&self) -> BreakPolicy {
        self.break_policy
    }

    /// Raw duration from start to end; an end at or before the start is
    /// read as the next day.
    pub fn duration_minutes(&self) -> u32 {
        let start = time_to_minutes(&self.start);
        let end = time_to_minutes(&self.end);
        if end > start {
            end - start
        } else {
            end + MINUTES_PER_DAY - start
        }
    }

    /// Duration minus the break, never below zero.
    pub fn net_minutes(&self) -> u32 {
        self.duration_minutes().saturating_sub(self.break_minutes)
    }
}

/// A weekly work schedule.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::BreakPolicy;
/// use labor_cost_engine::models::{WorkSchedule, Weekday};
///
/// let schedule = WorkSchedule::uniform(
///     Weekday::WEEKDAYS,
///     "09:00",
///     "18:00",
///     BreakPolicy::Practical,
/// );
/// assert_eq!(schedule.work_days().len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "time_mode", rename_all = "snake_case")]
pub enum WorkSchedule {
    /// The same shift on every listed day.
    Uniform {
        /// Days worked.
        days: BTreeSet<Weekday>,
        /// The shift worked on each of those days.
        shift: DailyShift,
    },
    /// A separate shift per day; the keys are the days worked.
    PerDay {
        /// Shift for each day worked.
        shifts: BTreeMap<Weekday, DailyShift>,
    },
}

impl WorkSchedule {
    /// Builds a uniform schedule. Duplicate days collapse.
    pub fn uniform(
        days: impl IntoIterator<Item = Weekday>,
        start: impl Into<String>,
        end: impl Into<String>,
        policy: BreakPolicy,
    ) -> Self {
        WorkSchedule::Uniform {
            days: days.into_iter().collect(),
            shift: DailyShift::new(start, end, policy),
        }
    }

    /// Builds a per-day schedule. A later entry for the same day wins.
    pub fn per_day(shifts: impl IntoIterator<Item = (Weekday, DailyShift)>) -> Self {
        WorkSchedule::PerDay {
            shifts: shifts.into_iter().collect(),
        }
    }

    /// Days worked, Monday first.
    pub fn work_days(&self) -> Vec<Weekday> {
        match self {
            WorkSchedule::Uniform { days, .. } => days.iter().copied().collect(),
            WorkSchedule::PerDay { shifts } => shifts.keys().copied().collect(),
        }
    }

    /// The shift worked on `day`, if any.
    pub fn shift_for(&self, day: Weekday) -> Option<&DailyShift> {
        match self {
            WorkSchedule::Uniform { days, shift } => days.contains(&day).then_some(shift),
            WorkSchedule::PerDay { shifts } => shifts.get(&day),
        }
    }

    /// Every worked day with its shift, Monday first.
    pub fn shifts(&self) -> Vec<(Weekday, &DailyShift)> {
        match self {
            WorkSchedule::Uniform { days, shift } => days.iter().map(|d| (*d, shift)).collect(),
            WorkSchedule::PerDay { shifts } => shifts.iter().map(|(d, s)| (*d, s)).collect(),
        }
    }

    /// Returns true if no day is worked.
    pub fn is_empty(&self) -> bool {
        match self {
            WorkSchedule::Uniform { days, .. } => days.is_empty(),
            WorkSchedule::PerDay { shifts } => shifts.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // DailyShift
    // ==========================================================================

    #[test]
    fn test_nine_to_six_practical_break() {
        let shift = DailyShift::new("09:00", "18:00", BreakPolicy::Practical);
        assert_eq!(shift.duration_minutes(), 540);
        assert_eq!(shift.break_minutes(), 60);
        assert_eq!(shift.net_minutes(), 480);
    }

    #[test]
    fn test_nine_to_six_statutory_break() {
        let shift = DailyShift::new("09:00", "18:00", BreakPolicy::Statutory);
        assert_eq!(shift.break_minutes(), 90);
        assert_eq!(shift.net_minutes(), 450);
    }

    #[test]
    fn test_overnight_shift_wraps_midnight() {
        let shift = DailyShift::new("22:00", "06:00", BreakPolicy::Practical);
        assert_eq!(shift.duration_minutes(), 480);
        assert_eq!(shift.break_minutes(), 60);
        assert_eq!(shift.net_minutes(), 420);
    }

    #[test]
    fn test_equal_start_and_end_is_a_full_day() {
        let shift = DailyShift::new("09:00", "09:00", BreakPolicy::Practical);
        assert_eq!(shift.duration_minutes(), 1440);
        assert_eq!(shift.break_minutes(), 120);
    }

    #[test]
    fn test_short_shift_has_no_break() {
        let shift = DailyShift::new("10:00", "13:30", BreakPolicy::Statutory);
        assert_eq!(shift.break_minutes(), 0);
        assert_eq!(shift.net_minutes(), 210);
    }

    #[test]
    fn test_reschedule_recomputes_break() {
        let mut shift = DailyShift::new("09:00", "13:00", BreakPolicy::Practical);
        assert_eq!(shift.break_minutes(), 30);

        shift.reschedule("09:00", "19:00");
        assert_eq!(shift.break_minutes(), 90);
        assert_eq!(shift.end(), "19:00");
        assert_eq!(shift.break_policy(), BreakPolicy::Practical);
    }

    #[test]
    fn test_deserialization_ignores_supplied_break() {
        let json = r#"{"start":"09:00","end":"18:00","break_minutes":5}"#;
        let shift: DailyShift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.break_minutes(), 60);
        assert_eq!(shift.break_policy(), BreakPolicy::Practical);
    }

    #[test]
    fn test_deserialization_honours_policy() {
        let json = r#"{"start":"09:00","end":"18:00","break_policy":"statutory"}"#;
        let shift: DailyShift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.break_minutes(), 90);
    }

    // ==========================================================================
    // WorkSchedule
    // ==========================================================================

    #[test]
    fn test_uniform_schedule_deduplicates_days() {
        let schedule = WorkSchedule::uniform(
            [Weekday::Fri, Weekday::Mon, Weekday::Mon],
            "09:00",
            "18:00",
            BreakPolicy::Practical,
        );
        assert_eq!(schedule.work_days(), vec![Weekday::Mon, Weekday::Fri]);
    }

    #[test]
    fn test_uniform_shift_for_unlisted_day_is_none() {
        let schedule =
            WorkSchedule::uniform([Weekday::Mon], "09:00", "18:00", BreakPolicy::Practical);
        assert!(schedule.shift_for(Weekday::Mon).is_some());
        assert!(schedule.shift_for(Weekday::Tue).is_none());
    }

    #[test]
    fn test_per_day_schedule_shifts_in_weekday_order() {
        let schedule = WorkSchedule::per_day([
            (
                Weekday::Sat,
                DailyShift::new("10:00", "15:00", BreakPolicy::Practical),
            ),
            (
                Weekday::Tue,
                DailyShift::new("09:00", "18:00", BreakPolicy::Practical),
            ),
        ]);

        let shifts = schedule.shifts();
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].0, Weekday::Tue);
        assert_eq!(shifts[1].0, Weekday::Sat);
        assert_eq!(shifts[1].1.net_minutes(), 270);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = WorkSchedule::per_day([]);
        assert!(schedule.is_empty());
        assert!(schedule.work_days().is_empty());
    }

    #[test]
    fn test_schedule_serialization_is_tagged() {
        let schedule =
            WorkSchedule::uniform([Weekday::Mon], "09:00", "18:00", BreakPolicy::Practical);
        let json = serde_json::to_string(&schedule).unwrap();
        assert!(json.contains("\"time_mode\":\"uniform\""));
        assert!(json.contains("\"days\":[\"mon\"]"));

        let restored: WorkSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, schedule);
    }

    #[test]
    fn test_per_day_schedule_deserializes_from_map() {
        let json = r#"{
            "time_mode": "per_day",
            "shifts": {
                "mon": {"start": "09:00", "end": "18:00"},
                "sat": {"start": "22:00", "end": "06:00"}
            }
        }"#;
        let schedule: WorkSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.work_days(), vec![Weekday::Mon, Weekday::Sat]);
        assert_eq!(
            schedule.shift_for(Weekday::Sat).unwrap().duration_minutes(),
            480
        );
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(Weekday::Mon.korean_label(), "월");
        assert_eq!(Weekday::Sun.korean_label(), "일");
        assert_eq!(Weekday::Wed.to_string(), "Wed");
    }
}
