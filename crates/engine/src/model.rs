use serde::{Deserialize, Serialize};

use crate::clock::TimeOfDay;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// A day of the week on which periods are held.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Which standards (grade levels) a break rule applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BreakScope {
    /// The break applies to every standard in the institute.
    All,
    /// The break applies only to the standards listed in
    /// `BreakRule::standard_ids`.
    Selected,
}

/// Part of the day a subject prefers its periods in. Stored for an external
/// timetable engine; never interpreted here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PreferredSlot {
    Morning,
    MidDay,
    Afternoon,
}

// ---------------------------------------------------------------------------
// Timing configuration
// ---------------------------------------------------------------------------

/// Declares a non-teaching interval inserted immediately after a given
/// period finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakRule {
    pub name: String,
    /// The break starts when the period with this number ends. Must be >= 1;
    /// at most one rule may target a given period.
    pub after_period: u32,
    /// Length of the break in minutes. Must be > 0.
    pub duration_mins: u32,
    pub applies_to: BreakScope,
    /// Standard IDs the rule targets when `applies_to` is `Selected`.
    #[serde(default)]
    pub standard_ids: Vec<String>,
}

/// The timing configuration for one school day plus the working week.
/// Day start/end are kept as `HH:MM` form-field strings and parsed at
/// generation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingSettings {
    pub day_start: String,
    pub day_end: String,
    /// Length of every teaching period in minutes. Must be > 0.
    pub period_duration_mins: u32,
    /// Passing time between consecutive periods in minutes.
    pub gap_between_periods_mins: u32,
    pub breaks: Vec<BreakRule>,
    pub working_days: Vec<Weekday>,
}

impl Default for TimingSettings {
    fn default() -> Self {
        TimingSettings {
            day_start: "08:00".to_string(),
            day_end: "14:00".to_string(),
            period_duration_mins: 40,
            gap_between_periods_mins: 5,
            breaks: vec![BreakRule {
                name: "Recess".to_string(),
                after_period: 3,
                duration_mins: 15,
                applies_to: BreakScope::All,
                standard_ids: vec![],
            }],
            working_days: vec![
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
                Weekday::Saturday,
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Generated schedule (output)
// ---------------------------------------------------------------------------

/// One entry in a day's schedule: either a numbered teaching period or a
/// named break.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Slot {
    Period {
        /// 1-based position of the period within the day.
        number: u32,
        start: TimeOfDay,
        end: TimeOfDay,
    },
    Break {
        name: String,
        start: TimeOfDay,
        end: TimeOfDay,
    },
}

impl Slot {
    pub fn start(&self) -> TimeOfDay {
        match self {
            Slot::Period { start, .. } | Slot::Break { start, .. } => *start,
        }
    }

    pub fn end(&self) -> TimeOfDay {
        match self {
            Slot::Period { end, .. } | Slot::Break { end, .. } => *end,
        }
    }

    pub fn is_period(&self) -> bool {
        matches!(self, Slot::Period { .. })
    }
}

/// The derived schedule for one school day, strictly increasing in time.
/// The slot after a period (break or next period) starts one
/// gap-between-periods later; the slot after a break starts exactly when
/// the break ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub slots: Vec<Slot>,
}

impl DaySchedule {
    /// Number of teaching periods in the day (break slots excluded).
    pub fn period_count(&self) -> u32 {
        self.slots.iter().filter(|s| s.is_period()).count() as u32
    }
}

// ---------------------------------------------------------------------------
// Subject allocation
// ---------------------------------------------------------------------------

/// Weekly lecture load and scheduling constraints for one subject within a
/// (standard, academic year).
///
/// Only `lectures_per_week` is consumed by this engine. The remaining
/// constraint fields (consecutive-period cap, gaps, lab, preferred slots)
/// are configuration carried for an external timetable engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectAllocation {
    pub subject_id: u32,
    pub lectures_per_week: u32,
    pub max_consecutive_periods: u32,
    pub min_gap_between_periods: u32,
    pub requires_lab: bool,
    pub lab_duration_periods: u32,
    #[serde(default)]
    pub preferred_slots: Vec<PreferredSlot>,
}

impl SubjectAllocation {
    /// Default allocation used to seed the form row for a newly added subject.
    pub fn for_subject(subject_id: u32) -> Self {
        SubjectAllocation {
            subject_id,
            ..Default::default()
        }
    }
}

impl Default for SubjectAllocation {
    fn default() -> Self {
        SubjectAllocation {
            subject_id: 0,
            lectures_per_week: 6,
            max_consecutive_periods: 2,
            min_gap_between_periods: 0,
            requires_lab: false,
            lab_duration_periods: 2,
            preferred_slots: vec![],
        }
    }
}

// ---------------------------------------------------------------------------
// Allocation summary (derived)
// ---------------------------------------------------------------------------

/// How the institute's weekly subject load compares to available periods.
/// Recomputed from its inputs on every change; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    pub total_lectures_per_week: u64,
    pub capacity_per_week: u64,
    /// Positive = over-allocated by that many periods, negative = that many
    /// free periods remain, zero = exactly saturated.
    pub delta: i64,
}
