#![deny(clippy::all)]

use napi_derive::napi;

use belltime_engine::model as engine;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[napi(string_enum)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[napi(string_enum)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakScope {
    All,
    Selected,
}

#[napi(string_enum)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferredSlot {
    Morning,
    MidDay,
    Afternoon,
}

/// Discriminator for `Slot`: napi objects cannot carry tagged payloads, so
/// the engine's slot variants are flattened into one object with a kind.
#[napi(string_enum)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotKind {
    Period,
    Break,
}

// ---------------------------------------------------------------------------
// Enum conversions: napi <-> engine
// ---------------------------------------------------------------------------

impl From<Weekday> for engine::Weekday {
    fn from(v: Weekday) -> Self {
        match v {
            Weekday::Monday => engine::Weekday::Monday,
            Weekday::Tuesday => engine::Weekday::Tuesday,
            Weekday::Wednesday => engine::Weekday::Wednesday,
            Weekday::Thursday => engine::Weekday::Thursday,
            Weekday::Friday => engine::Weekday::Friday,
            Weekday::Saturday => engine::Weekday::Saturday,
            Weekday::Sunday => engine::Weekday::Sunday,
        }
    }
}

impl From<engine::Weekday> for Weekday {
    fn from(v: engine::Weekday) -> Self {
        match v {
            engine::Weekday::Monday => Weekday::Monday,
            engine::Weekday::Tuesday => Weekday::Tuesday,
            engine::Weekday::Wednesday => Weekday::Wednesday,
            engine::Weekday::Thursday => Weekday::Thursday,
            engine::Weekday::Friday => Weekday::Friday,
            engine::Weekday::Saturday => Weekday::Saturday,
            engine::Weekday::Sunday => Weekday::Sunday,
        }
    }
}

impl From<BreakScope> for engine::BreakScope {
    fn from(v: BreakScope) -> Self {
        match v {
            BreakScope::All => engine::BreakScope::All,
            BreakScope::Selected => engine::BreakScope::Selected,
        }
    }
}

impl From<engine::BreakScope> for BreakScope {
    fn from(v: engine::BreakScope) -> Self {
        match v {
            engine::BreakScope::All => BreakScope::All,
            engine::BreakScope::Selected => BreakScope::Selected,
        }
    }
}

impl From<PreferredSlot> for engine::PreferredSlot {
    fn from(v: PreferredSlot) -> Self {
        match v {
            PreferredSlot::Morning => engine::PreferredSlot::Morning,
            PreferredSlot::MidDay => engine::PreferredSlot::MidDay,
            PreferredSlot::Afternoon => engine::PreferredSlot::Afternoon,
        }
    }
}

impl From<engine::PreferredSlot> for PreferredSlot {
    fn from(v: engine::PreferredSlot) -> Self {
        match v {
            engine::PreferredSlot::Morning => PreferredSlot::Morning,
            engine::PreferredSlot::MidDay => PreferredSlot::MidDay,
            engine::PreferredSlot::Afternoon => PreferredSlot::Afternoon,
        }
    }
}

// ---------------------------------------------------------------------------
// Mirror types: timing configuration (input side)
// ---------------------------------------------------------------------------

#[napi(object)]
#[derive(Debug, Clone)]
pub struct BreakRule {
    pub name: String,
    pub after_period: u32,
    pub duration_mins: u32,
    pub applies_to: BreakScope,
    pub standard_ids: Vec<String>,
}

impl From<BreakRule> for engine::BreakRule {
    fn from(v: BreakRule) -> Self {
        engine::BreakRule {
            name: v.name,
            after_period: v.after_period,
            duration_mins: v.duration_mins,
            applies_to: v.applies_to.into(),
            standard_ids: v.standard_ids,
        }
    }
}

impl From<engine::BreakRule> for BreakRule {
    fn from(v: engine::BreakRule) -> Self {
        BreakRule {
            name: v.name,
            after_period: v.after_period,
            duration_mins: v.duration_mins,
            applies_to: v.applies_to.into(),
            standard_ids: v.standard_ids,
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct TimingSettings {
    /// Day start as "HH:MM".
    pub day_start: String,
    /// Day end as "HH:MM".
    pub day_end: String,
    pub period_duration_mins: u32,
    pub gap_between_periods_mins: u32,
    pub breaks: Vec<BreakRule>,
    pub working_days: Vec<Weekday>,
}

impl From<TimingSettings> for engine::TimingSettings {
    fn from(v: TimingSettings) -> Self {
        engine::TimingSettings {
            day_start: v.day_start,
            day_end: v.day_end,
            period_duration_mins: v.period_duration_mins,
            gap_between_periods_mins: v.gap_between_periods_mins,
            breaks: v.breaks.into_iter().map(Into::into).collect(),
            working_days: v.working_days.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<engine::TimingSettings> for TimingSettings {
    fn from(v: engine::TimingSettings) -> Self {
        TimingSettings {
            day_start: v.day_start,
            day_end: v.day_end,
            period_duration_mins: v.period_duration_mins,
            gap_between_periods_mins: v.gap_between_periods_mins,
            breaks: v.breaks.into_iter().map(Into::into).collect(),
            working_days: v.working_days.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Mirror types: subject allocation (input side)
// ---------------------------------------------------------------------------

#[napi(object)]
#[derive(Debug, Clone)]
pub struct SubjectAllocation {
    pub subject_id: u32,
    pub lectures_per_week: u32,
    pub max_consecutive_periods: u32,
    pub min_gap_between_periods: u32,
    pub requires_lab: bool,
    pub lab_duration_periods: u32,
    pub preferred_slots: Vec<PreferredSlot>,
}

impl From<SubjectAllocation> for engine::SubjectAllocation {
    fn from(v: SubjectAllocation) -> Self {
        engine::SubjectAllocation {
            subject_id: v.subject_id,
            lectures_per_week: v.lectures_per_week,
            max_consecutive_periods: v.max_consecutive_periods,
            min_gap_between_periods: v.min_gap_between_periods,
            requires_lab: v.requires_lab,
            lab_duration_periods: v.lab_duration_periods,
            preferred_slots: v.preferred_slots.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<engine::SubjectAllocation> for SubjectAllocation {
    fn from(v: engine::SubjectAllocation) -> Self {
        SubjectAllocation {
            subject_id: v.subject_id,
            lectures_per_week: v.lectures_per_week,
            max_consecutive_periods: v.max_consecutive_periods,
            min_gap_between_periods: v.min_gap_between_periods,
            requires_lab: v.requires_lab,
            lab_duration_periods: v.lab_duration_periods,
            preferred_slots: v.preferred_slots.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Mirror types: generated schedule (output side)
// ---------------------------------------------------------------------------

#[napi(object)]
#[derive(Debug, Clone)]
pub struct Slot {
    pub kind: SlotKind,
    /// 1-based period number; present only when `kind` is `Period`.
    pub number: Option<u32>,
    /// Break name; present only when `kind` is `Break`.
    pub name: Option<String>,
    /// Start time as "HH:MM".
    pub start: String,
    /// End time as "HH:MM".
    pub end: String,
}

impl From<engine::Slot> for Slot {
    fn from(v: engine::Slot) -> Self {
        match v {
            engine::Slot::Period { number, start, end } => Slot {
                kind: SlotKind::Period,
                number: Some(number),
                name: None,
                start: start.to_string(),
                end: end.to_string(),
            },
            engine::Slot::Break { name, start, end } => Slot {
                kind: SlotKind::Break,
                number: None,
                name: Some(name),
                start: start.to_string(),
                end: end.to_string(),
            },
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct DaySchedule {
    pub slots: Vec<Slot>,
    /// Count of teaching periods (break slots excluded).
    pub period_count: u32,
}

impl From<engine::DaySchedule> for DaySchedule {
    fn from(v: engine::DaySchedule) -> Self {
        let period_count = v.period_count();
        DaySchedule {
            slots: v.slots.into_iter().map(Into::into).collect(),
            period_count,
        }
    }
}

// ---------------------------------------------------------------------------
// Mirror types: allocation summary (output side)
// ---------------------------------------------------------------------------

#[napi(object)]
#[derive(Debug, Clone)]
pub struct AllocationSummary {
    pub total_lectures_per_week: i64,
    pub capacity_per_week: i64,
    /// Positive = over-allocated by that many periods, negative = that many
    /// free periods remain, zero = exactly saturated.
    pub delta: i64,
}

impl From<engine::AllocationSummary> for AllocationSummary {
    fn from(v: engine::AllocationSummary) -> Self {
        AllocationSummary {
            total_lectures_per_week: v.total_lectures_per_week as i64,
            capacity_per_week: v.capacity_per_week as i64,
            delta: v.delta,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation result
// ---------------------------------------------------------------------------

#[napi(object)]
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<belltime_engine::validator::ValidationResult> for ValidationResult {
    fn from(v: belltime_engine::validator::ValidationResult) -> Self {
        ValidationResult {
            errors: v.errors,
            warnings: v.warnings,
        }
    }
}

// ---------------------------------------------------------------------------
// Exported functions
// ---------------------------------------------------------------------------

/// Generate the day's period/break slots from the timing settings.
#[napi]
pub fn generate_day_schedule(settings: TimingSettings) -> napi::Result<DaySchedule> {
    let engine_settings = engine::TimingSettings::from(settings);
    belltime_engine::generator::generate_from_settings(&engine_settings)
        .map(Into::into)
        .map_err(|e| napi::Error::from_reason(e.to_string()))
}

/// Summarize the weekly subject lecture load against the capacity derived
/// from the timing settings (periods per day x working days).
#[napi]
pub fn summarize_allocation(
    settings: TimingSettings,
    allocations: Vec<SubjectAllocation>,
) -> napi::Result<AllocationSummary> {
    let engine_settings = engine::TimingSettings::from(settings);
    let engine_allocations: Vec<engine::SubjectAllocation> =
        allocations.into_iter().map(Into::into).collect();
    belltime_engine::allocator::summarize_week(&engine_settings, &engine_allocations)
        .map(Into::into)
        .map_err(|e| napi::Error::from_reason(e.to_string()))
}

/// Validate timing settings and return errors and warnings without
/// generating a schedule.
#[napi]
pub fn validate(settings: TimingSettings) -> ValidationResult {
    let engine_settings = engine::TimingSettings::from(settings);
    belltime_engine::validator::validate(&engine_settings).into()
}

/// Default timing settings used to seed the settings form.
#[napi]
pub fn default_timing_settings() -> TimingSettings {
    engine::TimingSettings::default().into()
}

/// Default allocation row for a newly added subject.
#[napi]
pub fn default_subject_allocation(subject_id: u32) -> SubjectAllocation {
    engine::SubjectAllocation::for_subject(subject_id).into()
}
