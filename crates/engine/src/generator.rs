use std::collections::HashMap;

use crate::clock::{TimeOfDay, TimeParseError};
use crate::model::{BreakRule, DaySchedule, Slot, TimingSettings};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error(transparent)]
    InvalidFormat(#[from] TimeParseError),
    #[error("invalid timing configuration: {0}")]
    InvalidConfiguration(String),
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// How far past the nominal day end the last period may run. Absorbs
/// rounding from the period-duration/gap choices; a period that would
/// overrun by more than this is not emitted.
pub const END_OF_DAY_SLACK_MINS: u32 = 15;

// ---------------------------------------------------------------------------
// Break rule lookup
// ---------------------------------------------------------------------------

/// Check the break rules and index them by the period they follow.
/// At most one rule may target a given period.
fn index_breaks(breaks: &[BreakRule]) -> Result<HashMap<u32, &BreakRule>, ScheduleError> {
    let mut by_period: HashMap<u32, &BreakRule> = HashMap::with_capacity(breaks.len());
    for rule in breaks {
        if rule.after_period < 1 {
            return Err(ScheduleError::InvalidConfiguration(format!(
                "break '{}' must come after period 1 or later",
                rule.name
            )));
        }
        if rule.duration_mins == 0 {
            return Err(ScheduleError::InvalidConfiguration(format!(
                "break '{}' has no duration",
                rule.name
            )));
        }
        if by_period.insert(rule.after_period, rule).is_some() {
            return Err(ScheduleError::InvalidConfiguration(format!(
                "more than one break is placed after period {}",
                rule.after_period
            )));
        }
    }
    Ok(by_period)
}

// ---------------------------------------------------------------------------
// Schedule generation
// ---------------------------------------------------------------------------

/// Generate the ordered period/break slots for one school day.
///
/// Single forward pass: starting at `start`, teaching periods of
/// `period_duration_mins` are laid down `gap_between_periods_mins` apart,
/// and a break rule targeting period N inserts its break right after
/// period N ends. A period may finish up to [`END_OF_DAY_SLACK_MINS`]
/// past `end`; the first period that would overrun further ends the day.
/// A break rule whose period is never reached is silently ignored.
pub fn generate_day_schedule(
    start: TimeOfDay,
    end: TimeOfDay,
    period_duration_mins: u32,
    gap_between_periods_mins: u32,
    breaks: &[BreakRule],
) -> Result<DaySchedule, ScheduleError> {
    if period_duration_mins == 0 {
        return Err(ScheduleError::InvalidConfiguration(
            "period duration must be greater than zero".to_string(),
        ));
    }
    let breaks_after = index_breaks(breaks)?;

    let mut slots: Vec<Slot> = Vec::new();
    let mut cursor = start;
    let mut period_number: u32 = 1;

    while cursor < end {
        // A break never precedes period 1; one lookup per iteration.
        if period_number > 1 {
            if let Some(rule) = breaks_after.get(&(period_number - 1)) {
                let break_end = cursor + rule.duration_mins;
                slots.push(Slot::Break {
                    name: rule.name.clone(),
                    start: cursor,
                    end: break_end,
                });
                cursor = break_end;
            }
        }

        let period_end = cursor + period_duration_mins;
        if period_end.minutes() > end.minutes() + END_OF_DAY_SLACK_MINS {
            break;
        }
        slots.push(Slot::Period {
            number: period_number,
            start: cursor,
            end: period_end,
        });
        cursor = period_end + gap_between_periods_mins;
        period_number += 1;
    }

    Ok(DaySchedule { slots })
}

/// Parse the day window from `settings` and generate its schedule.
pub fn generate_from_settings(settings: &TimingSettings) -> Result<DaySchedule, ScheduleError> {
    let start: TimeOfDay = settings.day_start.parse()?;
    let end: TimeOfDay = settings.day_end.parse()?;
    generate_day_schedule(
        start,
        end,
        settings.period_duration_mins,
        settings.gap_between_periods_mins,
        &settings.breaks,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
