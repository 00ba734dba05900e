use std::collections::HashSet;

use serde::Serialize;

use crate::clock::TimeOfDay;
use crate::generator;
use crate::model::TimingSettings;

// ---------------------------------------------------------------------------
// Validation result types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Validate implementation
// ---------------------------------------------------------------------------

/// Validate timing settings, returning errors (the configuration cannot
/// produce a schedule) and warnings (advisory). Errors are listed before
/// warnings.
pub fn validate(settings: &TimingSettings) -> ValidationResult {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    // -----------------------------------------------------------------------
    // Errors: day window
    // -----------------------------------------------------------------------
    let day_start: Option<TimeOfDay> = match settings.day_start.parse() {
        Ok(t) => Some(t),
        Err(e) => {
            errors.push(format!("Day start: {}", e));
            None
        }
    };
    let day_end: Option<TimeOfDay> = match settings.day_end.parse() {
        Ok(t) => Some(t),
        Err(e) => {
            errors.push(format!("Day end: {}", e));
            None
        }
    };
    if let (Some(start), Some(end)) = (day_start, day_end) {
        if end <= start {
            errors.push(format!(
                "Day end {} must be after day start {}",
                end, start
            ));
        }
    }

    // -----------------------------------------------------------------------
    // Errors: durations and break placement
    // -----------------------------------------------------------------------
    if settings.period_duration_mins == 0 {
        errors.push("Period duration must be greater than zero".to_string());
    }

    {
        let mut seen_periods: HashSet<u32> = HashSet::new();
        for rule in &settings.breaks {
            if rule.duration_mins == 0 {
                errors.push(format!(
                    "Break '{}' has no duration -- every break needs a duration in minutes",
                    rule.name
                ));
            }
            if rule.after_period < 1 {
                errors.push(format!(
                    "Break '{}' must come after period 1 or later",
                    rule.name
                ));
            } else if !seen_periods.insert(rule.after_period) {
                errors.push(format!(
                    "More than one break is placed after period {} -- each period may be followed by at most one break",
                    rule.after_period
                ));
            }
        }
    }

    // -----------------------------------------------------------------------
    // Warnings: working week
    // -----------------------------------------------------------------------
    if settings.working_days.is_empty() {
        warnings.push(
            "No working days selected -- weekly capacity will be zero".to_string(),
        );
    } else {
        let mut seen_days = HashSet::new();
        for day in &settings.working_days {
            if !seen_days.insert(day) {
                warnings.push(format!(
                    "Working day {:?} is listed more than once",
                    day
                ));
            }
        }
    }

    // -----------------------------------------------------------------------
    // Warnings: derived schedule (only when the configuration is generatable)
    // -----------------------------------------------------------------------
    if errors.is_empty() {
        if let Ok(schedule) = generator::generate_from_settings(settings) {
            let period_count = schedule.period_count();
            if period_count == 0 {
                warnings.push(
                    "The day window is too short to fit a single period".to_string(),
                );
            }
            for rule in &settings.breaks {
                if rule.after_period > period_count {
                    warnings.push(format!(
                        "Break '{}' is placed after period {} but the day only fits {} periods -- it will never occur",
                        rule.name, rule.after_period, period_count
                    ));
                }
            }
        }
    }

    ValidationResult { errors, warnings }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BreakRule, BreakScope, Weekday};

    fn recess_after(period: u32, duration_mins: u32) -> BreakRule {
        BreakRule {
            name: "Recess".to_string(),
            after_period: period,
            duration_mins,
            applies_to: BreakScope::All,
            standard_ids: vec![],
        }
    }

    #[test]
    fn default_settings_are_valid() {
        let result = validate(&TimingSettings::default());
        assert!(result.is_ok(), "unexpected errors: {:?}", result.errors);
        assert!(result.warnings.is_empty(), "unexpected warnings: {:?}", result.warnings);
    }

    #[test]
    fn unparseable_times_are_errors() {
        let settings = TimingSettings {
            day_start: "eight".to_string(),
            day_end: "25:00".to_string(),
            ..Default::default()
        };
        let result = validate(&settings);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn day_end_must_follow_day_start() {
        let settings = TimingSettings {
            day_start: "14:00".to_string(),
            day_end: "08:00".to_string(),
            ..Default::default()
        };
        let result = validate(&settings);
        assert!(!result.is_ok());
        assert!(result.errors[0].contains("must be after"));
    }

    #[test]
    fn duplicate_break_periods_are_errors() {
        let settings = TimingSettings {
            breaks: vec![recess_after(3, 15), recess_after(3, 10)],
            ..Default::default()
        };
        let result = validate(&settings);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("More than one break")));
    }

    #[test]
    fn empty_working_week_is_a_warning() {
        let settings = TimingSettings {
            working_days: vec![],
            ..Default::default()
        };
        let result = validate(&settings);
        assert!(result.is_ok());
        assert!(result.warnings.iter().any(|w| w.contains("No working days")));
    }

    #[test]
    fn repeated_working_day_is_a_warning() {
        let settings = TimingSettings {
            working_days: vec![Weekday::Monday, Weekday::Monday],
            ..Default::default()
        };
        let result = validate(&settings);
        assert!(result.is_ok());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("more than once")));
    }

    #[test]
    fn unreachable_break_is_a_warning() {
        let settings = TimingSettings {
            breaks: vec![recess_after(99, 15)],
            ..Default::default()
        };
        let result = validate(&settings);
        assert!(result.is_ok());
        assert!(result.warnings.iter().any(|w| w.contains("never occur")));
    }
}
