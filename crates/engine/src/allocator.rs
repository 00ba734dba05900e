use crate::generator::{self, ScheduleError};
use crate::model::{AllocationSummary, SubjectAllocation, TimingSettings};

// ---------------------------------------------------------------------------
// Allocation summary
// ---------------------------------------------------------------------------

/// Sum the per-subject weekly lecture counts against the weekly period
/// capacity.
///
/// Over-allocation is a normal, reportable outcome (`delta > 0`), not an
/// error. Pure function of its inputs; callers recompute it whenever the
/// periods-per-day, working-day count, or any lecture count changes.
pub fn summarize_allocation(
    allocations: &[SubjectAllocation],
    periods_per_day: u32,
    working_days_per_week: u32,
) -> AllocationSummary {
    // Widened up front so the weekly totals cannot overflow.
    let total_lectures_per_week: u64 = allocations
        .iter()
        .map(|a| u64::from(a.lectures_per_week))
        .sum();
    let capacity_per_week = u64::from(periods_per_day) * u64::from(working_days_per_week);
    AllocationSummary {
        total_lectures_per_week,
        capacity_per_week,
        delta: total_lectures_per_week as i64 - capacity_per_week as i64,
    }
}

/// Derive the weekly capacity from the timing settings -- periods per day
/// from the generated schedule, days from the working-day selection -- and
/// summarize the allocations against it.
pub fn summarize_week(
    settings: &TimingSettings,
    allocations: &[SubjectAllocation],
) -> Result<AllocationSummary, ScheduleError> {
    let schedule = generator::generate_from_settings(settings)?;
    Ok(summarize_allocation(
        allocations,
        schedule.period_count(),
        settings.working_days.len() as u32,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
