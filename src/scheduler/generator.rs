//! Greedy least-loaded weekly rota generator.
//!
//! # Algorithm
//!
//! 1. Take the seven dates (Monday → Sunday) of the anchor's week.
//! 2. For each day, for each shift requirement in caller order:
//!    - Pool = staff available for the shift that day, not yet working that
//!      day, and whose running hours plus the shift stay within their cap.
//!    - Sort the pool by running hours ascending, ties by roster position.
//!    - Assign up to `required_staff` from the front of the pool.
//! 3. Shortfalls are left uncovered. Earlier decisions are never revisited.
//!
//! # Complexity
//! O(d * s * n log n) where d=7 days, s=shift types, n=staff.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

use crate::models::week::week_dates;
use crate::models::{ScheduleEntry, ShiftRequirement, StaffMember, WeeklyTargets};

/// Input container for one week's generation.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Roster, in tie-break order.
    pub staff: Vec<StaffMember>,
    /// Shift requirements, in fill order.
    pub shifts: Vec<ShiftRequirement>,
    /// Any date within the target week.
    pub week_anchor: NaiveDate,
    /// Informational weekly targets.
    pub weekly_targets: WeeklyTargets,
}

impl ScheduleRequest {
    /// Creates a request with default weekly targets.
    pub fn new(staff: Vec<StaffMember>, shifts: Vec<ShiftRequirement>, week_anchor: NaiveDate) -> Self {
        Self {
            staff,
            shifts,
            week_anchor,
            weekly_targets: WeeklyTargets::default(),
        }
    }

    /// Sets the weekly targets.
    pub fn with_weekly_targets(mut self, targets: WeeklyTargets) -> Self {
        self.weekly_targets = targets;
        self
    }
}

/// Greedy weekly rota generator.
///
/// Stateless: every call works on its own snapshot of the inputs, so one
/// generator can serve concurrent weeks.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use rota_schedule::models::{ShiftRequirement, StaffMember, WeeklyTargets};
/// use rota_schedule::scheduler::RotaGenerator;
///
/// let staff = vec![
///     StaffMember::new("A").with_cap(16.0).available(Weekday::Mon, ["morning"]),
/// ];
/// let shifts = vec![ShiftRequirement::new("morning", 1, 8.0)];
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let entries = RotaGenerator::new().generate(&staff, &shifts, monday, &WeeklyTargets::default());
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].staff_id, "A");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RotaGenerator;

impl RotaGenerator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates one week of entries.
    ///
    /// Entries come back day-major, then shift-major (caller order), then
    /// in pool order. `weekly_targets` is informational and only logged.
    pub fn generate(
        &self,
        staff: &[StaffMember],
        shifts: &[ShiftRequirement],
        week_anchor: NaiveDate,
        weekly_targets: &WeeklyTargets,
    ) -> Vec<ScheduleEntry> {
        let mut entries = Vec::new();
        if staff.is_empty() {
            return entries;
        }

        // Indexed by roster position
        let mut running_hours = vec![0.0_f64; staff.len()];
        let mut uncovered: u32 = 0;

        let active: Vec<&ShiftRequirement> = shifts
            .iter()
            .filter(|shift| {
                let assignable = shift.is_assignable();
                if !assignable && shift.required_staff > 0 {
                    tracing::warn!(
                        shift = %shift.shift_type,
                        hours = shift.hours_per_shift,
                        "skipping shift with non-positive hours"
                    );
                }
                assignable
            })
            .collect();

        for date in week_dates(week_anchor) {
            let weekday = date.weekday();
            let mut working_today: HashSet<usize> = HashSet::new();

            for &shift in &active {
                let hours = shift.hours_per_shift;

                let mut pool: Vec<usize> = (0..staff.len())
                    .filter(|&i| {
                        !working_today.contains(&i)
                            && staff[i].is_available(weekday, &shift.shift_type)
                            && within_cap(running_hours[i], hours, staff[i].weekly_hour_cap)
                    })
                    .collect();

                // Least-loaded first; roster position decides ties.
                pool.sort_by(|&a, &b| {
                    running_hours[a]
                        .total_cmp(&running_hours[b])
                        .then(a.cmp(&b))
                });

                let mut assigned: u32 = 0;
                for idx in pool {
                    if assigned >= shift.required_staff {
                        break;
                    }
                    if !within_cap(running_hours[idx], hours, staff[idx].weekly_hour_cap) {
                        continue;
                    }

                    tracing::trace!(staff = %staff[idx].id, %date, shift = %shift.shift_type, "assign");
                    entries.push(ScheduleEntry::new(&staff[idx].id, date, &shift.shift_type));
                    running_hours[idx] += hours;
                    working_today.insert(idx);
                    assigned += 1;
                }

                if assigned < shift.required_staff {
                    let short = shift.required_staff - assigned;
                    uncovered += short;
                    tracing::debug!(
                        %date,
                        shift = %shift.shift_type,
                        required = shift.required_staff,
                        assigned,
                        "shift left under-staffed"
                    );
                }
            }
        }

        tracing::debug!(
            entries = entries.len(),
            uncovered,
            target_shifts = weekly_targets.required_shifts_per_week,
            "generated week"
        );
        entries
    }

    /// Generates from a request.
    pub fn generate_request(&self, request: &ScheduleRequest) -> Vec<ScheduleEntry> {
        self.generate(
            &request.staff,
            &request.shifts,
            request.week_anchor,
            &request.weekly_targets,
        )
    }
}

/// Generates one week of entries with a default [`RotaGenerator`].
pub fn generate_schedule(
    staff: &[StaffMember],
    shifts: &[ShiftRequirement],
    week_anchor: NaiveDate,
    weekly_targets: &WeeklyTargets,
) -> Vec<ScheduleEntry> {
    RotaGenerator::new().generate(staff, shifts, week_anchor, weekly_targets)
}

#[inline]
fn within_cap(running: f64, hours: f64, cap: f64) -> bool {
    running + hours <= cap
}
