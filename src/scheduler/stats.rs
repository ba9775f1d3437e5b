//! Schedule statistics.
//!
//! Hours and shift counts per staff member, computed from an entry set and
//! the shift requirements that price each entry.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total hours | Sum of `hours_per_shift` over priced entries |
//! | Total shifts | Number of priced entries |
//! | Utilization | Scheduled hours / weekly cap, as a percentage |
//! | Hour spread | Max - min scheduled hours across the roster |

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::models::{find_shift, ScheduleEntry, ShiftRequirement, StaffMember};

/// Per-staff statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffUtilization {
    pub hours_scheduled: f64,
    pub shifts_scheduled: u32,
    /// Shift count by shift type.
    pub by_shift_type: BTreeMap<String, u32>,
    /// `hours_scheduled / weekly_hour_cap * 100` (0 when the cap is 0).
    pub utilization_percentage: f64,
}

/// Aggregate schedule statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub total_hours_scheduled: f64,
    pub total_shifts_scheduled: u32,
    /// Per staff member, keyed by staff ID.
    pub staff_utilization: HashMap<String, StaffUtilization>,
}

impl ScheduleStats {
    /// Computes statistics for `entries`.
    ///
    /// Entries whose shift type is not in `shifts` are skipped entirely.
    /// Entries for staff outside the roster count toward the totals only.
    pub fn calculate(entries: &[ScheduleEntry], staff: &[StaffMember], shifts: &[ShiftRequirement]) -> Self {
        let mut stats = Self {
            staff_utilization: staff
                .iter()
                .map(|s| (s.id.clone(), StaffUtilization::default()))
                .collect(),
            ..Default::default()
        };

        for entry in entries {
            let Some(shift) = find_shift(shifts, &entry.shift_type) else {
                continue;
            };
            stats.total_hours_scheduled += shift.hours_per_shift;
            stats.total_shifts_scheduled += 1;

            if let Some(util) = stats.staff_utilization.get_mut(&entry.staff_id) {
                util.hours_scheduled += shift.hours_per_shift;
                util.shifts_scheduled += 1;
                *util.by_shift_type.entry(entry.shift_type.clone()).or_insert(0) += 1;
            }
        }

        for member in staff {
            if let Some(util) = stats.staff_utilization.get_mut(&member.id) {
                util.utilization_percentage = if member.weekly_hour_cap > 0.0 {
                    util.hours_scheduled / member.weekly_hour_cap * 100.0
                } else {
                    0.0
                };
            }
        }

        stats
    }

    /// Scheduled hours for a staff member (0 if unknown).
    pub fn hours_for(&self, staff_id: &str) -> f64 {
        self.staff_utilization
            .get(staff_id)
            .map(|u| u.hours_scheduled)
            .unwrap_or(0.0)
    }

    /// Difference between the most- and least-scheduled roster members.
    pub fn hour_spread(&self) -> f64 {
        let hours = self.staff_utilization.values().map(|u| u.hours_scheduled);
        let (min, max) = hours.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), h| {
            (lo.min(h), hi.max(h))
        });
        if min.is_finite() {
            max - min
        } else {
            0.0
        }
    }

    /// Mean utilization percentage across the roster.
    pub fn avg_utilization(&self) -> f64 {
        if self.staff_utilization.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .staff_utilization
            .values()
            .map(|u| u.utilization_percentage)
            .sum();
        sum / self.staff_utilization.len() as f64
    }
}
