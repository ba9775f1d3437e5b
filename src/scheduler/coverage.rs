//! Per-slot coverage against headcount requirements.
//!
//! Kept separate from [`validate`](crate::validation::validate), which does
//! not look at headcount. Callers that need coverage warnings layer this on
//! top of the validation report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::week::week_dates;
use crate::models::{ScheduleEntry, ShiftRequirement};

/// Coverage of one `(date, shift_type)` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCoverage {
    pub date: NaiveDate,
    pub shift_type: String,
    /// Headcount required.
    pub required: u32,
    /// Headcount assigned.
    pub assigned: u32,
}

impl SlotCoverage {
    /// Missing headcount (0 if met or exceeded).
    #[inline]
    pub fn shortfall(&self) -> u32 {
        self.required.saturating_sub(self.assigned)
    }

    /// Whether the slot meets its requirement.
    #[inline]
    pub fn is_covered(&self) -> bool {
        self.assigned >= self.required
    }
}

/// Coverage of every slot in a week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Slots day-major, then in shift requirement order.
    pub slots: Vec<SlotCoverage>,
}

impl CoverageReport {
    /// Counts entries per slot for the week containing `week_anchor`.
    ///
    /// Entries outside the week or with unknown shift types are ignored.
    pub fn calculate(entries: &[ScheduleEntry], shifts: &[ShiftRequirement], week_anchor: NaiveDate) -> Self {
        let mut counts: HashMap<(NaiveDate, &str), u32> = HashMap::new();
        for e in entries {
            *counts.entry((e.date, e.shift_type.as_str())).or_insert(0) += 1;
        }

        let slots = week_dates(week_anchor)
            .into_iter()
            .flat_map(|date| {
                let counts = &counts;
                shifts.iter().map(move |shift| SlotCoverage {
                    date,
                    shift_type: shift.shift_type.clone(),
                    required: shift.required_staff,
                    assigned: counts
                        .get(&(date, shift.shift_type.as_str()))
                        .copied()
                        .unwrap_or(0),
                })
            })
            .collect();

        Self { slots }
    }

    /// Slots below their requirement.
    pub fn shortfalls(&self) -> Vec<&SlotCoverage> {
        self.slots.iter().filter(|s| !s.is_covered()).collect()
    }

    /// Whether every slot is covered.
    pub fn is_fully_covered(&self) -> bool {
        self.slots.iter().all(SlotCoverage::is_covered)
    }

    /// Total missing headcount across the week.
    pub fn total_shortfall(&self) -> u32 {
        self.slots.iter().map(SlotCoverage::shortfall).sum()
    }

    /// Fraction of required headcount filled (1.0 when nothing is required).
    pub fn coverage_rate(&self) -> f64 {
        let required: u32 = self.slots.iter().map(|s| s.required).sum();
        if required == 0 {
            return 1.0;
        }
        let filled: u32 = self.slots.iter().map(|s| s.assigned.min(s.required)).sum();
        f64::from(filled) / f64::from(required)
    }

    /// One human-readable line per under-covered slot.
    pub fn shortfall_messages(&self) -> Vec<String> {
        self.shortfalls()
            .into_iter()
            .map(|s| {
                format!(
                    "{} shift on {} has {} of {} required staff",
                    s.shift_type,
                    s.date.format("%Y-%m-%d"),
                    s.assigned,
                    s.required
                )
            })
            .collect()
    }
}
