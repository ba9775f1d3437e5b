//! Shift requirement and weekly target models.
//!
//! Shift types are open-ended string codes (`"morning"`, `"night"`, ...).
//! The order of a `&[ShiftRequirement]` slice is a priority order: the
//! generator fills earlier shifts of a day first.

use serde::{Deserialize, Serialize};

use super::week::WEEKDAYS;

/// Per-day staffing requirement for one shift type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRequirement {
    /// Shift-type code.
    pub shift_type: String,
    /// Headcount needed on every calendar day.
    pub required_staff: u32,
    /// Hours charged to each assignee.
    pub hours_per_shift: f64,
}

impl ShiftRequirement {
    /// Creates a requirement.
    pub fn new(shift_type: impl Into<String>, required_staff: u32, hours_per_shift: f64) -> Self {
        Self {
            shift_type: shift_type.into(),
            required_staff,
            hours_per_shift,
        }
    }

    /// Whether this requirement can produce assignments at all.
    ///
    /// Zero headcount or non-positive hours yield no entries.
    #[inline]
    pub fn is_assignable(&self) -> bool {
        self.required_staff > 0 && self.hours_per_shift.is_finite() && self.hours_per_shift > 0.0
    }

    /// Staff-hours needed per day for this shift.
    #[inline]
    pub fn daily_hours(&self) -> f64 {
        f64::from(self.required_staff) * self.hours_per_shift
    }
}

/// Looks up a requirement by shift-type code.
pub fn find_shift<'a>(shifts: &'a [ShiftRequirement], shift_type: &str) -> Option<&'a ShiftRequirement> {
    shifts.iter().find(|s| s.shift_type == shift_type)
}

/// Aggregate weekly requirement context.
///
/// Informational only; neither the generator nor the validator enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTargets {
    /// Total shifts the week should contain.
    pub required_shifts_per_week: u32,
    /// Contracted hours per staff member per week.
    pub contracted_hours_per_week: f64,
}

impl Default for WeeklyTargets {
    fn default() -> Self {
        Self {
            required_shifts_per_week: 56,
            contracted_hours_per_week: 37.0,
        }
    }
}

impl WeeklyTargets {
    /// Creates weekly targets.
    pub fn new(required_shifts_per_week: u32, contracted_hours_per_week: f64) -> Self {
        Self {
            required_shifts_per_week,
            contracted_hours_per_week,
        }
    }

    /// Derives the shift total from a requirement set, keeping the given
    /// contracted hours.
    pub fn from_requirements(shifts: &[ShiftRequirement], contracted_hours_per_week: f64) -> Self {
        Self {
            required_shifts_per_week: required_shifts_per_day(shifts) * WEEKDAYS.len() as u32,
            contracted_hours_per_week,
        }
    }
}

/// Sum of headcounts over all shift types for one day.
pub fn required_shifts_per_day(shifts: &[ShiftRequirement]) -> u32 {
    shifts.iter().map(|s| s.required_staff).sum()
}

/// Staff-hours needed for one day of full coverage.
pub fn required_hours_per_day(shifts: &[ShiftRequirement]) -> f64 {
    shifts.iter().map(ShiftRequirement::daily_hours).sum()
}

/// Staff-hours needed for a week of full coverage.
pub fn required_hours_per_week(shifts: &[ShiftRequirement]) -> f64 {
    required_hours_per_day(shifts) * WEEKDAYS.len() as f64
}
