//! One-call week planning.
//!
//! Runs generation, validation and coverage together, the way the roster
//! screen does when an operator asks for a fresh week.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CoverageReport, RotaGenerator, ScheduleStats};
use crate::config::SchedulingSettings;
use crate::models::week::{in_week, week_start};
use crate::models::{ScheduleEntry, StaffMember};
use crate::validation::{validate, ValidationReport};

/// A generated week together with its audit results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Monday of the planned week, or its first existing date when the
    /// week is clipped by `NaiveDate::MIN`.
    pub week_start: NaiveDate,
    /// Generated entries, in generation order.
    pub entries: Vec<ScheduleEntry>,
    /// Validator output for `entries`.
    pub report: ValidationReport,
    /// Headcount coverage for `entries`.
    pub coverage: CoverageReport,
    /// Hours and shift counts for `entries`.
    pub stats: ScheduleStats,
}

impl WeekPlan {
    /// Whether the plan passes validation and covers every slot.
    pub fn is_clean(&self) -> bool {
        self.report.is_valid && self.coverage.is_fully_covered()
    }
}

/// Generates, validates and measures one week.
pub fn plan_week(staff: &[StaffMember], settings: &SchedulingSettings, week_anchor: NaiveDate) -> WeekPlan {
    let entries = RotaGenerator::new().generate(staff, &settings.shifts, week_anchor, &settings.weekly_targets);
    let report = validate(&entries, staff, &settings.shifts, &settings.weekly_targets);
    let coverage = CoverageReport::calculate(&entries, &settings.shifts, week_anchor);
    let stats = ScheduleStats::calculate(&entries, staff, &settings.shifts);
    let week_start = week_start(week_anchor).unwrap_or(week_anchor);

    if !report.is_valid {
        tracing::warn!(
            %week_start,
            issues = report.issues.len(),
            "generated week has validation issues"
        );
    }
    if !coverage.is_fully_covered() {
        tracing::info!(
            %week_start,
            shortfall = coverage.total_shortfall(),
            "generated week is under-staffed"
        );
    }

    WeekPlan {
        week_start,
        entries,
        report,
        coverage,
        stats,
    }
}

/// Replaces one week's entries.
///
/// Returns `existing` without any entry in the anchor's week, followed by
/// `generated`. Applying the result atomically is up to the caller.
pub fn replace_week(
    existing: &[ScheduleEntry],
    week_anchor: NaiveDate,
    generated: Vec<ScheduleEntry>,
) -> Vec<ScheduleEntry> {
    let mut merged: Vec<ScheduleEntry> = existing
        .iter()
        .filter(|e| !in_week(week_anchor, e.date))
        .cloned()
        .collect();
    merged.extend(generated);
    merged
}
