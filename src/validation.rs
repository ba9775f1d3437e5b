//! Schedule and input validation.
//!
//! [`validate`] audits any entry set (generated or hand-edited) against the
//! rota rules and reports every violation as data. Detects:
//! - Entries referencing an unknown shift type
//! - Staff booked more than once on the same day
//! - Staff scheduled below their weekly floor
//! - Staff scheduled above their weekly cap
//!
//! Headcount coverage is not checked here; see
//! [`CoverageReport`](crate::scheduler::CoverageReport).
//!
//! [`validate_input`] separately checks the structural integrity of a roster
//! and shift set before generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::models::week::{day_name, parse_day_name};
use crate::models::{find_shift, ScheduleEntry, ShiftRequirement, StaffMember, WeeklyTargets};

/// Categories of schedule issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// An entry names a shift type absent from the requirements.
    UnknownShiftType,
    /// A staff member has more than one entry on one date.
    DoubleBooking,
    /// Scheduled hours strictly below the weekly floor.
    UnderScheduled,
    /// Scheduled hours strictly above the weekly cap.
    OverScheduled,
}

/// A schedule issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Issue category.
    pub kind: IssueKind,
    /// Related staff ID, or the shift code for unknown shift types.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    fn new(kind: IssueKind, entity_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `true` iff `issues` is empty.
    pub is_valid: bool,
    /// Issues in detection order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    /// Issue messages in order.
    pub fn messages(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.message.as_str()).collect()
    }

    /// Issues of one kind.
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }
}

/// Validates a schedule.
///
/// Checks, in order:
/// 1. Each entry, in input order: unknown shift type (entry is then skipped
///    for every later check), then double booking (reported once per
///    `(staff, date)` pair, when its second entry is seen).
/// 2. Each roster member, in roster order: hours below floor, then hours
///    above cap. Hours come from known-shift entries only.
///
/// Read-only and idempotent. `weekly_targets` is accepted for context and
/// does not affect the result.
pub fn validate(
    entries: &[ScheduleEntry],
    staff: &[StaffMember],
    shifts: &[ShiftRequirement],
    weekly_targets: &WeeklyTargets,
) -> ValidationReport {
    let mut issues = Vec::new();
    let mut hours: HashMap<&str, f64> = HashMap::new();
    let mut per_day: HashMap<(&str, NaiveDate), u32> = HashMap::new();

    for entry in entries {
        let Some(shift) = find_shift(shifts, &entry.shift_type) else {
            issues.push(ValidationIssue::new(
                IssueKind::UnknownShiftType,
                &entry.shift_type,
                format!("Invalid shift type: {}", entry.shift_type),
            ));
            continue;
        };

        *hours.entry(entry.staff_id.as_str()).or_insert(0.0) += shift.hours_per_shift;

        let count = per_day.entry((entry.staff_id.as_str(), entry.date)).or_insert(0);
        *count += 1;
        if *count == 2 {
            issues.push(ValidationIssue::new(
                IssueKind::DoubleBooking,
                &entry.staff_id,
                format!(
                    "Staff {} is assigned multiple shifts on {}",
                    entry.staff_id,
                    entry.date.format("%Y-%m-%d")
                ),
            ));
        }
    }

    for member in staff {
        let scheduled = hours.get(member.id.as_str()).copied().unwrap_or(0.0);

        if scheduled < member.weekly_hour_floor {
            issues.push(ValidationIssue::new(
                IssueKind::UnderScheduled,
                &member.id,
                format!(
                    "{} ({}) is under-scheduled: {} hours vs minimum {} (short by {})",
                    member.label(),
                    member.id,
                    display_hours(scheduled),
                    display_hours(member.weekly_hour_floor),
                    display_hours(member.weekly_hour_floor - scheduled)
                ),
            ));
        }
        if scheduled > member.weekly_hour_cap {
            issues.push(ValidationIssue::new(
                IssueKind::OverScheduled,
                &member.id,
                format!(
                    "{} ({}) is over-scheduled: {} hours vs maximum {} (over by {})",
                    member.label(),
                    member.id,
                    display_hours(scheduled),
                    display_hours(member.weekly_hour_cap),
                    display_hours(scheduled - member.weekly_hour_cap)
                ),
            ));
        }
    }

    tracing::debug!(
        entries = entries.len(),
        issues = issues.len(),
        target_shifts = weekly_targets.required_shifts_per_week,
        "validated schedule"
    );
    ValidationReport::from_issues(issues)
}

/// Rounds to hundredths for messages; summed fractional shifts carry
/// float noise.
fn display_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Input validation result.
pub type InputResult = Result<(), Vec<InputError>>;

/// A structural problem in the roster or shift set.
#[derive(Debug, Clone, PartialEq)]
pub struct InputError {
    /// Error category.
    pub kind: InputErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    /// Two staff members or two shift requirements share an ID.
    DuplicateId,
    /// A staff member's floor exceeds their cap.
    FloorAboveCap,
    /// An availability key is not a lowercase weekday name.
    UnknownWeekday,
    /// A shift requirement has non-positive hours.
    NonPositiveHours,
    /// A staff member's availability names a shift type that isn't required.
    UnknownShiftReference,
}

impl InputError {
    fn new(kind: InputErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates roster and shift inputs.
///
/// Checks:
/// 1. No duplicate staff IDs
/// 2. No duplicate shift-type codes
/// 3. Every shift has positive hours
/// 4. Every staff floor ≤ cap
/// 5. Availability keys are lowercase weekday names
/// 6. Availability only names known shift types
///
/// The generator does not call this; it tolerates all of the above.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(staff: &[StaffMember], shifts: &[ShiftRequirement]) -> InputResult {
    let mut errors = Vec::new();

    let mut shift_codes = HashSet::new();
    for shift in shifts {
        if !shift_codes.insert(shift.shift_type.as_str()) {
            errors.push(InputError::new(
                InputErrorKind::DuplicateId,
                format!("Duplicate shift type: {}", shift.shift_type),
            ));
        }
        if !(shift.hours_per_shift.is_finite() && shift.hours_per_shift > 0.0) {
            errors.push(InputError::new(
                InputErrorKind::NonPositiveHours,
                format!(
                    "Shift '{}' has non-positive hours: {}",
                    shift.shift_type, shift.hours_per_shift
                ),
            ));
        }
    }

    let mut staff_ids = HashSet::new();
    for member in staff {
        if !staff_ids.insert(member.id.as_str()) {
            errors.push(InputError::new(
                InputErrorKind::DuplicateId,
                format!("Duplicate staff ID: {}", member.id),
            ));
        }

        if member.weekly_hour_floor > member.weekly_hour_cap {
            errors.push(InputError::new(
                InputErrorKind::FloorAboveCap,
                format!(
                    "Staff '{}' has floor {} above cap {}",
                    member.id, member.weekly_hour_floor, member.weekly_hour_cap
                ),
            ));
        }

        for (key, codes) in member.availability.iter() {
            let canonical = parse_day_name(key).is_some_and(|day| day_name(day) == key);
            if !canonical {
                errors.push(InputError::new(
                    InputErrorKind::UnknownWeekday,
                    format!("Staff '{}' has availability for unknown day '{}'", member.id, key),
                ));
            }
            for code in codes {
                if !shift_codes.contains(code.as_str()) {
                    errors.push(InputError::new(
                        InputErrorKind::UnknownShiftReference,
                        format!(
                            "Staff '{}' is available for unknown shift type '{}'",
                            member.id, code
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn shifts() -> Vec<ShiftRequirement> {
        vec![
            ShiftRequirement::new("morning", 1, 8.0),
            ShiftRequirement::new("night", 1, 8.0),
        ]
    }

    fn member(id: &str, floor: f64, cap: f64) -> StaffMember {
        StaffMember::new(id).with_name(format!("Staff {id}")).with_floor(floor).with_cap(cap)
    }

    fn targets() -> WeeklyTargets {
        WeeklyTargets::default()
    }

    #[test]
    fn test_valid_schedule() {
        let staff = vec![member("A", 16.0, 16.0)];
        let entries = vec![
            ScheduleEntry::new("A", d(1), "morning"),
            ScheduleEntry::new("A", d(2), "night"),
        ];
        let report = validate(&entries, &staff, &shifts(), &targets());
        assert!(report.is_valid);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_empty_everything_is_valid() {
        let report = validate(&[], &[], &[], &targets());
        assert!(report.is_valid);
    }

    #[test]
    fn test_unknown_shift_type_not_counted() {
        let staff = vec![member("A", 0.0, 8.0)];
        let entries = vec![
            ScheduleEntry::new("A", d(1), "evening"),
            ScheduleEntry::new("A", d(1), "evening"),
            ScheduleEntry::new("A", d(2), "morning"),
        ];
        let report = validate(&entries, &staff, &shifts(), &targets());

        // Two unknown-shift issues; no double booking, no over-cap (16h not counted)
        assert!(!report.is_valid);
        assert_eq!(report.issues.len(), 2);
        assert!(report.issues.iter().all(|i| i.kind == IssueKind::UnknownShiftType));
        assert_eq!(report.messages(), vec!["Invalid shift type: evening"; 2]);
    }

    #[test]
    fn test_double_booking_reported_once_per_pair() {
        let staff = vec![member("A", 0.0, 100.0), member("B", 0.0, 100.0)];
        let entries = vec![
            ScheduleEntry::new("A", d(1), "morning"),
            ScheduleEntry::new("B", d(1), "morning"),
            ScheduleEntry::new("A", d(1), "night"),
            ScheduleEntry::new("A", d(1), "morning"),
            ScheduleEntry::new("A", d(2), "morning"),
        ];
        let report = validate(&entries, &staff, &shifts(), &targets());

        let doubles: Vec<_> = report.issues_of(IssueKind::DoubleBooking).collect();
        assert_eq!(doubles.len(), 1);
        assert_eq!(doubles[0].entity_id, "A");
        assert_eq!(doubles[0].message, "Staff A is assigned multiple shifts on 2024-01-01");
        assert_eq!(report.issues.len(), 1);
    }

    #[test]
    fn test_under_and_over_scheduled() {
        let staff = vec![member("A", 16.0, 24.0), member("B", 0.0, 8.0)];
        let entries = vec![
            ScheduleEntry::new("A", d(1), "morning"),
            ScheduleEntry::new("B", d(1), "morning"),
            ScheduleEntry::new("B", d(2), "morning"),
        ];
        let report = validate(&entries, &staff, &shifts(), &targets());

        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].kind, IssueKind::UnderScheduled);
        assert_eq!(
            report.issues[0].message,
            "Staff A (A) is under-scheduled: 8 hours vs minimum 16 (short by 8)"
        );
        assert_eq!(report.issues[1].kind, IssueKind::OverScheduled);
        assert_eq!(
            report.issues[1].message,
            "Staff B (B) is over-scheduled: 16 hours vs maximum 8 (over by 8)"
        );
    }

    #[test]
    fn test_fractional_hours_in_messages() {
        let shifts = vec![ShiftRequirement::new("short", 1, 7.2)];
        let staff = vec![member("A", 29.0, 40.0), member("B", 0.0, 21.0)];
        let mut entries: Vec<ScheduleEntry> = (1..=4).map(|day| ScheduleEntry::new("A", d(day), "short")).collect();
        entries.extend((1..=3).map(|day| ScheduleEntry::new("B", d(day), "short")));

        let report = validate(&entries, &staff, &shifts, &targets());
        assert_eq!(
            report.messages(),
            vec![
                "Staff A (A) is under-scheduled: 28.8 hours vs minimum 29 (short by 0.2)",
                "Staff B (B) is over-scheduled: 21.6 hours vs maximum 21 (over by 0.6)",
            ]
        );
    }

    #[test]
    fn test_boundaries_are_not_violations() {
        let staff = vec![member("A", 8.0, 8.0)];
        let entries = vec![ScheduleEntry::new("A", d(1), "morning")];
        assert!(validate(&entries, &staff, &shifts(), &targets()).is_valid);
    }

    #[test]
    fn test_unscheduled_member_below_floor() {
        let staff = vec![member("A", 4.0, 40.0)];
        let report = validate(&[], &staff, &shifts(), &targets());
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::UnderScheduled);
    }

    #[test]
    fn test_off_roster_entries_are_not_reported() {
        let staff = vec![member("A", 0.0, 8.0)];
        let entries = vec![
            ScheduleEntry::new("ghost", d(1), "morning"),
            ScheduleEntry::new("ghost", d(2), "morning"),
        ];
        assert!(validate(&entries, &staff, &shifts(), &targets()).is_valid);
    }

    #[test]
    fn test_issue_order() {
        let staff = vec![member("A", 40.0, 8.0)];
        let entries = vec![
            ScheduleEntry::new("A", d(1), "morning"),
            ScheduleEntry::new("A", d(1), "night"),
            ScheduleEntry::new("A", d(2), "bogus"),
        ];
        let report = validate(&entries, &staff, &shifts(), &targets());
        let kinds: Vec<_> = report.issues.iter().map(|i| i.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::DoubleBooking,
                IssueKind::UnknownShiftType,
                IssueKind::UnderScheduled,
                IssueKind::OverScheduled,
            ]
        );
    }

    #[test]
    fn test_report_serializes() {
        let staff = vec![member("A", 8.0, 8.0)];
        let report = validate(&[], &staff, &shifts(), &targets());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["issues"][0]["kind"], "UnderScheduled");
    }

    #[test]
    fn test_valid_input() {
        let staff = vec![member("A", 8.0, 16.0).available(Weekday::Mon, ["morning"])];
        assert!(validate_input(&staff, &shifts()).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let staff = vec![member("A", 0.0, 8.0), member("A", 0.0, 8.0)];
        let mut shifts = shifts();
        shifts.push(ShiftRequirement::new("night", 2, 8.0));

        let errors = validate_input(&staff, &shifts).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == InputErrorKind::DuplicateId)
                .count(),
            2
        );
        assert!(errors.iter().any(|e| e.message.contains("staff")));
    }

    #[test]
    fn test_floor_above_cap() {
        let staff = vec![member("A", 20.0, 8.0)];
        let errors = validate_input(&staff, &shifts()).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == InputErrorKind::FloorAboveCap));
    }

    #[test]
    fn test_non_positive_hours() {
        let shifts = vec![ShiftRequirement::new("morning", 1, 0.0)];
        let errors = validate_input(&[], &shifts).unwrap_err();
        assert_eq!(errors[0].kind, InputErrorKind::NonPositiveHours);
    }

    #[test]
    fn test_bad_availability() {
        let mut s = member("A", 0.0, 8.0);
        s.availability = serde_json::from_value(serde_json::json!({
            "Monday": ["morning"],
            "someday": ["morning"],
            "tuesday": ["evening"]
        }))
        .unwrap();

        let errors = validate_input(&[s], &shifts()).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == InputErrorKind::UnknownWeekday)
                .count(),
            2
        );
        assert!(errors
            .iter()
            .any(|e| e.kind == InputErrorKind::UnknownShiftReference && e.message.contains("evening")));
    }
}
