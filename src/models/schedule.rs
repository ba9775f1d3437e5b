//! Schedule entry model.
//!
//! An entry assigns one staff member to one `(date, shift_type)` pair.
//! A week's schedule is a flat `Vec<ScheduleEntry>` in generation order.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A staff-date-shift assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Assigned staff member ID.
    pub staff_id: String,
    /// Calendar day of the shift.
    pub date: NaiveDate,
    /// Shift-type code.
    pub shift_type: String,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(staff_id: impl Into<String>, date: NaiveDate, shift_type: impl Into<String>) -> Self {
        Self {
            staff_id: staff_id.into(),
            date,
            shift_type: shift_type.into(),
        }
    }

    /// Weekday of the entry's date.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Whether this entry occupies `staff_id` on `date`.
    #[inline]
    pub fn occupies(&self, staff_id: &str, date: NaiveDate) -> bool {
        self.staff_id == staff_id && self.date == date
    }
}

/// Returns all entries for a given staff member.
pub fn entries_for_staff<'a>(entries: &'a [ScheduleEntry], staff_id: &str) -> Vec<&'a ScheduleEntry> {
    entries.iter().filter(|e| e.staff_id == staff_id).collect()
}

/// Returns all entries for a given `(date, shift_type)` slot.
pub fn entries_for_slot<'a>(
    entries: &'a [ScheduleEntry],
    date: NaiveDate,
    shift_type: &str,
) -> Vec<&'a ScheduleEntry> {
    entries
        .iter()
        .filter(|e| e.date == date && e.shift_type == shift_type)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn sample() -> Vec<ScheduleEntry> {
        vec![
            ScheduleEntry::new("A", d(1), "morning"),
            ScheduleEntry::new("B", d(1), "morning"),
            ScheduleEntry::new("A", d(2), "night"),
        ]
    }

    #[test]
    fn test_entry_weekday() {
        let e = ScheduleEntry::new("A", d(1), "morning");
        assert_eq!(e.weekday(), Weekday::Mon);
        assert!(e.occupies("A", d(1)));
        assert!(!e.occupies("A", d(2)));
        assert!(!e.occupies("B", d(1)));
    }

    #[test]
    fn test_entries_for_staff() {
        let entries = sample();
        assert_eq!(entries_for_staff(&entries, "A").len(), 2);
        assert_eq!(entries_for_staff(&entries, "B").len(), 1);
        assert!(entries_for_staff(&entries, "Z").is_empty());
    }

    #[test]
    fn test_entries_for_slot() {
        let entries = sample();
        assert_eq!(entries_for_slot(&entries, d(1), "morning").len(), 2);
        assert_eq!(entries_for_slot(&entries, d(2), "morning").len(), 0);
    }

    #[test]
    fn test_entry_json_shape() {
        let e = ScheduleEntry::new("A", d(1), "morning");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "staff_id": "A", "date": "2024-01-01", "shift_type": "morning" })
        );
    }
}
