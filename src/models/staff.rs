//! Staff model.
//!
//! A staff member is the unit of assignment: each carries a weekly hour
//! cap (hard limit), a weekly hour floor (desired minimum) and a per-weekday
//! availability of shift types.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::week::{day_name, parse_day_name};

/// Default floor as a fraction of contracted hours.
pub const DEFAULT_FLOOR_RATIO: f64 = 0.8;

/// Per-weekday shift availability.
///
/// Keys are lowercase weekday names (`"monday"` .. `"sunday"`), values are
/// the shift-type codes the member may work on that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability(BTreeMap<String, BTreeSet<String>>);

impl Availability {
    /// Creates an empty availability (never available).
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the given shift types as workable on `day`.
    pub fn allow<I, S>(&mut self, day: Weekday, shift_types: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(day_name(day).to_string())
            .or_default()
            .extend(shift_types.into_iter().map(Into::into));
    }

    /// Whether `shift_type` is workable on `day`.
    pub fn allows(&self, day: Weekday, shift_type: &str) -> bool {
        self.0
            .get(day_name(day))
            .is_some_and(|shifts| shifts.contains(shift_type))
    }

    /// `(day key, shift codes)` pairs, as supplied.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0.iter().map(|(day, shifts)| (day.as_str(), shifts))
    }

    /// Number of (day, shift) slots this availability opens.
    pub fn slot_count(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }
}

/// A member of staff, as seen by the generator and validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique staff identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Maximum hours assignable this week.
    pub weekly_hour_cap: f64,
    /// Minimum desired hours this week.
    pub weekly_hour_floor: f64,
    /// Workable shift types per weekday.
    pub availability: Availability,
}

impl StaffMember {
    /// Creates a staff member with no availability and zero hours.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            weekly_hour_cap: 0.0,
            weekly_hour_floor: 0.0,
            availability: Availability::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weekly hour cap.
    pub fn with_cap(mut self, hours: f64) -> Self {
        self.weekly_hour_cap = hours;
        self
    }

    /// Sets the weekly hour floor.
    pub fn with_floor(mut self, hours: f64) -> Self {
        self.weekly_hour_floor = hours;
        self
    }

    /// Sets cap to `hours` and floor to `floor(hours * ratio)`.
    pub fn with_contracted_hours(mut self, hours: f64, floor_ratio: f64) -> Self {
        self.weekly_hour_cap = hours;
        self.weekly_hour_floor = (hours * floor_ratio).floor();
        self
    }

    /// Adds availability for shift types on a weekday.
    pub fn available<I, S>(mut self, day: Weekday, shift_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability.allow(day, shift_types);
        self
    }

    /// Whether this member may work `shift_type` on `day`.
    #[inline]
    pub fn is_available(&self, day: Weekday, shift_type: &str) -> bool {
        self.availability.allows(day, shift_type)
    }

    /// Label used in human-readable messages: name if set, otherwise id.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Staff-directory record, as kept by the roster store.
///
/// Availability is expressed as working days times shift preferences;
/// [`StaffProfile::to_staff_member`] flattens it into a [`StaffMember`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub id: String,
    pub name: String,
    /// Contracted hours per week. Becomes the weekly cap.
    pub contracted_hours: f64,
    /// Weekday names, any casing.
    pub working_days: Vec<String>,
    /// Shift types this person works.
    pub shift_preferences: Vec<String>,
}

impl StaffProfile {
    /// Builds the generator's view of this profile.
    ///
    /// Every working day opens every preferred shift. Unrecognised day
    /// names are dropped.
    pub fn to_staff_member(&self, floor_ratio: f64) -> StaffMember {
        let mut member = StaffMember::new(&self.id)
            .with_name(&self.name)
            .with_contracted_hours(self.contracted_hours, floor_ratio);

        for day in &self.working_days {
            match parse_day_name(day) {
                Some(weekday) => member
                    .availability
                    .allow(weekday, self.shift_preferences.iter().cloned()),
                None => tracing::debug!(staff = %self.id, day = %day, "ignoring unknown working day"),
            }
        }
        member
    }
}
