//! Scheduling settings.
//!
//! The shift set, weekly targets and floor ratio are passed around as one
//! explicit value rather than read from any global. Settings are usually
//! persisted by the roster store as JSON:
//!
//! ```json
//! {
//!   "shifts": [{ "shift_type": "morning", "required_staff": 2, "hours_per_shift": 8.0 }],
//!   "weekly_targets": { "required_shifts_per_week": 14, "contracted_hours_per_week": 37.0 },
//!   "floor_ratio": 0.8
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, RotaError};
use crate::models::{ShiftRequirement, StaffMember, StaffProfile, WeeklyTargets, DEFAULT_FLOOR_RATIO};

/// Settings consumed by generation and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingSettings {
    /// Shift requirements in priority order.
    pub shifts: Vec<ShiftRequirement>,
    /// Informational weekly targets.
    pub weekly_targets: WeeklyTargets,
    /// Weekly floor as a fraction of contracted hours.
    pub floor_ratio: f64,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            shifts: default_shifts(),
            weekly_targets: WeeklyTargets::default(),
            floor_ratio: DEFAULT_FLOOR_RATIO,
        }
    }
}

/// Four eight-hour shift types: morning ×2, day ×3, afternoon ×2, night ×1.
pub fn default_shifts() -> Vec<ShiftRequirement> {
    vec![
        ShiftRequirement::new("morning", 2, 8.0),
        ShiftRequirement::new("day", 3, 8.0),
        ShiftRequirement::new("afternoon", 2, 8.0),
        ShiftRequirement::new("night", 1, 8.0),
    ]
}

impl SchedulingSettings {
    /// Creates settings from a shift list, deriving weekly targets from it.
    pub fn with_shifts(shifts: Vec<ShiftRequirement>) -> Self {
        let contracted = WeeklyTargets::default().contracted_hours_per_week;
        Self {
            weekly_targets: WeeklyTargets::from_requirements(&shifts, contracted),
            shifts,
            floor_ratio: DEFAULT_FLOOR_RATIO,
        }
    }

    /// Parses and checks settings from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.check()?;
        Ok(settings)
    }

    /// Reads, parses and checks settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RotaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), shifts = settings.shifts.len(), "loaded scheduling settings");
        Ok(settings)
    }

    /// Serialises to pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects settings the roster UI would never save.
    ///
    /// Generation itself tolerates all of these; this is for the load path.
    pub fn check(&self) -> Result<()> {
        if !(self.floor_ratio > 0.0 && self.floor_ratio <= 1.0) {
            return Err(RotaError::InvalidSettings(format!(
                "floor_ratio must be in (0, 1], got {}",
                self.floor_ratio
            )));
        }

        let mut seen = HashSet::new();
        for shift in &self.shifts {
            if shift.shift_type.trim().is_empty() {
                return Err(RotaError::InvalidSettings("empty shift type code".into()));
            }
            if !seen.insert(shift.shift_type.as_str()) {
                return Err(RotaError::InvalidSettings(format!(
                    "duplicate shift type '{}'",
                    shift.shift_type
                )));
            }
            if !(shift.hours_per_shift.is_finite() && shift.hours_per_shift > 0.0) {
                return Err(RotaError::InvalidSettings(format!(
                    "shift '{}' must have positive hours, got {}",
                    shift.shift_type, shift.hours_per_shift
                )));
            }
        }
        Ok(())
    }

    /// Converts directory profiles using this settings' floor ratio.
    pub fn staff_from_profiles(&self, profiles: &[StaffProfile]) -> Vec<StaffMember> {
        profiles
            .iter()
            .map(|p| p.to_staff_member(self.floor_ratio))
            .collect()
    }
}
