//! Weekly staff rota engine.
//!
//! Builds one week of shift assignments from a staff roster and a set of
//! shift requirements, and audits any assignment set against the rota
//! rules. Both operations are pure functions over caller-owned data: no
//! I/O, no global state, safe to call from many threads at once.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `StaffMember`, `Availability`,
//!   `ShiftRequirement`, `WeeklyTargets`, `ScheduleEntry`, week helpers
//! - **`scheduler`**: Greedy generator, coverage report, statistics
//! - **`validation`**: Schedule audit (`validate`) and input integrity
//!   checks (`validate_input`)
//! - **`config`**: Explicit scheduling settings, loadable from JSON
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use rota_schedule::models::{ShiftRequirement, StaffMember, WeeklyTargets};
//! use rota_schedule::{generate_schedule, validate};
//!
//! let staff = vec![
//!     StaffMember::new("A").with_cap(16.0)
//!         .available(Weekday::Mon, ["morning"])
//!         .available(Weekday::Tue, ["morning"]),
//!     StaffMember::new("B").with_cap(16.0)
//!         .available(Weekday::Mon, ["morning"])
//!         .available(Weekday::Tue, ["morning"]),
//! ];
//! let shifts = vec![ShiftRequirement::new("morning", 1, 8.0)];
//! let targets = WeeklyTargets::from_requirements(&shifts, 16.0);
//! let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! let entries = generate_schedule(&staff, &shifts, monday, &targets);
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].staff_id, "A");
//! assert_eq!(entries[1].staff_id, "B");
//!
//! let report = validate(&entries, &staff, &shifts, &targets);
//! assert!(report.is_valid);
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events (under-staffed slots, degenerate requirements,
//! summaries). Installing a subscriber is left to the application.

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::SchedulingSettings;
pub use error::{Result, RotaError};
pub use scheduler::{generate_schedule, plan_week, RotaGenerator};
pub use validation::{validate, validate_input, ValidationReport};
