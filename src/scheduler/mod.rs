//! Rota generation, coverage and statistics.
//!
//! # Algorithm
//!
//! `RotaGenerator` uses a greedy, day-major, shift-major,
//! least-loaded-first heuristic. It is not optimal, but it is fast and
//! fully deterministic for a given staff order and shift order.
//!
//! # Audit helpers
//!
//! `CoverageReport` compares assigned headcount with `required_staff` per
//! slot. `ScheduleStats` totals hours and shifts per staff member.
//! `plan_week` runs generation, validation and both audits in one call.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"

mod coverage;
mod generator;
mod plan;
mod stats;

pub use coverage::{CoverageReport, SlotCoverage};
pub use generator::{generate_schedule, RotaGenerator, ScheduleRequest};
pub use plan::{plan_week, replace_week, WeekPlan};
pub use stats::{ScheduleStats, StaffUtilization};
