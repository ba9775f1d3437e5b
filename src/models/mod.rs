//! Rota domain models.
//!
//! Plain value types passed in by the roster store and returned to it.
//! Nothing here holds references across calls.
//!
//! # Domain Mappings
//!
//! | rota-schedule | Ward | Retail | Support desk |
//! |---------------|------|--------|--------------|
//! | StaffMember | Nurse | Shop assistant | Agent |
//! | ShiftRequirement | Early/Late/Night | Opening/Closing | Day/Evening |
//! | ScheduleEntry | Rostered shift | Till shift | On-call slot |

mod schedule;
mod shift;
mod staff;
pub mod week;

pub use schedule::{entries_for_slot, entries_for_staff, ScheduleEntry};
pub use shift::{
    find_shift, required_hours_per_day, required_hours_per_week, required_shifts_per_day,
    ShiftRequirement, WeeklyTargets,
};
pub use staff::{Availability, StaffMember, StaffProfile, DEFAULT_FLOOR_RATIO};
