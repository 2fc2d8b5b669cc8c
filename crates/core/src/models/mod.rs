pub mod module;
pub mod room;
pub mod schedule;

pub use module::{BuildingModule, ModuleKind};
pub use room::{ClassPayload, Room};
pub use schedule::{ScheduleSlot, Weekday};
