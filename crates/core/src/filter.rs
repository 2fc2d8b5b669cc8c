//! # Room List Filter
//!
//! Narrows a module's rooms for the list view. Three independent criteria are
//! combined with AND:
//!
//! - **Status**: all rooms, only available rooms or only occupied rooms.
//! - **Coordinator**: exact match on the coordinator name, unless the
//!   [`ALL_COORDINATORS`] sentinel (or an empty value) is selected.
//! - **Time range**: active only when both ends are filled in. A room passes
//!   when at least one of its slots overlaps the range. Rooms without any
//!   schedule are never excluded by the time range.
//!
//! The input order is preserved.

use serde::{Deserialize, Serialize};

use crate::models::Room;

/// Coordinator value meaning "do not filter by coordinator".
pub const ALL_COORDINATORS: &str = "todos";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Available,
    Occupied,
}

impl StatusFilter {
    fn accepts(self, room: &Room) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => room.is_available,
            StatusFilter::Occupied => !room.is_available,
        }
    }
}

/// Filter values as entered in the list view controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub status: StatusFilter,
    pub coordinator: String,
    pub range_start: String,
    pub range_end: String,
}

impl RoomFilter {
    fn coordinator(&self) -> Option<&str> {
        match self.coordinator.as_str() {
            "" | ALL_COORDINATORS => None,
            name => Some(name),
        }
    }

    fn time_range(&self) -> Option<(&str, &str)> {
        if self.range_start.is_empty() || self.range_end.is_empty() {
            None
        } else {
            Some((self.range_start.as_str(), self.range_end.as_str()))
        }
    }

    pub fn matches(&self, room: &Room) -> bool {
        if !self.status.accepts(room) {
            return false;
        }

        if let Some(coordinator) = self.coordinator() {
            if room.coordinator != coordinator {
                return false;
            }
        }

        if let Some((start, end)) = self.time_range() {
            let overlaps = room.schedule.iter().any(|slot| slot.overlaps(start, end));
            if !overlaps && !room.schedule.is_empty() {
                return false;
            }
        }

        true
    }
}

pub fn filter_rooms<'a>(rooms: &'a [Room], filter: &RoomFilter) -> Vec<&'a Room> {
    rooms.iter().filter(|room| filter.matches(room)).collect()
}

/// Distinct non-empty coordinators, in order of first appearance.
pub fn coordinator_options(rooms: &[Room]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for room in rooms {
        if !room.coordinator.is_empty() && !options.contains(&room.coordinator) {
            options.push(room.coordinator.clone());
        }
    }
    options
}
