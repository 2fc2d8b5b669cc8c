//! The only two state transitions a room can go through.
//!
//! Both take the room set by value and hand back the updated set. A target
//! id that matches no room leaves the set untouched.

use crate::models::{ClassPayload, Room};

/// Writes `payload` into the room with `target_id` and marks it occupied.
pub fn assign_class(rooms: Vec<Room>, target_id: &str, payload: &ClassPayload) -> Vec<Room> {
    rooms
        .into_iter()
        .map(|room| {
            if room.id != target_id {
                return room;
            }
            Room {
                class_name: Some(payload.class_name.clone()),
                professor: Some(payload.professor.clone()),
                coordinator: payload.coordinator.clone(),
                schedule: payload.schedule.clone(),
                is_available: false,
                ..room
            }
        })
        .collect()
}

/// Clears the class held by the room with `target_id` and marks it available.
pub fn remove_class(rooms: Vec<Room>, target_id: &str) -> Vec<Room> {
    rooms
        .into_iter()
        .map(|room| {
            if room.id != target_id {
                return room;
            }
            Room {
                class_name: None,
                professor: None,
                coordinator: String::new(),
                schedule: Vec::new(),
                is_available: true,
                ..room
            }
        })
        .collect()
}
