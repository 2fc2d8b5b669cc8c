use serde::{Deserialize, Serialize};

use super::schedule::ScheduleSlot;

/// A schedulable room inside a module.
///
/// `is_available` is stored rather than derived. It is only written by
/// [`crate::assignment::assign_class`] and [`crate::assignment::remove_class`],
/// which keep it in agreement with the class fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub code: String,
    pub class_name: Option<String>,
    pub professor: Option<String>,
    pub coordinator: String,
    pub schedule: Vec<ScheduleSlot>,
    pub is_available: bool,
}

impl Room {
    /// Creates an empty, available room.
    pub fn vacant(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            class_name: None,
            professor: None,
            coordinator: String::new(),
            schedule: Vec::new(),
            is_available: true,
        }
    }
}

/// Class data written into a room on assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPayload {
    pub class_name: String,
    pub professor: String,
    pub coordinator: String,
    pub schedule: Vec<ScheduleSlot>,
}
