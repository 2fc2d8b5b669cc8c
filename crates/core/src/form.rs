//! Add-class form state.
//!
//! A [`ClassDraft`] holds exactly what the user has typed so far, blanks
//! included. It only becomes a [`ClassPayload`] once [`ClassDraft::is_valid`]
//! holds.

use serde::{Deserialize, Serialize};

use crate::{
    errors::{RoomError, RoomResult},
    models::{ClassPayload, ScheduleSlot, Weekday},
};

/// A schedule row of the form; every field may still be blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSlot {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl Default for DraftSlot {
    fn default() -> Self {
        Self {
            day: Weekday::Lunes.label().to_string(),
            start_time: String::new(),
            end_time: String::new(),
        }
    }
}

impl DraftSlot {
    fn to_slot(&self) -> Option<ScheduleSlot> {
        if self.day.is_empty()
            || self.start_time.is_empty()
            || self.end_time.is_empty()
            || self.start_time >= self.end_time
        {
            return None;
        }
        let day = self.day.parse::<Weekday>().ok()?;
        Some(ScheduleSlot::new(day, self.start_time.as_str(), self.end_time.as_str()))
    }
}

/// Text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    ClassName,
    Professor,
    Coordinator,
}

/// Fields of a single schedule row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotField {
    Day,
    StartTime,
    EndTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDraft {
    pub class_name: String,
    pub professor: String,
    pub coordinator: String,
    pub schedule: Vec<DraftSlot>,
}

impl Default for ClassDraft {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            professor: String::new(),
            coordinator: String::new(),
            schedule: vec![DraftSlot::default()],
        }
    }
}

impl ClassDraft {
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let target = match field {
            DraftField::ClassName => &mut self.class_name,
            DraftField::Professor => &mut self.professor,
            DraftField::Coordinator => &mut self.coordinator,
        };
        *target = value.into();
    }

    pub fn add_slot(&mut self) {
        self.schedule.push(DraftSlot::default());
    }

    /// Removes the slot at `index`. The last remaining slot is kept.
    ///
    /// Returns whether a slot was removed.
    pub fn remove_slot(&mut self, index: usize) -> bool {
        if self.schedule.len() <= 1 || index >= self.schedule.len() {
            return false;
        }
        self.schedule.remove(index);
        true
    }

    pub fn update_slot(
        &mut self,
        index: usize,
        field: SlotField,
        value: impl Into<String>,
    ) -> RoomResult<()> {
        let value = value.into();
        if field == SlotField::Day && !value.is_empty() {
            value.parse::<Weekday>()?;
        }

        let slot = self
            .schedule
            .get_mut(index)
            .ok_or_else(|| RoomError::Validation(format!("No schedule slot at index {}", index)))?;
        let target = match field {
            SlotField::Day => &mut slot.day,
            SlotField::StartTime => &mut slot.start_time,
            SlotField::EndTime => &mut slot.end_time,
        };
        *target = value;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        !self.class_name.trim().is_empty()
            && !self.professor.trim().is_empty()
            && !self.coordinator.trim().is_empty()
            && !self.schedule.is_empty()
            && self.schedule.iter().all(|slot| slot.to_slot().is_some())
    }

    /// Converts the draft into a payload. Field values are passed on untrimmed.
    pub fn to_payload(&self) -> RoomResult<ClassPayload> {
        if !self.is_valid() {
            return Err(RoomError::Validation(
                "All fields and a valid schedule are required".to_string(),
            ));
        }

        let schedule = self
            .schedule
            .iter()
            .filter_map(DraftSlot::to_slot)
            .collect();

        Ok(ClassPayload {
            class_name: self.class_name.clone(),
            professor: self.professor.clone(),
            coordinator: self.coordinator.clone(),
            schedule,
        })
    }
}
