use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::RoomError;

/// Teaching days shown in the add-class form, Monday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Lunes,
    Martes,
    #[serde(rename = "Miércoles")]
    Miercoles,
    Jueves,
    Viernes,
    #[serde(rename = "Sábado")]
    Sabado,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Lunes,
        Weekday::Martes,
        Weekday::Miercoles,
        Weekday::Jueves,
        Weekday::Viernes,
        Weekday::Sabado,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Lunes => "Lunes",
            Weekday::Martes => "Martes",
            Weekday::Miercoles => "Miércoles",
            Weekday::Jueves => "Jueves",
            Weekday::Viernes => "Viernes",
            Weekday::Sabado => "Sábado",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.label() == s)
            .ok_or_else(|| RoomError::Validation(format!("Unknown weekday: {}", s)))
    }
}

/// One weekly block a class occupies in a room.
///
/// Times are zero-padded 24h `HH:MM` strings, so plain string comparison
/// orders them correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleSlot {
    pub fn new(day: Weekday, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Open-interval overlap with `[range_start, range_end]`; touching ends do not count.
    pub fn overlaps(&self, range_start: &str, range_end: &str) -> bool {
        self.start_time.as_str() < range_end && self.end_time.as_str() > range_start
    }
}
