//! Read-only view models handed to the presentation layer.

use serde::Serialize;

use crate::{
    errors::{RoomError, RoomResult},
    filter::{RoomFilter, coordinator_options, filter_rooms},
    form::ClassDraft,
    models::{BuildingModule, ModuleKind, Room, ScheduleSlot},
    session::{Screen, Session, ViewMode},
};

pub const AVAILABLE_LABEL: &str = "Disponible";
pub const OCCUPIED_LABEL: &str = "Ocupada";
pub const EMPTY_CELL: &str = "-";
pub const NO_MATCHES_MESSAGE: &str = "No se encontraron aulas que coincidan con los filtros";

fn status_label(room: &Room) -> &'static str {
    if room.is_available {
        AVAILABLE_LABEL
    } else {
        OCCUPIED_LABEL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleCard {
    pub name: &'static str,
    pub slug: &'static str,
    pub kind: ModuleKind,
}

pub fn module_cards() -> Vec<ModuleCard> {
    BuildingModule::ALL
        .into_iter()
        .map(|module| ModuleCard {
            name: module.name(),
            slug: module.slug(),
            kind: module.kind(),
        })
        .collect()
}

/// Header of the module screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleOverview {
    pub module: BuildingModule,
    pub view_mode: ViewMode,
    pub available_count: usize,
    pub occupied_count: usize,
}

impl ModuleOverview {
    pub fn from_session(session: &Session) -> RoomResult<Self> {
        let Screen::Module { module, view_mode } = session.screen() else {
            return Err(RoomError::Conflict("No module selected".to_string()));
        };
        let (available_count, occupied_count) = session.counts()?;
        Ok(Self {
            module,
            view_mode,
            available_count,
            occupied_count,
        })
    }
}

/// One square of the grid view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTile {
    pub id: String,
    pub code: String,
    pub is_available: bool,
}

pub fn grid_tiles(rooms: &[Room]) -> Vec<RoomTile> {
    rooms
        .iter()
        .map(|room| RoomTile {
            id: room.id.clone(),
            code: room.code.clone(),
            is_available: room.is_available,
        })
        .collect()
}

/// First slot of a schedule plus a count of the others, e.g. `Lunes 08:00-10:00 +2`.
pub fn schedule_summary(schedule: &[ScheduleSlot]) -> String {
    let Some(first) = schedule.first() else {
        return EMPTY_CELL.to_string();
    };
    let mut summary = format!("{} {}-{}", first.day, first.start_time, first.end_time);
    if schedule.len() > 1 {
        summary.push_str(&format!(" +{}", schedule.len() - 1));
    }
    summary
}

/// One line of the list view table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRow {
    pub id: String,
    pub code: String,
    pub status: &'static str,
    pub class_name: String,
    pub professor: String,
    pub coordinator: String,
    pub schedule: String,
}

impl From<&Room> for RoomRow {
    fn from(room: &Room) -> Self {
        let or_dash = |value: &str| {
            if value.is_empty() {
                EMPTY_CELL.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            id: room.id.clone(),
            code: room.code.clone(),
            status: status_label(room),
            class_name: or_dash(room.class_name.as_deref().unwrap_or_default()),
            professor: or_dash(room.professor.as_deref().unwrap_or_default()),
            coordinator: or_dash(&room.coordinator),
            schedule: schedule_summary(&room.schedule),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomListView {
    pub rows: Vec<RoomRow>,
    /// Options of the coordinator select, taken from the unfiltered rooms.
    pub coordinators: Vec<String>,
    pub empty_message: Option<&'static str>,
}

impl RoomListView {
    pub fn build(rooms: &[Room], filter: &RoomFilter) -> Self {
        let rows: Vec<RoomRow> = filter_rooms(rooms, filter)
            .into_iter()
            .map(RoomRow::from)
            .collect();
        let empty_message = rows.is_empty().then_some(NO_MATCHES_MESSAGE);

        Self {
            rows,
            coordinators: coordinator_options(rooms),
            empty_message,
        }
    }
}

/// Content of the room detail overlay.
///
/// Exactly one of `can_add_class` and `can_remove_class` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailView {
    pub room: Room,
    pub status: &'static str,
    pub can_add_class: bool,
    pub can_remove_class: bool,
}

impl From<&Room> for RoomDetailView {
    fn from(room: &Room) -> Self {
        Self {
            room: room.clone(),
            status: status_label(room),
            can_add_class: room.is_available,
            can_remove_class: !room.is_available,
        }
    }
}

/// Content of the add-class overlay. `is_valid` drives the submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    pub room_code: String,
    pub draft: ClassDraft,
    pub is_valid: bool,
}

impl DraftView {
    pub fn from_session(session: &Session) -> Self {
        let draft = session.draft();
        Self {
            room_code: session
                .draft_room()
                .map(|room| room.code.clone())
                .unwrap_or_default(),
            draft: draft.clone(),
            is_valid: draft.is_valid(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(flatten)]
    pub screen: Screen,
    pub selected_room: Option<String>,
    pub detail_open: bool,
    pub add_class_open: bool,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        Self {
            screen: session.screen(),
            selected_room: session.selected_room().map(|room| room.id.clone()),
            detail_open: session.detail_open(),
            add_class_open: session.add_class_open(),
        }
    }
}
