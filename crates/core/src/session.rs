//! # Session Controller
//!
//! A [`Session`] is everything one browser session sees: the rooms of every
//! module visited so far, the current screen and the two overlays (room
//! detail and add-class form).
//!
//! ## Screens
//!
//! ```text
//! Home --select_module--> Module { module, view_mode }
//!  ^                          |   ^
//!  +----------back------------+   +-- set_view_mode
//! ```
//!
//! The overlays are flags next to the screen. Opening or closing them never
//! changes the screen. Going back to `Home` closes both and drops the room
//! selection.
//!
//! Room sets are generated the first time a module is selected and then kept
//! for the life of the session, so edits survive navigating away and back.
//! Room contents only change through [`assign_class`] and [`remove_class`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    assignment::{assign_class, remove_class},
    errors::{RoomError, RoomResult},
    form::ClassDraft,
    generator::generate_rooms,
    models::{BuildingModule, Room},
};

pub const CLASS_REMOVED_NOTICE: &str = "Clase removida exitosamente";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Map,
    List,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Module {
        module: BuildingModule,
        #[serde(rename = "viewMode")]
        view_mode: ViewMode,
    },
}

/// Room sets keyed by module, generated on first access.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<BuildingModule, Vec<Room>>,
}

impl RoomRegistry {
    pub fn rooms(&mut self, module: BuildingModule) -> &[Room] {
        self.rooms
            .entry(module)
            .or_insert_with(|| generate_rooms(module))
    }

    /// Rooms of `module` if it has been generated already.
    pub fn peek(&self, module: BuildingModule) -> Option<&[Room]> {
        self.rooms.get(&module).map(Vec::as_slice)
    }

    pub fn is_generated(&self, module: BuildingModule) -> bool {
        self.rooms.contains_key(&module)
    }

    fn apply(&mut self, module: BuildingModule, change: impl FnOnce(Vec<Room>) -> Vec<Room>) {
        let rooms = self
            .rooms
            .remove(&module)
            .unwrap_or_else(|| generate_rooms(module));
        self.rooms.insert(module, change(rooms));
    }
}

#[derive(Debug, Default)]
pub struct Session {
    registry: RoomRegistry,
    screen: Screen,
    view_mode: ViewMode,
    selected_room: Option<String>,
    detail_open: bool,
    add_class_open: bool,
    draft: ClassDraft,
    /// Room the open form was started for; the selection may move on.
    draft_room: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    pub fn current_module(&self) -> Option<BuildingModule> {
        match self.screen {
            Screen::Home => None,
            Screen::Module { module, .. } => Some(module),
        }
    }

    /// Enters `module`, keeping the last used view mode.
    pub fn select_module(&mut self, module: BuildingModule) -> &[Room] {
        self.reset_overlays();
        self.screen = Screen::Module {
            module,
            view_mode: self.view_mode,
        };
        self.registry.rooms(module)
    }

    pub fn back(&mut self) {
        self.reset_overlays();
        self.screen = Screen::Home;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) -> RoomResult<()> {
        let module = self.require_module()?;
        self.view_mode = view_mode;
        self.screen = Screen::Module { module, view_mode };
        Ok(())
    }

    pub fn rooms(&self) -> RoomResult<&[Room]> {
        let module = self.require_module()?;
        Ok(self.registry.peek(module).unwrap_or_default())
    }

    pub fn room(&self, room_id: &str) -> RoomResult<&Room> {
        self.rooms()?
            .iter()
            .find(|room| room.id == room_id)
            .ok_or_else(|| RoomError::NotFound(format!("Room with ID {} not found", room_id)))
    }

    /// Available and occupied counts for the current module.
    pub fn counts(&self) -> RoomResult<(usize, usize)> {
        let rooms = self.rooms()?;
        let available = rooms.iter().filter(|room| room.is_available).count();
        Ok((available, rooms.len() - available))
    }

    pub fn selected_room(&self) -> Option<&Room> {
        let id = self.selected_room.as_deref()?;
        self.room(id).ok()
    }

    pub fn detail_open(&self) -> bool {
        self.detail_open
    }

    pub fn add_class_open(&self) -> bool {
        self.add_class_open
    }

    pub fn draft(&self) -> &ClassDraft {
        &self.draft
    }

    /// The room the open add-class form will assign to.
    pub fn draft_room(&self) -> Option<&Room> {
        let id = self.draft_room.as_deref()?;
        self.room(id).ok()
    }

    /// Selects a room of the current module and shows its details.
    pub fn open_room(&mut self, room_id: &str) -> RoomResult<&Room> {
        let id = self.room(room_id)?.id.clone();
        self.selected_room = Some(id);
        self.detail_open = true;
        self.room(room_id)
    }

    pub fn close_detail(&mut self) {
        self.detail_open = false;
    }

    /// Swaps the detail overlay for an empty add-class form.
    pub fn open_add_class(&mut self) -> RoomResult<&ClassDraft> {
        let room = self.require_selected()?;
        if !room.is_available {
            return Err(RoomError::Conflict(format!(
                "Room {} already has a class assigned",
                room.code
            )));
        }
        let room_id = room.id.clone();
        self.detail_open = false;
        self.add_class_open = true;
        self.draft = ClassDraft::default();
        self.draft_room = Some(room_id);
        Ok(&self.draft)
    }

    pub fn close_add_class(&mut self) {
        self.add_class_open = false;
        self.draft = ClassDraft::default();
        self.draft_room = None;
    }

    /// The open form, for field edits.
    pub fn draft_mut(&mut self) -> RoomResult<&mut ClassDraft> {
        if !self.add_class_open {
            return Err(RoomError::Conflict("The add-class form is not open".to_string()));
        }
        Ok(&mut self.draft)
    }

    /// Assigns the drafted class to the room the form was opened for and
    /// closes the form.
    ///
    /// Returns the confirmation notice. An invalid draft, or a target room
    /// that is no longer available, leaves everything as it was.
    pub fn submit_class(&mut self) -> RoomResult<String> {
        if !self.add_class_open {
            return Err(RoomError::Conflict("The add-class form is not open".to_string()));
        }
        let module = self.require_module()?;
        let room = self
            .draft_room()
            .ok_or_else(|| RoomError::Conflict("The add-class form has no room".to_string()))?;
        if !room.is_available {
            return Err(RoomError::Conflict(format!(
                "Room {} already has a class assigned",
                room.code
            )));
        }
        let (room_id, code) = (room.id.clone(), room.code.clone());
        let payload = self.draft.to_payload()?;

        self.registry
            .apply(module, |rooms| assign_class(rooms, &room_id, &payload));
        self.close_add_class();

        Ok(format!(
            "Clase \"{}\" agregada exitosamente al aula {}",
            payload.class_name, code
        ))
    }

    /// Frees the selected room and closes the detail overlay.
    pub fn remove_selected_class(&mut self) -> RoomResult<String> {
        let module = self.require_module()?;
        let room = self.require_selected()?;
        if room.is_available {
            return Err(RoomError::Conflict(format!(
                "Room {} has no class assigned",
                room.code
            )));
        }
        let room_id = room.id.clone();

        self.registry
            .apply(module, |rooms| remove_class(rooms, &room_id));
        self.detail_open = false;

        Ok(CLASS_REMOVED_NOTICE.to_string())
    }

    fn require_module(&self) -> RoomResult<BuildingModule> {
        self.current_module()
            .ok_or_else(|| RoomError::Conflict("No module selected".to_string()))
    }

    fn require_selected(&self) -> RoomResult<&Room> {
        self.selected_room()
            .ok_or_else(|| RoomError::Conflict("No room selected".to_string()))
    }

    fn reset_overlays(&mut self) {
        self.selected_room = None;
        self.detail_open = false;
        self.close_add_class();
    }
}
