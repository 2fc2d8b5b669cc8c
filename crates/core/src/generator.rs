//! Initial room sets for each module.

use crate::models::{BuildingModule, Room};

pub fn room_count(module: BuildingModule) -> usize {
    match module {
        BuildingModule::Laboratorios => 12,
        _ => 20,
    }
}

/// Builds the empty room set for `module`.
///
/// Ids are `"<module name>-<n>"` and codes are the first letter of the module
/// name followed by the two-digit room number, so every `Módulo *` module
/// produces the same `M01`.. codes. Ids stay unique per module.
pub fn generate_rooms(module: BuildingModule) -> Vec<Room> {
    let name = module.name();
    let initial: String = name.chars().take(1).collect();

    (1..=room_count(module))
        .map(|n| Room::vacant(format!("{}-{}", name, n), format!("{}{:02}", initial, n)))
        .collect()
}
