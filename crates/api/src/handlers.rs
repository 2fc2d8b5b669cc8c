pub mod draft;
pub mod modules;
pub mod rooms;
pub mod sessions;
