pub mod draft;
pub mod health;
pub mod modules;
pub mod rooms;
pub mod sessions;
