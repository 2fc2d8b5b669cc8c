//! # RoomSync Core
//!
//! Domain model and rules for managing classroom availability.
//!
//! - **models**: rooms, schedule slots and building modules
//! - **generator**: the empty room set of a module
//! - **assignment**: assigning a class to a room and removing it
//! - **filter**: the list view filter
//! - **form**: the add-class draft and its validity check
//! - **session**: per-session state, screens and overlays
//! - **view**: serializable view models built from a session

pub mod assignment;
pub mod errors;
pub mod filter;
pub mod form;
pub mod generator;
pub mod models;
pub mod session;
pub mod view;
