//! # Room Handlers
//!
//! Grid tiles, the filterable room list and the room detail overlay of the
//! current module. Removing a class happens from the detail overlay, so the
//! removal endpoint acts on the room currently shown there.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use roomsync_core::{
    filter::{RoomFilter, StatusFilter},
    view::{grid_tiles, RoomDetailView, RoomListView, RoomTile},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters of the room list
///
/// # Fields
///
/// * `status` - `all`, `available` or `occupied` (default: `all`)
/// * `coordinator` - Exact coordinator name, or `todos` for everyone
/// * `start` - Start of the time range, `HH:MM`
/// * `end` - End of the time range, `HH:MM`
///
/// The time range only applies when both `start` and `end` are given.
#[derive(Debug, Default, Deserialize)]
pub struct RoomListQuery {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub coordinator: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl From<RoomListQuery> for RoomFilter {
    fn from(query: RoomListQuery) -> Self {
        RoomFilter {
            status: query.status,
            coordinator: query.coordinator,
            range_start: query.start,
            range_end: query.end,
        }
    }
}

/// Confirmation shown to the user after a change
#[derive(Debug, Clone, Serialize)]
pub struct NoticeResponse {
    pub message: String,
}

#[axum::debug_handler]
pub async fn get_grid(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<RoomTile>>, AppError> {
    let tiles = state
        .sessions
        .read(id, |entry| Ok(grid_tiles(entry.session.rooms()?)))
        .await?;

    Ok(Json(tiles))
}

#[axum::debug_handler]
pub async fn list_rooms(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<RoomListQuery>,
) -> Result<Json<RoomListView>, AppError> {
    let filter = RoomFilter::from(query);
    debug!("Session {} listing rooms with {:?}", id, filter);

    let view = state
        .sessions
        .read(id, |entry| {
            Ok(RoomListView::build(entry.session.rooms()?, &filter))
        })
        .await?;

    Ok(Json(view))
}

/// Selects a room and opens its detail overlay
///
/// # Errors
///
/// * `RoomError::NotFound` - Unknown session, or no such room in the current module
/// * `RoomError::Conflict` - No module selected
#[axum::debug_handler]
pub async fn open_room(
    State(state): State<Arc<ApiState>>,
    Path((id, room_id)): Path<(Uuid, String)>,
) -> Result<Json<RoomDetailView>, AppError> {
    let detail = state
        .sessions
        .write(id, |session| {
            let room = session.open_room(&room_id)?;
            Ok(RoomDetailView::from(room))
        })
        .await?;

    Ok(Json(detail))
}

#[axum::debug_handler]
pub async fn close_detail(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .write(id, |session| {
            session.close_detail();
            Ok(())
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Removes the class of the room shown in the detail overlay
///
/// # Errors
///
/// * `RoomError::Conflict` - No room selected, or the room has no class
#[axum::debug_handler]
pub async fn remove_class(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<NoticeResponse>, AppError> {
    let message = state
        .sessions
        .write(id, |session| session.remove_selected_class())
        .await?;

    info!("Session {}: {}", id, message);
    Ok(Json(NoticeResponse { message }))
}
