//! # Add-Class Form Handlers
//!
//! The form lives in the session while its overlay is open. Every edit
//! answers with the whole draft and a fresh `isValid`, which the front-end
//! uses to enable or disable the submit button.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use roomsync_core::{
    errors::RoomError,
    form::{DraftField, SlotField},
    view::DraftView,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{handlers::rooms::NoticeResponse, middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct UpdateFieldRequest {
    pub field: DraftField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSlotRequest {
    pub field: SlotField,
    pub value: String,
}

/// Opens the form for the selected room
///
/// # Errors
///
/// * `RoomError::Conflict` - No room selected, or the room already has a class
#[axum::debug_handler]
pub async fn open_draft(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<DraftView>), AppError> {
    let view = state
        .sessions
        .write(id, |session| {
            session.open_add_class()?;
            Ok(DraftView::from_session(session))
        })
        .await?;

    debug!("Session {} opened the add-class form for {}", id, view.room_code);
    Ok((StatusCode::CREATED, Json(view)))
}

#[axum::debug_handler]
pub async fn get_draft(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DraftView>, AppError> {
    let view = state
        .sessions
        .read(id, |entry| {
            if !entry.session.add_class_open() {
                return Err(RoomError::Conflict(
                    "The add-class form is not open".to_string(),
                ));
            }
            Ok(DraftView::from_session(&entry.session))
        })
        .await?;

    Ok(Json(view))
}

#[axum::debug_handler]
pub async fn update_field(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFieldRequest>,
) -> Result<Json<DraftView>, AppError> {
    let view = state
        .sessions
        .write(id, |session| {
            session.draft_mut()?.set_field(payload.field, payload.value);
            Ok(DraftView::from_session(session))
        })
        .await?;

    Ok(Json(view))
}

#[axum::debug_handler]
pub async fn add_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DraftView>, AppError> {
    let view = state
        .sessions
        .write(id, |session| {
            session.draft_mut()?.add_slot();
            Ok(DraftView::from_session(session))
        })
        .await?;

    Ok(Json(view))
}

/// Changes one field of one schedule slot
///
/// # Errors
///
/// * `RoomError::Validation` - No slot at `index`, or an unknown day label
#[axum::debug_handler]
pub async fn update_slot(
    State(state): State<Arc<ApiState>>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(payload): Json<UpdateSlotRequest>,
) -> Result<Json<DraftView>, AppError> {
    let view = state
        .sessions
        .write(id, |session| {
            session
                .draft_mut()?
                .update_slot(index, payload.field, payload.value)?;
            Ok(DraftView::from_session(session))
        })
        .await?;

    Ok(Json(view))
}

/// Removes a schedule slot; the last remaining slot is kept
///
/// # Errors
///
/// * `RoomError::Validation` - No slot at `index`
#[axum::debug_handler]
pub async fn remove_slot(
    State(state): State<Arc<ApiState>>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<DraftView>, AppError> {
    let view = state
        .sessions
        .write(id, |session| {
            let draft = session.draft_mut()?;
            if index >= draft.schedule.len() {
                return Err(RoomError::Validation(format!(
                    "No schedule slot at index {}",
                    index
                )));
            }
            draft.remove_slot(index);
            Ok(DraftView::from_session(session))
        })
        .await?;

    Ok(Json(view))
}

/// Assigns the drafted class to the selected room and closes the form
///
/// # Errors
///
/// * `RoomError::Validation` - The draft is incomplete or a slot ends before it starts
/// * `RoomError::Conflict` - The form is not open
#[axum::debug_handler]
pub async fn submit_draft(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<NoticeResponse>, AppError> {
    let message = state
        .sessions
        .write(id, |session| session.submit_class())
        .await?;

    info!("Session {}: {}", id, message);
    Ok(Json(NoticeResponse { message }))
}

#[axum::debug_handler]
pub async fn close_draft(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .write(id, |session| {
            session.close_add_class();
            Ok(())
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
