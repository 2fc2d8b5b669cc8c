//! # Module Handlers
//!
//! The home screen's module picker and navigation between screens: entering
//! a module, going back home and switching between the map and list views.

use axum::{
    extract::{Path, State},
    Json,
};
use roomsync_core::{
    models::BuildingModule,
    session::ViewMode,
    view::{module_cards, ModuleCard, ModuleOverview, SessionSnapshot},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Body of `PUT /api/sessions/:id/module`
///
/// `module` may be the display name (`"Módulo A"`) or the slug (`"modulo-a"`).
#[derive(Debug, Deserialize)]
pub struct SelectModuleRequest {
    pub module: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetViewModeRequest {
    pub view_mode: ViewMode,
}

pub async fn list_modules() -> Json<Vec<ModuleCard>> {
    Json(module_cards())
}

/// Enters a module, generating its rooms on the first visit
///
/// # Errors
///
/// * `RoomError::NotFound` - Unknown session
/// * `RoomError::Validation` - Unknown module name
#[axum::debug_handler]
pub async fn select_module(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SelectModuleRequest>,
) -> Result<Json<ModuleOverview>, AppError> {
    let module: BuildingModule = payload.module.parse()?;

    let overview = state
        .sessions
        .write(id, |session| {
            let first_visit = !session.registry().is_generated(module);
            session.select_module(module);
            if first_visit {
                info!("Session {} generated rooms for {}", id, module);
            }
            ModuleOverview::from_session(session)
        })
        .await?;

    Ok(Json(overview))
}

#[axum::debug_handler]
pub async fn leave_module(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let snapshot = state
        .sessions
        .write(id, |session| {
            session.back();
            Ok(SessionSnapshot::from(&*session))
        })
        .await?;

    debug!("Session {} returned home", id);
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn set_view_mode(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetViewModeRequest>,
) -> Result<Json<ModuleOverview>, AppError> {
    let overview = state
        .sessions
        .write(id, |session| {
            session.set_view_mode(payload.view_mode)?;
            ModuleOverview::from_session(session)
        })
        .await?;

    Ok(Json(overview))
}

#[axum::debug_handler]
pub async fn get_overview(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ModuleOverview>, AppError> {
    let overview = state
        .sessions
        .read(id, |entry| ModuleOverview::from_session(&entry.session))
        .await?;

    Ok(Json(overview))
}
