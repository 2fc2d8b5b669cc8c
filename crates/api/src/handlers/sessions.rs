use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use roomsync_core::view::SessionSnapshot;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub snapshot: SessionSnapshot,
}

#[axum::debug_handler]
pub async fn create_session(
    State(state): State<Arc<ApiState>>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let (id, created_at) = state.sessions.create().await;
    info!("Opened session {}", id);

    let snapshot = state
        .sessions
        .read(id, |entry| Ok(SessionSnapshot::from(&entry.session)))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            id,
            created_at,
            snapshot,
        }),
    ))
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let response = state
        .sessions
        .read(id, |entry| {
            Ok(SessionResponse {
                id,
                created_at: entry.created_at,
                snapshot: SessionSnapshot::from(&entry.session),
            })
        })
        .await?;

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    info!("Closed session {}", id);
    Ok(StatusCode::NO_CONTENT)
}
