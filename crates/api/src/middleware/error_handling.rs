//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and a JSON body of the form
//! `{ "error": "<message>" }`, so every endpoint reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roomsync_core::errors::RoomError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// Handlers return `Result<_, AppError>` and use `?` on anything that yields
/// a [`RoomError`] or an `eyre::Report`.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use roomsync_api::middleware::error_handling::AppError;
/// use roomsync_core::{errors::RoomError, models::BuildingModule};
///
/// async fn handler(name: String) -> Result<Json<&'static str>, AppError> {
///     let module: BuildingModule = name.parse()?;
///     Ok(Json(module.slug()))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub RoomError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RoomError::NotFound(_) => StatusCode::NOT_FOUND,
            RoomError::Validation(_) => StatusCode::BAD_REQUEST,
            RoomError::Conflict(_) => StatusCode::CONFLICT,
            RoomError::Internal(report) => {
                error!("internal error: {:?}", report);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<RoomError> for AppError {
    fn from(err: RoomError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(RoomError::Internal(err))
    }
}

/// Maps a RoomError to an HTTP response
pub fn map_error(err: RoomError) -> Response {
    AppError(err).into_response()
}
