use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/sessions/:id/grid", get(handlers::rooms::get_grid))
        .route("/api/sessions/:id/rooms", get(handlers::rooms::list_rooms))
        .route(
            "/api/sessions/:id/rooms/:room_id",
            post(handlers::rooms::open_room),
        )
        .route("/api/sessions/:id/detail", delete(handlers::rooms::close_detail))
        .route(
            "/api/sessions/:id/detail/class",
            delete(handlers::rooms::remove_class),
        )
}
