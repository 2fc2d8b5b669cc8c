use axum::{
    routing::{patch, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/sessions/:id/draft",
            post(handlers::draft::open_draft)
                .get(handlers::draft::get_draft)
                .patch(handlers::draft::update_field)
                .delete(handlers::draft::close_draft),
        )
        .route("/api/sessions/:id/draft/slots", post(handlers::draft::add_slot))
        .route(
            "/api/sessions/:id/draft/slots/:index",
            patch(handlers::draft::update_slot).delete(handlers::draft::remove_slot),
        )
        .route(
            "/api/sessions/:id/draft/submit",
            post(handlers::draft::submit_draft),
        )
}
