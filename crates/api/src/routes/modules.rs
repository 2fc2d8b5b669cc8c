use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/modules", get(handlers::modules::list_modules))
        .route(
            "/api/sessions/:id/module",
            put(handlers::modules::select_module).delete(handlers::modules::leave_module),
        )
        .route("/api/sessions/:id/view", put(handlers::modules::set_view_mode))
        .route("/api/sessions/:id/overview", get(handlers::modules::get_overview))
}
