//! # RoomSync API
//!
//! The API crate serves the classroom manager to the browser. Each browser
//! session gets its own in-memory room state; the endpoints expose the module
//! picker, the grid and list views, the room detail panel and the add-class
//! form as JSON view models.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into session operations
//! - **Middleware**: Error mapping
//! - **Store**: In-memory sessions keyed by id
//! - **Config**: Handle environment and application configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers that drive a session
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// In-memory session storage
pub mod store;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::store::SessionStore;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Open browser sessions
    pub sessions: SessionStore,
}

impl ApiState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: SessionStore::new(max_sessions),
        }
    }
}

/// Builds the router with every endpoint and the given state attached.
///
/// No transport layers are applied here; [`start_server`] adds them.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Module picker and screen navigation
        .merge(routes::modules::routes())
        // Session lifecycle
        .merge(routes::sessions::routes())
        // Grid, list and detail views
        .merge(routes::rooms::routes())
        // Add-class form
        .merge(routes::draft::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration
///
/// Installs the log subscriber, builds the router, applies CORS, tracing and
/// timeout layers and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(config.max_sessions));
    let mut app = app(state);

    if let Some(dir) = &config.static_dir {
        info!("Serving static files from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }

    // Apply CORS configuration if origins are specified
    if let Some(origins) = &config.cors_origins {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(allowed)
            .allow_credentials(true);

        app = app.layer(cors);
    }

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
