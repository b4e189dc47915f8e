//! # TutorHub API
//!
//! The web server for the TutorHub tutoring marketplace. It exposes endpoints
//! for searching class offerings by subject, weekday and time, and for
//! registering tutors together with their weekly availability.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into validated domain values and call storage
//! - **Middleware**: Error to HTTP response mapping
//! - **Config**: Environment-driven application configuration
//!
//! Storage is reached through the [`ClassStore`] trait from `tutorhub_db`.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::{HeaderValue, StatusCode},
    BoxError, Json, Router,
};
use eyre::Result;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use tutorhub_db::store::ClassStore;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```no_run
/// # async fn example(pool: tutorhub_db::DbPool) {
/// use std::sync::Arc;
/// use tutorhub_api::ApiState;
/// use tutorhub_db::store::PgClassStore;
///
/// let state = Arc::new(ApiState {
///     classes: Arc::new(PgClassStore::new(pool)),
/// });
/// let app = tutorhub_api::build_router(state);
/// # }
/// ```
pub struct ApiState {
    /// Storage for class offerings, tutors and schedules
    pub classes: Arc<dyn ClassStore>,
}

/// Builds the application router with all routes attached to `state`
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Class search and tutor registration
        .merge(routes::classes::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Installs the global `tracing` subscriber at `level`
///
/// Call once, before anything logs; a second call returns an error.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Starts the API server with the provided configuration and storage
///
/// Applies CORS and timeout layers, binds the listener and serves until the
/// process is stopped. Logging is expected to be set up via [`init_tracing`].
pub async fn start_server(config: config::ApiConfig, classes: Arc<dyn ClassStore>) -> Result<()> {
    let state = Arc::new(ApiState { classes });
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        app.layer(cors_layer(origins))
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout_error))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(origins)
}

async fn handle_timeout_error(err: BoxError) -> (StatusCode, Json<Value>) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(json!({ "error": "Request timed out" })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
    }
}
