//! Route definitions for the Placeholder API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

mod albums;
mod auth;
mod comments;
pub mod extract;
mod health;
mod photos;
mod posts;
mod system;
mod todos;
mod users;


pub use albums::album_routes;
pub use auth::auth_routes;
pub use comments::comment_routes;
pub use photos::photo_routes;
pub use posts::post_routes;
pub use todos::todo_routes;
pub use users::user_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().server.request_timeout_secs);
    let cors = cors_layer(&state.config().server.cors_origin);

    Router::new()
        .route("/", get(system::welcome))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(system::metrics))
        .nest("/api", api_routes())
        .fallback(system::not_found)
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(system::api_index))
        .route("/health", get(health::api_health))
        .nest("/auth", auth::auth_routes())
        .nest("/users", users::user_routes())
        .nest("/posts", posts::post_routes())
        .nest("/comments", comments::comment_routes())
        .nest("/albums", albums::album_routes())
        .nest("/photos", photos::photo_routes())
        .nest("/todos", todos::todo_routes())
}

/// CORS for the configured origin
///
/// `*` allows any origin without credentials; a concrete origin also
/// allows credentials.
fn cors_layer(origin: &str) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origin == "*" {
        return base.allow_origin(Any);
    }

    match HeaderValue::from_str(origin) {
        Ok(value) => base.allow_origin(value).allow_credentials(true),
        Err(_) => {
            warn!(origin, "Invalid CORS origin, allowing any origin");
            base.allow_origin(Any)
        }
    }
}
