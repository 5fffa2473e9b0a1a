//! Welcome document, endpoint index, metrics exposition and the
//! unknown-route fallback

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{OriginalUri, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

/// GET /
pub async fn welcome() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Placeholder API",
        "version": env!("CARGO_PKG_VERSION"),
        "documentation": "/api",
        "health": "/health",
        "timestamp": Utc::now(),
    }))
}

/// GET /api
pub async fn api_index() -> Json<Value> {
    Json(json!({
        "message": "JSONPlaceholder-like CRUD API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": {
                "POST /auth/register": "Register a new user",
                "POST /auth/login": "Login user",
                "GET /auth/profile": "Get user profile (authenticated)",
                "PUT /auth/profile": "Update user profile (authenticated)",
            },
            "users": {
                "GET /users": "Get all users",
                "GET /users/:id": "Get user by ID",
                "POST /users": "Create user (admin only)",
                "PUT /users/:id": "Update user (admin or owner)",
                "DELETE /users/:id": "Delete user (admin only)",
            },
            "posts": {
                "GET /posts": "Get all posts",
                "GET /posts/:id": "Get post by ID",
                "GET /posts/:id/comments": "Get comments for a post",
                "POST /posts": "Create post (authenticated)",
                "PUT /posts/:id": "Update post (owner or admin)",
                "DELETE /posts/:id": "Delete post (owner or admin)",
            },
            "comments": {
                "GET /comments": "Get all comments",
                "GET /comments/:id": "Get comment by ID",
                "POST /comments": "Create comment",
                "PUT /comments/:id": "Update comment (admin only)",
                "DELETE /comments/:id": "Delete comment (admin only)",
            },
            "albums": {
                "GET /albums": "Get all albums",
                "GET /albums/:id": "Get album by ID",
                "GET /albums/:id/photos": "Get photos for an album",
                "POST /albums": "Create album (authenticated)",
                "PUT /albums/:id": "Update album (owner or admin)",
                "DELETE /albums/:id": "Delete album (owner or admin)",
            },
            "photos": {
                "GET /photos": "Get all photos",
                "GET /photos/:id": "Get photo by ID",
                "POST /photos": "Create photo (authenticated)",
                "PUT /photos/:id": "Update photo (album owner or admin)",
                "DELETE /photos/:id": "Delete photo (album owner or admin)",
            },
            "todos": {
                "GET /todos": "Get all todos",
                "GET /todos/:id": "Get todo by ID",
                "POST /todos": "Create todo (authenticated)",
                "PUT /todos/:id": "Update todo (owner or admin)",
                "PATCH /todos/:id/toggle": "Toggle todo completion (owner or admin)",
                "DELETE /todos/:id": "Delete todo (owner or admin)",
            },
        },
        "authentication": {
            "type": "Bearer Token (JWT)",
            "header": "Authorization: Bearer <token>",
            "note": "Include JWT token in Authorization header for protected routes",
        },
    }))
}

/// GET /metrics
///
/// 404 when the binary did not install a Prometheus recorder.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => ApiError::NotFound("Metrics are not enabled".to_string()).into_response(),
    }
}

/// Fallback for unknown routes
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("Route {} {} not found", method, uri.path()))
}
