//! Liveness and readiness checks
//!
//! `/health` and `/health/live` answer without touching the database;
//! `/health/ready` pings PostgreSQL and reports pool occupancy, returning
//! 503 while the database is unreachable. `/api/health` wraps the API
//! status in the usual response envelope.

use crate::{
    db::{self, PoolStats},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use placeholder_api_shared::ApiResponse;
use serde::Serialize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health endpoint body
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseHealth>,
}

impl HealthStatus {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: VERSION,
            database: None,
        }
    }
}

/// Database section of the readiness body
#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    pub pool: PoolStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// API status payload
#[derive(Debug, Serialize)]
pub struct ApiStatus {
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::new("healthy"))
}

/// GET /health/live
pub async fn liveness_check() -> Json<HealthStatus> {
    Json(HealthStatus::new("alive"))
}

/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let error = db::ping(state.db()).await.err().map(|e| e.to_string());
    readiness(error, db::pool_stats(state.db()))
}

fn readiness(error: Option<String>, pool: PoolStats) -> (StatusCode, Json<HealthStatus>) {
    let reachable = error.is_none();
    let (status, label) = if reachable {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    let health = HealthStatus {
        database: Some(DatabaseHealth {
            reachable,
            pool,
            error,
        }),
        ..HealthStatus::new(label)
    };
    (status, Json(health))
}

/// GET /api/health
pub async fn api_health() -> Json<ApiResponse<ApiStatus>> {
    Json(ApiResponse::with_message(
        "API is running",
        ApiStatus {
            timestamp: Utc::now(),
            version: VERSION,
        },
    ))
}
