//! Authentication routes
//!
//! Registration, login and the caller's own profile.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::extract::ValidatedJson;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use placeholder_api_shared::{
    ApiResponse, AuthPayload, LoginRequest, RegisterRequest, UpdateUserRequest, User,
};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile", get(get_profile).put(update_profile))
}

/// Register a new user
///
/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<AuthPayload>>)> {
    let payload = UserService::register(&state.db, state.jwt(), state.passwords(), req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("User registered successfully", payload)),
    ))
}

/// Login with email and password
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<AuthPayload>>> {
    let payload = UserService::login(
        &state.db,
        state.jwt(),
        state.passwords(),
        &req.email,
        &req.password,
    )
    .await?;
    Ok(Json(ApiResponse::with_message("Login successful", payload)))
}

/// Get current user profile (requires authentication)
///
/// GET /api/auth/profile
async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<ApiResponse<User>>> {
    let user = UserService::get(&state.db, auth_user.id).await?;
    Ok(Json(ApiResponse::data(user)))
}

/// Update current user profile (requires authentication)
///
/// PUT /api/auth/profile
async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let user =
        UserService::update(&state.db, state.passwords(), &auth_user, auth_user.id, req).await?;
    Ok(Json(ApiResponse::with_message("Profile updated successfully", user)))
}
