//! User management routes

use crate::auth::{AdminUser, AuthUser};
use crate::error::ApiResult;
use crate::routes::extract::{ResourceId, ValidatedJson};
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use placeholder_api_shared::{ApiResponse, CreateUserRequest, UpdateUserRequest, User};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// GET /api/users
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<User>>>> {
    let users = UserService::list(&state.db).await?;
    Ok(Json(ApiResponse::data(users)))
}

/// GET /api/users/:id
async fn get_user(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<User>>> {
    let user = UserService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::data(user)))
}

/// Create a user with any role (admin only)
///
/// POST /api/users
async fn create_user(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<User>>)> {
    let role = req.role.unwrap_or_default();
    let user = UserService::create(&state.db, state.passwords(), req.user, role).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("User created successfully", user)),
    ))
}

/// Update a user (self or admin)
///
/// PUT /api/users/:id
async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let user = UserService::update(&state.db, state.passwords(), &auth_user, id, req).await?;
    Ok(Json(ApiResponse::with_message("User updated successfully", user)))
}

/// Delete a user (admin, never self)
///
/// DELETE /api/users/:id
async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<()>>> {
    UserService::delete(&state.db, &auth_user, id).await?;
    Ok(Json(ApiResponse::message("User deleted successfully")))
}
