//! Todo routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::extract::{ResourceId, ValidatedJson, ValidatedQuery};
use crate::services::TodoService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use placeholder_api_shared::{ApiResponse, CreateTodoRequest, Todo, UpdateTodoRequest, UserFilter};

/// Create todo routes
pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/:id", get(get_todo).put(update_todo).delete(delete_todo))
        .route("/:id/toggle", patch(toggle_todo))
}

/// GET /api/todos[?userId=]
async fn list_todos(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<UserFilter>,
) -> ApiResult<Json<ApiResponse<Vec<Todo>>>> {
    let todos = TodoService::list(&state.db, filter.user_id).await?;
    Ok(Json(ApiResponse::data(todos)))
}

/// GET /api/todos/:id
async fn get_todo(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<Todo>>> {
    let todo = TodoService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::data(todo)))
}

/// POST /api/todos
async fn create_todo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateTodoRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Todo>>)> {
    let todo = TodoService::create(&state.db, &auth_user, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Todo created successfully", todo)),
    ))
}

/// PUT /api/todos/:id
async fn update_todo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(req): ValidatedJson<UpdateTodoRequest>,
) -> ApiResult<Json<ApiResponse<Todo>>> {
    let todo = TodoService::update(&state.db, &auth_user, id, req).await?;
    Ok(Json(ApiResponse::with_message("Todo updated successfully", todo)))
}

/// PATCH /api/todos/:id/toggle
async fn toggle_todo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<Todo>>> {
    let todo = TodoService::toggle(&state.db, &auth_user, id).await?;
    Ok(Json(ApiResponse::with_message("Todo status updated successfully", todo)))
}

/// DELETE /api/todos/:id
async fn delete_todo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<()>>> {
    TodoService::delete(&state.db, &auth_user, id).await?;
    Ok(Json(ApiResponse::message("Todo deleted successfully")))
}
