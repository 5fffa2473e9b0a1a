//! Post routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::extract::{ResourceId, ValidatedJson, ValidatedQuery};
use crate::services::PostService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use placeholder_api_shared::{
    ApiResponse, Comment, CreatePostRequest, Post, UpdatePostRequest, UserFilter,
};

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/:id", get(get_post).put(update_post).delete(delete_post))
        .route("/:id/comments", get(list_post_comments))
}

/// GET /api/posts[?userId=]
async fn list_posts(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<UserFilter>,
) -> ApiResult<Json<ApiResponse<Vec<Post>>>> {
    let posts = PostService::list(&state.db, filter.user_id).await?;
    Ok(Json(ApiResponse::data(posts)))
}

/// GET /api/posts/:id
async fn get_post(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<Post>>> {
    let post = PostService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::data(post)))
}

/// GET /api/posts/:id/comments
async fn list_post_comments(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<Vec<Comment>>>> {
    let comments = PostService::comments(&state.db, id).await?;
    Ok(Json(ApiResponse::data(comments)))
}

/// POST /api/posts
async fn create_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Post>>)> {
    let post = PostService::create(&state.db, &auth_user, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Post created successfully", post)),
    ))
}

/// PUT /api/posts/:id
async fn update_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(req): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<ApiResponse<Post>>> {
    let post = PostService::update(&state.db, &auth_user, id, req).await?;
    Ok(Json(ApiResponse::with_message("Post updated successfully", post)))
}

/// DELETE /api/posts/:id
async fn delete_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<()>>> {
    PostService::delete(&state.db, &auth_user, id).await?;
    Ok(Json(ApiResponse::message("Post deleted successfully")))
}
