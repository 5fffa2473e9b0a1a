//! Comment routes
//!
//! Creating a comment is public; changing one is for administrators.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::extract::{ResourceId, ValidatedJson, ValidatedQuery};
use crate::services::CommentService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use placeholder_api_shared::{
    ApiResponse, Comment, CreateCommentRequest, PostFilter, UpdateCommentRequest,
};

/// Create comment routes
pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_comments).post(create_comment))
        .route(
            "/:id",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
}

/// GET /api/comments[?postId=]
async fn list_comments(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<PostFilter>,
) -> ApiResult<Json<ApiResponse<Vec<Comment>>>> {
    let comments = CommentService::list(&state.db, filter.post_id).await?;
    Ok(Json(ApiResponse::data(comments)))
}

/// GET /api/comments/:id
async fn get_comment(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<Comment>>> {
    let comment = CommentService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::data(comment)))
}

/// POST /api/comments
async fn create_comment(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Comment>>)> {
    let comment = CommentService::create(&state.db, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Comment created successfully", comment)),
    ))
}

/// PUT /api/comments/:id
async fn update_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(req): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<ApiResponse<Comment>>> {
    let comment = CommentService::update(&state.db, &auth_user, id, req).await?;
    Ok(Json(ApiResponse::with_message("Comment updated successfully", comment)))
}

/// DELETE /api/comments/:id
async fn delete_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<()>>> {
    CommentService::delete(&state.db, &auth_user, id).await?;
    Ok(Json(ApiResponse::message("Comment deleted successfully")))
}
