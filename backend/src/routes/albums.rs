//! Album routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::extract::{ResourceId, ValidatedJson, ValidatedQuery};
use crate::services::AlbumService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use placeholder_api_shared::{
    Album, ApiResponse, CreateAlbumRequest, Photo, UpdateAlbumRequest, UserFilter,
};

/// Create album routes
pub fn album_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_albums).post(create_album))
        .route("/:id", get(get_album).put(update_album).delete(delete_album))
        .route("/:id/photos", get(list_album_photos))
}

/// GET /api/albums[?userId=]
async fn list_albums(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<UserFilter>,
) -> ApiResult<Json<ApiResponse<Vec<Album>>>> {
    let albums = AlbumService::list(&state.db, filter.user_id).await?;
    Ok(Json(ApiResponse::data(albums)))
}

/// GET /api/albums/:id
async fn get_album(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<Album>>> {
    let album = AlbumService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::data(album)))
}

/// GET /api/albums/:id/photos
async fn list_album_photos(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<Vec<Photo>>>> {
    let photos = AlbumService::photos(&state.db, id).await?;
    Ok(Json(ApiResponse::data(photos)))
}

/// POST /api/albums
async fn create_album(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateAlbumRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Album>>)> {
    let album = AlbumService::create(&state.db, &auth_user, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Album created successfully", album)),
    ))
}

/// PUT /api/albums/:id
async fn update_album(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(req): ValidatedJson<UpdateAlbumRequest>,
) -> ApiResult<Json<ApiResponse<Album>>> {
    let album = AlbumService::update(&state.db, &auth_user, id, req).await?;
    Ok(Json(ApiResponse::with_message("Album updated successfully", album)))
}

/// DELETE /api/albums/:id
async fn delete_album(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<()>>> {
    AlbumService::delete(&state.db, &auth_user, id).await?;
    Ok(Json(ApiResponse::message("Album deleted successfully")))
}
