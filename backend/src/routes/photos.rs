//! Photo routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::extract::{ResourceId, ValidatedJson, ValidatedQuery};
use crate::services::PhotoService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use placeholder_api_shared::{
    AlbumFilter, ApiResponse, CreatePhotoRequest, Photo, UpdatePhotoRequest,
};

/// Create photo routes
pub fn photo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_photos).post(create_photo))
        .route("/:id", get(get_photo).put(update_photo).delete(delete_photo))
}

/// GET /api/photos[?albumId=]
async fn list_photos(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<AlbumFilter>,
) -> ApiResult<Json<ApiResponse<Vec<Photo>>>> {
    let photos = PhotoService::list(&state.db, filter.album_id).await?;
    Ok(Json(ApiResponse::data(photos)))
}

/// GET /api/photos/:id
async fn get_photo(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<Photo>>> {
    let photo = PhotoService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::data(photo)))
}

/// Add a photo to an existing album
///
/// POST /api/photos
async fn create_photo(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePhotoRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Photo>>)> {
    let photo = PhotoService::create(&state.db, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Photo created successfully", photo)),
    ))
}

/// PUT /api/photos/:id
async fn update_photo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
    ValidatedJson(req): ValidatedJson<UpdatePhotoRequest>,
) -> ApiResult<Json<ApiResponse<Photo>>> {
    let photo = PhotoService::update(&state.db, &auth_user, id, req).await?;
    Ok(Json(ApiResponse::with_message("Photo updated successfully", photo)))
}

/// DELETE /api/photos/:id
async fn delete_photo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<ApiResponse<()>>> {
    PhotoService::delete(&state.db, &auth_user, id).await?;
    Ok(Json(ApiResponse::message("Photo deleted successfully")))
}
