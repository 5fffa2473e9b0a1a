//! Photo service
//!
//! A photo's owner is the owner of the album that holds it.

use crate::auth::policy::{authorize, require_found, Action};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{AlbumRepository, CreatePhoto, PhotoRecord, PhotoRepository};
use placeholder_api_shared::{CreatePhotoRequest, Photo, UpdatePhotoRequest};
use sqlx::PgPool;

/// Photo service for business logic
pub struct PhotoService;

impl PhotoService {
    /// List photos, optionally for one album
    pub async fn list(pool: &PgPool, album_id: Option<i32>) -> Result<Vec<Photo>, ApiError> {
        let records = PhotoRepository::list(pool, album_id).await?;
        Ok(records.into_iter().map(PhotoRecord::into_photo).collect())
    }

    /// Get a photo with its album
    pub async fn get(pool: &PgPool, id: i32) -> Result<Photo, ApiError> {
        let record = require_found(PhotoRepository::find_by_id(pool, id).await?, "photo")?;
        Ok(record.into_photo())
    }

    /// Create a photo; the album must exist
    pub async fn create(pool: &PgPool, input: CreatePhotoRequest) -> Result<Photo, ApiError> {
        require_found(AlbumRepository::find_owner(pool, input.album_id).await?, "album")?;

        let id = PhotoRepository::create(
            pool,
            CreatePhoto {
                album_id: input.album_id,
                title: &input.title,
                url: &input.url,
                thumbnail_url: &input.thumbnail_url,
            },
        )
        .await?;

        Self::get(pool, id).await
    }

    /// Update a photo
    pub async fn update(
        pool: &PgPool,
        caller: &AuthUser,
        id: i32,
        input: UpdatePhotoRequest,
    ) -> Result<Photo, ApiError> {
        let owner = require_found(PhotoRepository::find_owner(pool, id).await?, "photo")?;
        authorize(caller, Some(owner), Action::Update, "photo")?;

        PhotoRepository::update(
            pool,
            id,
            input.title.as_deref(),
            input.url.as_deref(),
            input.thumbnail_url.as_deref(),
        )
        .await?;

        Self::get(pool, id).await
    }

    /// Delete a photo
    pub async fn delete(pool: &PgPool, caller: &AuthUser, id: i32) -> Result<(), ApiError> {
        let owner = require_found(PhotoRepository::find_owner(pool, id).await?, "photo")?;
        authorize(caller, Some(owner), Action::Delete, "photo")?;

        PhotoRepository::delete(pool, id).await?;
        Ok(())
    }
}
