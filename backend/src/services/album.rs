//! Album service
//!
//! Albums are owned by their creator; photos inherit that ownership.

use crate::auth::policy::{authorize, require_found, Action};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{AlbumRecord, AlbumRepository, PhotoRecord, PhotoRepository};
use placeholder_api_shared::{Album, CreateAlbumRequest, Photo, UpdateAlbumRequest};
use sqlx::PgPool;
use std::collections::HashMap;

/// Album service for business logic
pub struct AlbumService;

impl AlbumService {
    /// List albums with their photos, optionally for one owner
    pub async fn list(pool: &PgPool, user_id: Option<i32>) -> Result<Vec<Album>, ApiError> {
        let records = AlbumRepository::list(pool, user_id).await?;
        let ids: Vec<i32> = records.iter().map(|a| a.id).collect();
        let photos = PhotoRepository::list_for_albums(pool, &ids).await?;

        Ok(attach_photos(records, photos))
    }

    /// Get an album with its photos
    pub async fn get(pool: &PgPool, id: i32) -> Result<Album, ApiError> {
        let record = require_found(AlbumRepository::find_by_id(pool, id).await?, "album")?;
        let photos = PhotoRepository::list_for_albums(pool, &[id]).await?;

        attach_photos(vec![record], photos)
            .pop()
            .ok_or_else(|| ApiError::NotFound("Album not found".to_string()))
    }

    /// Photos of an existing album
    pub async fn photos(pool: &PgPool, id: i32) -> Result<Vec<Photo>, ApiError> {
        require_found(AlbumRepository::find_owner(pool, id).await?, "album")?;
        let photos = PhotoRepository::list(pool, Some(id)).await?;

        Ok(photos.into_iter().map(PhotoRecord::into_nested).collect())
    }

    /// Create an album owned by the caller
    pub async fn create(
        pool: &PgPool,
        caller: &AuthUser,
        input: CreateAlbumRequest,
    ) -> Result<Album, ApiError> {
        let id = AlbumRepository::create(pool, caller.id, &input.title).await?;
        Self::load(pool, id).await
    }

    /// Update an album
    pub async fn update(
        pool: &PgPool,
        caller: &AuthUser,
        id: i32,
        input: UpdateAlbumRequest,
    ) -> Result<Album, ApiError> {
        let owner = require_found(AlbumRepository::find_owner(pool, id).await?, "album")?;
        authorize(caller, Some(owner), Action::Update, "album")?;

        AlbumRepository::update(pool, id, input.title.as_deref()).await?;
        Self::load(pool, id).await
    }

    /// Delete an album and its photos
    pub async fn delete(pool: &PgPool, caller: &AuthUser, id: i32) -> Result<(), ApiError> {
        let owner = require_found(AlbumRepository::find_owner(pool, id).await?, "album")?;
        authorize(caller, Some(owner), Action::Delete, "album")?;

        AlbumRepository::delete(pool, id).await?;
        Ok(())
    }

    async fn load(pool: &PgPool, id: i32) -> Result<Album, ApiError> {
        let record = require_found(AlbumRepository::find_by_id(pool, id).await?, "album")?;
        Ok(record.into_album(None))
    }
}

fn attach_photos(albums: Vec<AlbumRecord>, photos: Vec<PhotoRecord>) -> Vec<Album> {
    let mut by_album: HashMap<i32, Vec<Photo>> = HashMap::new();
    for photo in photos {
        by_album
            .entry(photo.album_id)
            .or_default()
            .push(photo.into_nested());
    }

    albums
        .into_iter()
        .map(|album| {
            let photos = by_album.remove(&album.id).unwrap_or_default();
            album.into_album(Some(photos))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn album(id: i32, user_id: i32) -> AlbumRecord {
        AlbumRecord {
            id,
            title: format!("album {}", id),
            user_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            owner_name: "Ervin Howell".to_string(),
            owner_username: "Antonette".to_string(),
            owner_email: "Shanna@melissa.tv".to_string(),
        }
    }

    fn photo(id: i32, album_id: i32) -> PhotoRecord {
        PhotoRecord {
            id,
            title: "photo".to_string(),
            url: "https://via.placeholder.com/600/92c952".to_string(),
            thumbnail_url: "https://via.placeholder.com/150/92c952".to_string(),
            album_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            album_title: format!("album {}", album_id),
            album_user_id: 2,
            album_owner_name: "Ervin Howell".to_string(),
            album_owner_username: "Antonette".to_string(),
        }
    }

    #[test]
    fn test_attach_photos_groups_by_album() {
        let albums = attach_photos(
            vec![album(1, 2), album(2, 2)],
            vec![photo(5, 2), photo(6, 2), photo(7, 1)],
        );

        assert_eq!(albums[0].photos.as_ref().unwrap().len(), 1);
        assert_eq!(albums[1].photos.as_ref().unwrap().len(), 2);
        assert!(albums[1]
            .photos
            .as_ref()
            .unwrap()
            .iter()
            .all(|p| p.album.is_none()));
    }

    #[test]
    fn test_nested_photo_keeps_album_id() {
        let nested = photo(9, 4).into_nested();
        assert_eq!(nested.album_id, 4);
        assert!(nested.album.is_none());

        let full = photo(9, 4).into_photo();
        let album_ref = full.album.unwrap();
        assert_eq!(album_ref.user.id, 2);
        assert!(album_ref.user.email.is_none());
    }
}
