//! Photo repository for database operations
//!
//! Photos have no owner column; ownership is the owner of the
//! parent album.

use super::user::summary;
use anyhow::Result;
use chrono::{DateTime, Utc};
use placeholder_api_shared::{AlbumRef, Photo};
use sqlx::PgPool;

const PHOTO_SELECT: &str = r#"
    SELECT ph.id, ph.title, ph.url, ph.thumbnail_url, ph.album_id,
           ph.created_at, ph.updated_at,
           al.title AS album_title, al.user_id AS album_user_id,
           u.name AS album_owner_name, u.username AS album_owner_username
    FROM photos ph
    JOIN albums al ON al.id = ph.album_id
    JOIN users u ON u.id = al.user_id
"#;

/// Photo record joined with its album and the album's owner
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PhotoRecord {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
    pub album_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub album_title: String,
    pub album_user_id: i32,
    pub album_owner_name: String,
    pub album_owner_username: String,
}

impl PhotoRecord {
    /// Full photo including a reference to its album
    pub fn into_photo(self) -> Photo {
        let album = AlbumRef {
            id: self.album_id,
            title: self.album_title,
            user: summary(
                self.album_user_id,
                self.album_owner_name,
                self.album_owner_username,
                None,
            ),
        };

        Photo {
            id: self.id,
            title: self.title,
            url: self.url,
            thumbnail_url: self.thumbnail_url,
            album_id: self.album_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            album: Some(album),
        }
    }

    /// Photo nested under its album
    pub fn into_nested(self) -> Photo {
        Photo {
            album: None,
            ..self.into_photo()
        }
    }
}

/// Input for creating a photo
#[derive(Debug, Clone)]
pub struct CreatePhoto<'a> {
    pub album_id: i32,
    pub title: &'a str,
    pub url: &'a str,
    pub thumbnail_url: &'a str,
}

/// Photo repository for database operations
pub struct PhotoRepository;

impl PhotoRepository {
    /// List photos, newest first, optionally restricted to one album
    pub async fn list(pool: &PgPool, album_id: Option<i32>) -> Result<Vec<PhotoRecord>> {
        let sql = format!(
            "{PHOTO_SELECT} WHERE ($1::int IS NULL OR ph.album_id = $1) ORDER BY ph.created_at DESC, ph.id DESC"
        );
        let photos = sqlx::query_as::<_, PhotoRecord>(&sql)
            .bind(album_id)
            .fetch_all(pool)
            .await?;

        Ok(photos)
    }

    /// Photos belonging to any of the given albums
    pub async fn list_for_albums(pool: &PgPool, album_ids: &[i32]) -> Result<Vec<PhotoRecord>> {
        let sql = format!(
            "{PHOTO_SELECT} WHERE ph.album_id = ANY($1) ORDER BY ph.created_at DESC, ph.id DESC"
        );
        let photos = sqlx::query_as::<_, PhotoRecord>(&sql)
            .bind(album_ids)
            .fetch_all(pool)
            .await?;

        Ok(photos)
    }

    /// Find photo by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<PhotoRecord>> {
        let sql = format!("{PHOTO_SELECT} WHERE ph.id = $1");
        let photo = sqlx::query_as::<_, PhotoRecord>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(photo)
    }

    /// Owner of the album holding the photo, `None` when the photo does not exist
    pub async fn find_owner(pool: &PgPool, id: i32) -> Result<Option<i32>> {
        let owner = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT al.user_id
            FROM photos ph
            JOIN albums al ON al.id = ph.album_id
            WHERE ph.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(owner)
    }

    /// Create a photo in an album
    pub async fn create(pool: &PgPool, input: CreatePhoto<'_>) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO photos (title, url, thumbnail_url, album_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(input.title)
        .bind(input.url)
        .bind(input.thumbnail_url)
        .bind(input.album_id)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Update a photo; `None` keeps the stored value
    pub async fn update(
        pool: &PgPool,
        id: i32,
        title: Option<&str>,
        url: Option<&str>,
        thumbnail_url: Option<&str>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE photos
            SET title = COALESCE($2, title),
                url = COALESCE($3, url),
                thumbnail_url = COALESCE($4, thumbnail_url),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(url)
        .bind(thumbnail_url)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a photo
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
