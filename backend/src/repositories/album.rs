//! Album repository for database operations

use super::user::summary;
use anyhow::Result;
use chrono::{DateTime, Utc};
use placeholder_api_shared::{Album, Photo};
use sqlx::PgPool;

const ALBUM_SELECT: &str = r#"
    SELECT al.id, al.title, al.user_id, al.created_at, al.updated_at,
           u.name AS owner_name, u.username AS owner_username, u.email AS owner_email
    FROM albums al
    JOIN users u ON u.id = al.user_id
"#;

/// Album record joined with its owner
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AlbumRecord {
    pub id: i32,
    pub title: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_username: String,
    pub owner_email: String,
}

impl AlbumRecord {
    pub fn into_album(self, photos: Option<Vec<Photo>>) -> Album {
        Album {
            id: self.id,
            title: self.title,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: summary(
                self.user_id,
                self.owner_name,
                self.owner_username,
                Some(self.owner_email),
            ),
            photos,
        }
    }
}

/// Album repository for database operations
pub struct AlbumRepository;

impl AlbumRepository {
    /// List albums, newest first, optionally restricted to one owner
    pub async fn list(pool: &PgPool, user_id: Option<i32>) -> Result<Vec<AlbumRecord>> {
        let sql = format!(
            "{ALBUM_SELECT} WHERE ($1::int IS NULL OR al.user_id = $1) ORDER BY al.created_at DESC, al.id DESC"
        );
        let albums = sqlx::query_as::<_, AlbumRecord>(&sql)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Ok(albums)
    }

    /// Find album by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<AlbumRecord>> {
        let sql = format!("{ALBUM_SELECT} WHERE al.id = $1");
        let album = sqlx::query_as::<_, AlbumRecord>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(album)
    }

    /// Owner of an album, `None` when the album does not exist
    pub async fn find_owner(pool: &PgPool, id: i32) -> Result<Option<i32>> {
        let owner = sqlx::query_scalar::<_, i32>("SELECT user_id FROM albums WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(owner)
    }

    /// Create an album owned by `user_id`
    pub async fn create(pool: &PgPool, user_id: i32, title: &str) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO albums (title, user_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Update an album title
    pub async fn update(pool: &PgPool, id: i32, title: Option<&str>) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE albums
            SET title = COALESCE($2, title),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an album and its photos
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
