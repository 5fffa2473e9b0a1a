//! Post repository for database operations

use super::user::summary;
use anyhow::Result;
use chrono::{DateTime, Utc};
use placeholder_api_shared::{Comment, Post};
use sqlx::PgPool;

const POST_SELECT: &str = r#"
    SELECT p.id, p.title, p.body, p.user_id, p.created_at, p.updated_at,
           u.name AS author_name, u.username AS author_username, u.email AS author_email
    FROM posts p
    JOIN users u ON u.id = p.user_id
"#;

/// Post record joined with its author
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRecord {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_name: String,
    pub author_username: String,
    pub author_email: String,
}

impl PostRecord {
    pub fn into_post(self, comments: Option<Vec<Comment>>) -> Post {
        Post {
            id: self.id,
            title: self.title,
            body: self.body,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: summary(
                self.user_id,
                self.author_name,
                self.author_username,
                Some(self.author_email),
            ),
            comments,
        }
    }
}

/// Post repository for database operations
pub struct PostRepository;

impl PostRepository {
    /// List posts, newest first, optionally restricted to one author
    pub async fn list(pool: &PgPool, user_id: Option<i32>) -> Result<Vec<PostRecord>> {
        let sql = format!(
            "{POST_SELECT} WHERE ($1::int IS NULL OR p.user_id = $1) ORDER BY p.created_at DESC, p.id DESC"
        );
        let posts = sqlx::query_as::<_, PostRecord>(&sql)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Ok(posts)
    }

    /// Find post by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<PostRecord>> {
        let sql = format!("{POST_SELECT} WHERE p.id = $1");
        let post = sqlx::query_as::<_, PostRecord>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(post)
    }

    /// Owner of a post, `None` when the post does not exist
    pub async fn find_owner(pool: &PgPool, id: i32) -> Result<Option<i32>> {
        let owner = sqlx::query_scalar::<_, i32>("SELECT user_id FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(owner)
    }

    /// Create a post owned by `user_id`
    pub async fn create(pool: &PgPool, user_id: i32, title: &str, body: &str) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO posts (title, body, user_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Update a post; `None` keeps the stored value
    pub async fn update(
        pool: &PgPool,
        id: i32,
        title: Option<&str>,
        body: Option<&str>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                body = COALESCE($3, body),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(body)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a post and its comments
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
