//! Comment repository for database operations

use super::user::summary;
use anyhow::Result;
use chrono::{DateTime, Utc};
use placeholder_api_shared::{Comment, PostRef};
use sqlx::PgPool;

const COMMENT_SELECT: &str = r#"
    SELECT c.id, c.name, c.email, c.body, c.post_id, c.created_at, c.updated_at,
           p.title AS post_title, p.user_id AS post_user_id,
           u.name AS post_author_name, u.username AS post_author_username
    FROM comments c
    JOIN posts p ON p.id = c.post_id
    JOIN users u ON u.id = p.user_id
"#;

/// Comment record joined with its post and the post's author
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub body: String,
    pub post_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub post_title: String,
    pub post_user_id: i32,
    pub post_author_name: String,
    pub post_author_username: String,
}

impl CommentRecord {
    /// Full comment including a reference to its post
    pub fn into_comment(self) -> Comment {
        let post = PostRef {
            id: self.post_id,
            title: self.post_title,
            user: summary(
                self.post_user_id,
                self.post_author_name,
                self.post_author_username,
                None,
            ),
        };

        Comment {
            id: self.id,
            name: self.name,
            email: self.email,
            body: self.body,
            post_id: self.post_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            post: Some(post),
        }
    }

    /// Comment nested under its post
    pub fn into_nested(self) -> Comment {
        Comment {
            post: None,
            ..self.into_comment()
        }
    }
}

/// Comment repository for database operations
pub struct CommentRepository;

impl CommentRepository {
    /// List comments, newest first, optionally restricted to one post
    pub async fn list(pool: &PgPool, post_id: Option<i32>) -> Result<Vec<CommentRecord>> {
        let sql = format!(
            "{COMMENT_SELECT} WHERE ($1::int IS NULL OR c.post_id = $1) ORDER BY c.created_at DESC, c.id DESC"
        );
        let comments = sqlx::query_as::<_, CommentRecord>(&sql)
            .bind(post_id)
            .fetch_all(pool)
            .await?;

        Ok(comments)
    }

    /// Comments belonging to any of the given posts
    pub async fn list_for_posts(pool: &PgPool, post_ids: &[i32]) -> Result<Vec<CommentRecord>> {
        let sql = format!(
            "{COMMENT_SELECT} WHERE c.post_id = ANY($1) ORDER BY c.created_at DESC, c.id DESC"
        );
        let comments = sqlx::query_as::<_, CommentRecord>(&sql)
            .bind(post_ids)
            .fetch_all(pool)
            .await?;

        Ok(comments)
    }

    /// Find comment by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<CommentRecord>> {
        let sql = format!("{COMMENT_SELECT} WHERE c.id = $1");
        let comment = sqlx::query_as::<_, CommentRecord>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(comment)
    }

    /// Check whether a comment exists
    pub async fn exists(pool: &PgPool, id: i32) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Create a comment on a post
    pub async fn create(
        pool: &PgPool,
        post_id: i32,
        name: &str,
        email: &str,
        body: &str,
    ) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO comments (name, email, body, post_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(body)
        .bind(post_id)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Update a comment; `None` keeps the stored value
    pub async fn update(
        pool: &PgPool,
        id: i32,
        name: Option<&str>,
        email: Option<&str>,
        body: Option<&str>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                body = COALESCE($4, body),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(body)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a comment
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
