//! Comment service
//!
//! Comments carry no owner: anyone may post one on an existing post,
//! only administrators may change or remove them.

use crate::auth::policy::{authorize, require_found, Action};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{CommentRecord, CommentRepository, PostRepository};
use placeholder_api_shared::{Comment, CreateCommentRequest, UpdateCommentRequest};
use sqlx::PgPool;

/// Comment service for business logic
pub struct CommentService;

impl CommentService {
    /// List comments, optionally for one post
    pub async fn list(pool: &PgPool, post_id: Option<i32>) -> Result<Vec<Comment>, ApiError> {
        let records = CommentRepository::list(pool, post_id).await?;
        Ok(records.into_iter().map(CommentRecord::into_comment).collect())
    }

    /// Get a comment with its post
    pub async fn get(pool: &PgPool, id: i32) -> Result<Comment, ApiError> {
        let record = require_found(CommentRepository::find_by_id(pool, id).await?, "comment")?;
        Ok(record.into_comment())
    }

    /// Create a comment; the post must exist
    pub async fn create(pool: &PgPool, input: CreateCommentRequest) -> Result<Comment, ApiError> {
        require_found(PostRepository::find_owner(pool, input.post_id).await?, "post")?;

        let id = CommentRepository::create(
            pool,
            input.post_id,
            &input.name,
            &input.email,
            &input.body,
        )
        .await?;

        Self::get(pool, id).await
    }

    /// Update a comment (administrators only)
    pub async fn update(
        pool: &PgPool,
        caller: &AuthUser,
        id: i32,
        input: UpdateCommentRequest,
    ) -> Result<Comment, ApiError> {
        if !CommentRepository::exists(pool, id).await? {
            return Err(ApiError::NotFound("Comment not found".to_string()));
        }
        authorize(caller, None, Action::Update, "comment")?;

        CommentRepository::update(
            pool,
            id,
            input.name.as_deref(),
            input.email.as_deref(),
            input.body.as_deref(),
        )
        .await?;

        Self::get(pool, id).await
    }

    /// Delete a comment (administrators only)
    pub async fn delete(pool: &PgPool, caller: &AuthUser, id: i32) -> Result<(), ApiError> {
        if !CommentRepository::exists(pool, id).await? {
            return Err(ApiError::NotFound("Comment not found".to_string()));
        }
        authorize(caller, None, Action::Delete, "comment")?;

        CommentRepository::delete(pool, id).await?;
        Ok(())
    }
}
