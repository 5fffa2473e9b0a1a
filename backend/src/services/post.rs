//! Post service
//!
//! Posts are owned by their author; updates and deletes require the
//! author or an administrator.

use crate::auth::policy::{authorize, require_found, Action};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{CommentRecord, CommentRepository, PostRecord, PostRepository};
use placeholder_api_shared::{Comment, CreatePostRequest, Post, UpdatePostRequest};
use sqlx::PgPool;
use std::collections::HashMap;

/// Post service for business logic
pub struct PostService;

impl PostService {
    /// List posts with their comments, optionally for one author
    pub async fn list(pool: &PgPool, user_id: Option<i32>) -> Result<Vec<Post>, ApiError> {
        let records = PostRepository::list(pool, user_id).await?;
        let ids: Vec<i32> = records.iter().map(|p| p.id).collect();
        let comments = CommentRepository::list_for_posts(pool, &ids).await?;

        Ok(attach_comments(records, comments))
    }

    /// Get a post with its comments
    pub async fn get(pool: &PgPool, id: i32) -> Result<Post, ApiError> {
        let record = require_found(PostRepository::find_by_id(pool, id).await?, "post")?;
        let comments = CommentRepository::list_for_posts(pool, &[id]).await?;

        attach_comments(vec![record], comments)
            .pop()
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))
    }

    /// Comments of an existing post
    pub async fn comments(pool: &PgPool, id: i32) -> Result<Vec<Comment>, ApiError> {
        require_found(PostRepository::find_owner(pool, id).await?, "post")?;
        let comments = CommentRepository::list(pool, Some(id)).await?;

        Ok(comments.into_iter().map(CommentRecord::into_nested).collect())
    }

    /// Create a post owned by the caller
    pub async fn create(
        pool: &PgPool,
        caller: &AuthUser,
        input: CreatePostRequest,
    ) -> Result<Post, ApiError> {
        let id = PostRepository::create(pool, caller.id, &input.title, &input.body).await?;
        Self::load(pool, id).await
    }

    /// Update a post
    pub async fn update(
        pool: &PgPool,
        caller: &AuthUser,
        id: i32,
        input: UpdatePostRequest,
    ) -> Result<Post, ApiError> {
        let owner = require_found(PostRepository::find_owner(pool, id).await?, "post")?;
        authorize(caller, Some(owner), Action::Update, "post")?;

        PostRepository::update(pool, id, input.title.as_deref(), input.body.as_deref()).await?;
        Self::load(pool, id).await
    }

    /// Delete a post and its comments
    pub async fn delete(pool: &PgPool, caller: &AuthUser, id: i32) -> Result<(), ApiError> {
        let owner = require_found(PostRepository::find_owner(pool, id).await?, "post")?;
        authorize(caller, Some(owner), Action::Delete, "post")?;

        PostRepository::delete(pool, id).await?;
        Ok(())
    }

    /// Load a post without its comments
    async fn load(pool: &PgPool, id: i32) -> Result<Post, ApiError> {
        let record = require_found(PostRepository::find_by_id(pool, id).await?, "post")?;
        Ok(record.into_post(None))
    }
}

/// Group comments under their posts, keeping post order
fn attach_comments(posts: Vec<PostRecord>, comments: Vec<CommentRecord>) -> Vec<Post> {
    let mut by_post: HashMap<i32, Vec<Comment>> = HashMap::new();
    for comment in comments {
        by_post
            .entry(comment.post_id)
            .or_default()
            .push(comment.into_nested());
    }

    posts
        .into_iter()
        .map(|post| {
            let comments = by_post.remove(&post.id).unwrap_or_default();
            post.into_post(Some(comments))
        })
        .collect()
}
