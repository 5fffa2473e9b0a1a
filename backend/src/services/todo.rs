//! Todo service

use crate::auth::policy::{authorize, require_found, Action};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::TodoRepository;
use placeholder_api_shared::{CreateTodoRequest, Todo, UpdateTodoRequest};
use sqlx::PgPool;

/// Todo service for business logic
pub struct TodoService;

impl TodoService {
    /// List todos, optionally for one owner
    pub async fn list(pool: &PgPool, user_id: Option<i32>) -> Result<Vec<Todo>, ApiError> {
        let records = TodoRepository::list(pool, user_id).await?;
        Ok(records.into_iter().map(Todo::from).collect())
    }

    /// Get a todo
    pub async fn get(pool: &PgPool, id: i32) -> Result<Todo, ApiError> {
        let record = require_found(TodoRepository::find_by_id(pool, id).await?, "todo")?;
        Ok(record.into())
    }

    /// Create a todo owned by the caller; defaults to not completed
    pub async fn create(
        pool: &PgPool,
        caller: &AuthUser,
        input: CreateTodoRequest,
    ) -> Result<Todo, ApiError> {
        let completed = input.completed.unwrap_or(false);
        let id = TodoRepository::create(pool, caller.id, &input.title, completed).await?;
        Self::get(pool, id).await
    }

    /// Update a todo
    pub async fn update(
        pool: &PgPool,
        caller: &AuthUser,
        id: i32,
        input: UpdateTodoRequest,
    ) -> Result<Todo, ApiError> {
        let owner = require_found(TodoRepository::find_owner(pool, id).await?, "todo")?;
        authorize(caller, Some(owner), Action::Update, "todo")?;

        TodoRepository::update(pool, id, input.title.as_deref(), input.completed).await?;
        Self::get(pool, id).await
    }

    /// Flip a todo's completed flag
    pub async fn toggle(pool: &PgPool, caller: &AuthUser, id: i32) -> Result<Todo, ApiError> {
        let owner = require_found(TodoRepository::find_owner(pool, id).await?, "todo")?;
        authorize(caller, Some(owner), Action::Update, "todo")?;

        TodoRepository::toggle(pool, id).await?;
        Self::get(pool, id).await
    }

    /// Delete a todo
    pub async fn delete(pool: &PgPool, caller: &AuthUser, id: i32) -> Result<(), ApiError> {
        let owner = require_found(TodoRepository::find_owner(pool, id).await?, "todo")?;
        authorize(caller, Some(owner), Action::Delete, "todo")?;

        TodoRepository::delete(pool, id).await?;
        Ok(())
    }
}
