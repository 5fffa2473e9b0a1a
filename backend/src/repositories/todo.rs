//! Todo repository for database operations

use super::user::summary;
use anyhow::Result;
use chrono::{DateTime, Utc};
use placeholder_api_shared::Todo;
use sqlx::PgPool;

const TODO_SELECT: &str = r#"
    SELECT t.id, t.title, t.completed, t.user_id, t.created_at, t.updated_at,
           u.name AS owner_name, u.username AS owner_username, u.email AS owner_email
    FROM todos t
    JOIN users u ON u.id = t.user_id
"#;

/// Todo record joined with its owner
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TodoRecord {
    pub id: i32,
    pub title: String,
    pub completed: bool,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_username: String,
    pub owner_email: String,
}

impl From<TodoRecord> for Todo {
    fn from(record: TodoRecord) -> Self {
        Todo {
            id: record.id,
            title: record.title,
            completed: record.completed,
            user_id: record.user_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
            user: summary(
                record.user_id,
                record.owner_name,
                record.owner_username,
                Some(record.owner_email),
            ),
        }
    }
}

/// Todo repository for database operations
pub struct TodoRepository;

impl TodoRepository {
    /// List todos, newest first, optionally restricted to one owner
    pub async fn list(pool: &PgPool, user_id: Option<i32>) -> Result<Vec<TodoRecord>> {
        let sql = format!(
            "{TODO_SELECT} WHERE ($1::int IS NULL OR t.user_id = $1) ORDER BY t.created_at DESC, t.id DESC"
        );
        let todos = sqlx::query_as::<_, TodoRecord>(&sql)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Ok(todos)
    }

    /// Find todo by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<TodoRecord>> {
        let sql = format!("{TODO_SELECT} WHERE t.id = $1");
        let todo = sqlx::query_as::<_, TodoRecord>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(todo)
    }

    /// Owner of a todo, `None` when the todo does not exist
    pub async fn find_owner(pool: &PgPool, id: i32) -> Result<Option<i32>> {
        let owner = sqlx::query_scalar::<_, i32>("SELECT user_id FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(owner)
    }

    /// Create a todo owned by `user_id`
    pub async fn create(pool: &PgPool, user_id: i32, title: &str, completed: bool) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO todos (title, completed, user_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(completed)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Update a todo; `None` keeps the stored value
    pub async fn update(
        pool: &PgPool,
        id: i32,
        title: Option<&str>,
        completed: Option<bool>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET title = COALESCE($2, title),
                completed = COALESCE($3, completed),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(completed)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Flip the completed flag in place
    pub async fn toggle(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET completed = NOT completed,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a todo
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
