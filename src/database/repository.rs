use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{self, DatabaseError};
use crate::database::models::TodoItem;

/// Record access contract for to-do rows.
///
/// Four operations, matching what the service layer orchestrates:
/// owner-scoped listing, insert-or-update, an existence check by id only
/// (no ownership filter), and removal by id.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<TodoItem>, DatabaseError>;

    /// Insert when `todo.id` is None, overwrite when it is Some.
    /// Returns the persisted row with its identifier populated.
    async fn save(&self, todo: TodoItem) -> Result<TodoItem, DatabaseError>;

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, DatabaseError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DatabaseError>;

    /// Storage liveness probe for the health endpoint
    async fn ping(&self) -> Result<(), DatabaseError>;
}

/// Postgres-backed store over the `todos` table
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<TodoItem>, DatabaseError> {
        // Insertion order, matching what the in-memory store yields
        let rows = sqlx::query_as::<_, TodoItem>(
            "SELECT id, owner_id, title, done FROM todos WHERE owner_id = $1 \
             ORDER BY created_at, id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn save(&self, todo: TodoItem) -> Result<TodoItem, DatabaseError> {
        match todo.id {
            // Identifiers are assigned here, once, on insert
            None => {
                let id = Uuid::new_v4();
                let row = sqlx::query_as::<_, TodoItem>(
                    "INSERT INTO todos (id, owner_id, title, done) VALUES ($1, $2, $3, $4) \
                     RETURNING id, owner_id, title, done",
                )
                .bind(id)
                .bind(&todo.owner_id)
                .bind(&todo.title)
                .bind(todo.done)
                .fetch_one(&self.pool)
                .await?;
                Ok(row)
            }
            Some(id) => {
                let result = sqlx::query_as::<_, TodoItem>(
                    "UPDATE todos SET owner_id = $2, title = $3, done = $4 WHERE id = $1 \
                     RETURNING id, owner_id, title, done",
                )
                .bind(id)
                .bind(&todo.owner_id)
                .bind(&todo.title)
                .bind(todo.done)
                .fetch_one(&self.pool)
                .await;

                match result {
                    Ok(row) => Ok(row),
                    Err(sqlx::Error::RowNotFound) => {
                        Err(DatabaseError::NotFound(format!("todo {} not found", id)))
                    }
                    Err(other) => Err(other.into()),
                }
            }
        }
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM todos WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists.0)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("todo {} not found", id)));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        manager::health_check(&self.pool).await
    }
}
