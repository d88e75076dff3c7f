//! In-memory store used by unit and integration tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::TodoItem;
use crate::database::repository::TodoStore;

/// TodoStore backed by a Vec, insertion-ordered. Mirrors the Postgres store
/// closely enough to exercise the service and handler layers without a
/// running database.
#[derive(Default)]
pub struct MemoryTodoStore {
    rows: RwLock<Vec<TodoItem>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<TodoItem>, DatabaseError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn save(&self, mut todo: TodoItem) -> Result<TodoItem, DatabaseError> {
        let mut rows = self.rows.write().await;
        match todo.id {
            None => {
                todo.id = Some(Uuid::new_v4());
                rows.push(todo.clone());
                Ok(todo)
            }
            Some(id) => {
                let existing = rows
                    .iter_mut()
                    .find(|t| t.id == Some(id))
                    .ok_or_else(|| DatabaseError::NotFound(format!("todo {} not found", id)))?;
                *existing = todo.clone();
                Ok(todo)
            }
        }
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().any(|t| t.id == Some(id)))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DatabaseError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|t| t.id != Some(id));
        if rows.len() == before {
            return Err(DatabaseError::NotFound(format!("todo {} not found", id)));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
