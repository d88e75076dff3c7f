use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::TodoItem;
use crate::database::repository::TodoStore;

#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Orchestrates record-access calls for the four CRUD operations.
///
/// Every mutation answers with the owner's full current listing rather than
/// the affected record alone; clients always receive "your list as it is
/// now".
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, todo: TodoItem) -> Result<Vec<TodoItem>, TodoError> {
        Self::validate(&todo)?;
        let owner_id = todo.owner_id.clone();
        self.store.save(todo).await?;
        Ok(self.store.find_by_owner(&owner_id).await?)
    }

    pub async fn retrieve(&self, owner_id: &str) -> Result<Vec<TodoItem>, TodoError> {
        Ok(self.store.find_by_owner(owner_id).await?)
    }

    pub async fn update(&self, todo: TodoItem) -> Result<Vec<TodoItem>, TodoError> {
        Self::validate(&todo)?;
        let id = Self::require_id(&todo)?;
        if !self.store.exists_by_id(id).await? {
            return Err(TodoError::NotFound("Unknown id".to_string()));
        }
        let owner_id = todo.owner_id.clone();
        self.store.save(todo).await?;
        Ok(self.store.find_by_owner(&owner_id).await?)
    }

    pub async fn delete(&self, todo: TodoItem) -> Result<Vec<TodoItem>, TodoError> {
        let id = Self::require_id(&todo)?;
        if !self.store.exists_by_id(id).await? {
            return Err(TodoError::NotFound("id does not exist".to_string()));
        }
        self.store.delete_by_id(id).await?;
        Ok(self.store.find_by_owner(&todo.owner_id).await?)
    }

    /// Storage liveness, surfaced by the health endpoint
    pub async fn health_check(&self) -> Result<(), TodoError> {
        Ok(self.store.ping().await?)
    }

    fn validate(todo: &TodoItem) -> Result<(), TodoError> {
        if todo.owner_id.trim().is_empty() {
            warn!("Unknown user.");
            return Err(TodoError::Validation("Unknown user.".to_string()));
        }
        Ok(())
    }

    fn require_id(todo: &TodoItem) -> Result<Uuid, TodoError> {
        todo.id
            .ok_or_else(|| TodoError::Validation("Missing id".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryTodoStore;

    fn service() -> TodoService {
        TodoService::new(Arc::new(MemoryTodoStore::new()))
    }

    #[tokio::test]
    async fn create_returns_full_owner_listing() {
        let service = service();

        let listing = service
            .create(TodoItem::new("u1", "My first todo", false))
            .await
            .unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].title, "My first todo");
        assert!(listing[0].id.is_some(), "store assigns an id on insert");

        let listing = service
            .create(TodoItem::new("u1", "Second", true))
            .await
            .unwrap();
        assert_eq!(listing.len(), 2, "mutation responses carry the whole list");
    }

    #[tokio::test]
    async fn create_rejects_empty_owner() {
        let service = service();
        let err = service
            .create(TodoItem::new("", "no owner", false))
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
        assert_eq!(err.to_string(), "Unknown user.");
    }

    #[tokio::test]
    async fn retrieve_is_empty_for_unknown_owner() {
        let service = service();
        let listing = service.retrieve("nobody").await.unwrap();
        assert!(listing.is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_existing_record() {
        let service = service();
        let listing = service
            .create(TodoItem::new("u1", "Before", false))
            .await
            .unwrap();
        let id = listing[0].id;

        let updated = service
            .update(TodoItem {
                id,
                owner_id: "u1".to_string(),
                title: "After".to_string(),
                done: true,
            })
            .await
            .unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].title, "After");
        assert!(updated[0].done);
    }

    #[tokio::test]
    async fn update_unknown_id_fails() {
        let service = service();
        let err = service
            .update(TodoItem {
                id: Some(Uuid::new_v4()),
                owner_id: "u1".to_string(),
                title: "ghost".to_string(),
                done: false,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::NotFound(_)));
        assert_eq!(err.to_string(), "Unknown id");
    }

    #[tokio::test]
    async fn delete_twice_fails_the_second_time() {
        let service = service();
        let listing = service
            .create(TodoItem::new("u1", "once", false))
            .await
            .unwrap();
        let todo = listing[0].clone();

        let after = service.delete(todo.clone()).await.unwrap();
        assert!(after.is_empty());

        let err = service.delete(todo).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound(_)));
        assert_eq!(err.to_string(), "id does not exist");
    }

    #[tokio::test]
    async fn listings_preserve_creation_order() {
        let service = service();
        for title in ["first", "second", "third"] {
            service
                .create(TodoItem::new("u1", title, false))
                .await
                .unwrap();
        }

        let titles: Vec<String> = service
            .retrieve("u1")
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn health_check_reports_store_liveness() {
        let service = service();
        service.health_check().await.unwrap();
    }

    #[tokio::test]
    async fn listings_are_scoped_to_the_owner() {
        let service = service();
        service
            .create(TodoItem::new("alice", "hers", false))
            .await
            .unwrap();
        let bobs = service
            .create(TodoItem::new("bob", "his", false))
            .await
            .unwrap();

        assert_eq!(bobs.len(), 1);
        assert_eq!(bobs[0].title, "his");
        assert_eq!(service.retrieve("alice").await.unwrap().len(), 1);
    }
}
