pub mod manager;
pub mod models;
pub mod repository;

pub use manager::DatabaseError;
pub use models::TodoItem;
pub use repository::{PgTodoStore, TodoStore};
