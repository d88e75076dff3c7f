use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single to-do row.
///
/// `id` is None until the store assigns one on insert; `owner_id` is always
/// the authenticated caller, set server-side before the record reaches the
/// service layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TodoItem {
    pub id: Option<Uuid>,
    pub owner_id: String,
    pub title: String,
    pub done: bool,
}

impl TodoItem {
    pub fn new(owner_id: impl Into<String>, title: impl Into<String>, done: bool) -> Self {
        Self {
            id: None,
            owner_id: owner_id.into(),
            title: title.into(),
            done,
        }
    }
}
