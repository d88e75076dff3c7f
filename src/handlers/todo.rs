use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::api::format::{
    CreateTodoRequest, DeleteTodoRequest, ResponseEnvelope, UpdateTodoRequest,
};
use crate::database::models::TodoItem;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::AppState;

/// POST /todo - create a record and return the caller's full listing
pub async fn collection_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<ResponseEnvelope, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    // Any client-supplied id was already dropped by decoding; the owner is
    // always the authenticated caller.
    let todo = TodoItem::new(user.user_id, payload.title, payload.done);
    let listing = state.service.create(todo).await?;
    Ok(ResponseEnvelope::data(listing))
}

/// GET /todo - list the caller's records (empty list is not an error)
pub async fn collection_get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<ResponseEnvelope, ApiError> {
    let listing = state.service.retrieve(&user.user_id).await?;
    Ok(ResponseEnvelope::data(listing))
}

/// PUT /todo - overwrite an existing record and return the full listing
pub async fn collection_put(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<ResponseEnvelope, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    let todo = TodoItem {
        id: Some(parse_id(&payload.id)?),
        owner_id: user.user_id,
        title: payload.title,
        done: payload.done,
    };
    let listing = state.service.update(todo).await?;
    Ok(ResponseEnvelope::data(listing))
}

/// DELETE /todo - remove an existing record and return the full listing
pub async fn collection_delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<DeleteTodoRequest>, JsonRejection>,
) -> Result<ResponseEnvelope, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    let todo = TodoItem {
        id: Some(parse_id(&payload.id)?),
        owner_id: user.user_id,
        title: String::new(),
        done: false,
    };
    let listing = state.service.delete(todo).await?;
    Ok(ResponseEnvelope::data(listing))
}

/// Identifiers are opaque strings on the wire but UUIDs in storage; reject
/// malformed ones before they reach the service.
fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::validation(format!("Invalid id format: {}", id)))
}
