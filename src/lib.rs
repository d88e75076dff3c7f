use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod testing;

use services::TodoService;

/// Shared state handed to every handler: the business-logic service,
/// constructed with its record-access collaborator at startup.
#[derive(Clone)]
pub struct AppState {
    pub service: TodoService,
}

impl AppState {
    pub fn new(service: TodoService) -> Self {
        Self { service }
    }
}

pub fn app(state: AppState) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state.clone())
        // Protected resource
        .merge(todo_routes(state));

    // Global middleware; CORS is config-gated
    let router = if config::config().security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}

fn todo_routes(state: AppState) -> Router {
    use handlers::todo;

    Router::new()
        .route(
            "/todo",
            get(todo::collection_get)
                .post(todo::collection_post)
                .put(todo::collection_put)
                .delete(todo::collection_delete),
        )
        .layer(axum::middleware::from_fn(
            middleware::jwt_auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Todo API (Rust)",
        "version": version,
        "description": "Per-user to-do list backend built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "todo": "/todo (protected - GET/POST/PUT/DELETE)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.service.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok",
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "store_error": e.to_string(),
            })),
        ),
    }
}
