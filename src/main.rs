use std::sync::Arc;

use todo_api_rust::database::{self, PgTodoStore};
use todo_api_rust::services::TodoService;
use todo_api_rust::{app, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = todo_api_rust::config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Todo API in {:?} mode", config.environment);

    let pool = database::manager::connect()
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));

    database::manager::migrate(&pool)
        .await
        .unwrap_or_else(|e| panic!("failed to run schema bootstrap: {}", e));

    let service = TodoService::new(Arc::new(PgTodoStore::new(pool)));
    let app = app(AppState::new(service));

    // Allow tests or deployments to override port via env
    let port = std::env::var("TODO_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Todo API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
