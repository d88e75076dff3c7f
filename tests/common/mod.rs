use std::sync::Arc;

use anyhow::{Context, Result};

use todo_api_rust::auth::{generate_jwt, Claims};
use todo_api_rust::services::TodoService;
use todo_api_rust::testing::MemoryTodoStore;
use todo_api_rust::{app, AppState};

const TEST_JWT_SECRET: &str = "integration-test-secret";

pub struct TestServer {
    pub base_url: String,
}

/// Serve a fresh app (with its own in-memory store) on an unused port.
/// Each test gets an isolated instance, so suites can run in parallel.
pub async fn spawn_app() -> Result<TestServer> {
    // Must be set before anything touches the lazy config singleton
    std::env::set_var("JWT_SECRET", TEST_JWT_SECRET);

    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;

    let service = TodoService::new(Arc::new(MemoryTodoStore::new()));
    let state = AppState::new(service);

    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.expect("test server");
    });

    Ok(TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
    })
}

/// Bearer token for the given owner id, signed with the test secret
pub fn token_for(user_id: &str) -> String {
    generate_jwt(Claims::new(user_id)).expect("failed to generate test token")
}
