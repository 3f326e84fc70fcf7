use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::registry::Registry;
use crate::store::SqliteStore;

pub mod routes;

/// Server state
pub struct AppState {
    pub registry: Mutex<Registry<SqliteStore>>,
    pub event_title: String,
}

pub async fn start_server(
    port: u16,
    database_path: &Path,
    ttl: Duration,
    event_title: String,
) -> anyhow::Result<()> {
    let store = SqliteStore::open(database_path)?;
    let registry = Registry::new(store).with_ttl(ttl);
    let state = Arc::new(AppState {
        registry: Mutex::new(registry),
        event_title,
    });

    let app = Router::new()
        .route("/api/menu", get(routes::get_menu))
        .route(
            "/api/entries",
            get(routes::get_entries).post(routes::submit_entry),
        )
        .route("/api/stats", get(routes::get_stats))
        .fallback_service(ServeDir::new("ui/dist"))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Sign-up sheet running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
