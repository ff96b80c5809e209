use anyhow::Result;
use std::env;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tasklist_api::{routes, state::ApiState};
use tasklist_store::HttpDocumentStore;

/// The single persisted collection in the external store.
const TASKS_COLLECTION: &str = "tasks";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Get configuration
    let port = env::var("API_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()?;

    let store_url = env::var("STORE_URL").expect("STORE_URL must be set");

    // Initialize document store client
    let mut store = HttpDocumentStore::new(store_url, TASKS_COLLECTION);
    if let Ok(api_key) = env::var("STORE_API_KEY") {
        store = store.with_api_key(api_key);
    }

    // Create app state
    let state = ApiState::new(Arc::new(store));

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Todo list API running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
