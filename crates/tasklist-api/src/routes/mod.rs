use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(handlers::health::home))

        // Task endpoints
        .route("/tasks", get(handlers::task::list_tasks))
        .route("/tasks", post(handlers::task::create_task))
        .route("/tasks/:id", put(handlers::task::update_task))
        .route("/tasks/:id", delete(handlers::task::delete_task))

        // Add state
        .with_state(state)

        // Add tracing + CORS
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
