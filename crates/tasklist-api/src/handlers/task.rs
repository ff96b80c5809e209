use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::state::ApiState;
use tasklist_core::Task;
use tasklist_store::Error as StoreError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

/// Missing targets surface as 404; every other store failure is a 500
/// carrying the originating message.
fn error_reply(err: StoreError) -> ErrorReply {
    let status = match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// List every task currently in the store.
pub async fn list_tasks(State(state): State<ApiState>) -> Result<Json<Vec<Task>>, ErrorReply> {
    let tasks = state.store.fetch_all().await.map_err(error_reply)?;
    Ok(Json(tasks))
}

/// Create a task, assigning an id when the caller omits one. A document
/// already stored under the same id is overwritten (upsert, last writer
/// wins).
pub async fn create_task(
    State(state): State<ApiState>,
    Json(mut task): Json<Task>,
) -> Result<(StatusCode, Json<Task>), ErrorReply> {
    task.ensure_id();

    state.store.put(&task.id, &task).await.map_err(error_reply)?;
    tracing::info!("Task added: {}", task.id);

    Ok((StatusCode::CREATED, Json(task)))
}

/// Merge the submitted fields into an existing task and return the full
/// post-merge document, re-fetched from the store.
pub async fn update_task(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(mut fields): Json<Map<String, Value>>,
) -> Result<Json<Task>, ErrorReply> {
    // The document key is immutable; an id inside the patch is discarded.
    fields.remove("id");

    state.store.merge(&id, &fields).await.map_err(error_reply)?;

    match state.store.fetch_one(&id).await.map_err(error_reply)? {
        Some(task) => Ok(Json(task)),
        None => Err(error_reply(StoreError::NotFound(id))),
    }
}

/// Delete a task. Deleting an id with no document behind it is still a
/// success.
pub async fn delete_task(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ErrorReply> {
    state.store.remove(&id).await.map_err(error_reply)?;

    Ok(Json(DeleteResponse {
        message: "Deleted successfully".to_string(),
    }))
}
