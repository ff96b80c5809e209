use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::Result;
use tasklist_core::Task;

/// A document collection keyed by task id.
///
/// Every call is a single independent round trip to the store: no retries,
/// no batching, no caching. Implementations are shared across requests, so
/// they must be safe for concurrent use.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in the collection, in the store's enumeration order.
    async fn fetch_all(&self) -> Result<Vec<Task>>;

    /// The document at `id`, or `None` when absent.
    async fn fetch_one(&self, id: &str) -> Result<Option<Task>>;

    /// Full upsert at `id`; an existing document is overwritten entirely.
    async fn put(&self, id: &str, document: &Task) -> Result<()>;

    /// Field-level merge into the existing document at `id`. Fails with a
    /// not-found error when no document exists there.
    async fn merge(&self, id: &str, fields: &Map<String, Value>) -> Result<()>;

    /// Deletes the document at `id`; deleting an absent document succeeds.
    async fn remove(&self, id: &str) -> Result<()>;
}
