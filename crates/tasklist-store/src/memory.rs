use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::store::DocumentStore;
use crate::{Error, Result};
use tasklist_core::Task;

/// In-memory document collection with the same semantics as the remote
/// store. Substitutable for [`HttpDocumentStore`] in tests and local runs.
///
/// [`HttpDocumentStore`]: crate::http::HttpDocumentStore
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<String, Task>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn fetch_all(&self) -> Result<Vec<Task>> {
        let documents = self.documents.read().await;
        Ok(documents.values().cloned().collect())
    }

    async fn fetch_one(&self, id: &str) -> Result<Option<Task>> {
        let documents = self.documents.read().await;
        Ok(documents.get(id).cloned())
    }

    async fn put(&self, id: &str, document: &Task) -> Result<()> {
        let mut documents = self.documents.write().await;
        documents.insert(id.to_string(), document.clone());
        Ok(())
    }

    async fn merge(&self, id: &str, fields: &Map<String, Value>) -> Result<()> {
        let mut documents = self.documents.write().await;

        let document = documents
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        document.apply_patch(fields);

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut documents = self.documents.write().await;
        documents.remove(id);
        Ok(())
    }
}
