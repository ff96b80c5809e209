use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde_json::{Map, Value};

use crate::store::DocumentStore;
use crate::{Error, Result};
use tasklist_core::Task;

/// Client for the remote document-collection API.
///
/// The store exposes one URL per operation, each a single round trip:
///
/// ```text
/// GET    {base}/{collection}         all documents
/// GET    {base}/{collection}/{id}    one document (404 when absent)
/// PUT    {base}/{collection}/{id}    full upsert
/// PATCH  {base}/{collection}/{id}    field merge (404 when absent)
/// DELETE {base}/{collection}/{id}    delete
/// ```
#[derive(Clone)]
pub struct HttpDocumentStore {
    client: Client,
    base_url: String,
    collection: String,
    api_key: Option<String>,
}

impl HttpDocumentStore {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client: Client::new(),
            base_url,
            collection: collection.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, id)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some(ref api_key) = self.api_key {
            builder = builder.header("x-api-key", api_key);
        }
        builder
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn fetch_all(&self) -> Result<Vec<Task>> {
        tracing::debug!("Fetching all documents in {}", self.collection);

        let response = self.request(Method::GET, self.collection_url()).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await?;
            return Err(Error::Remote { status, message });
        }

        let documents: Vec<Task> = response.json().await?;
        Ok(documents)
    }

    async fn fetch_one(&self, id: &str) -> Result<Option<Task>> {
        tracing::debug!("Fetching document {}/{}", self.collection, id);

        let response = self.request(Method::GET, self.document_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await?;
            return Err(Error::Remote { status, message });
        }

        let document: Task = response.json().await?;
        Ok(Some(document))
    }

    async fn put(&self, id: &str, document: &Task) -> Result<()> {
        tracing::debug!("Writing document {}/{}", self.collection, id);

        let response = self
            .request(Method::PUT, self.document_url(id))
            .json(document)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await?;
            return Err(Error::Remote { status, message });
        }

        Ok(())
    }

    async fn merge(&self, id: &str, fields: &Map<String, Value>) -> Result<()> {
        tracing::debug!("Merging into document {}/{}", self.collection, id);

        let response = self
            .request(Method::PATCH, self.document_url(id))
            .json(fields)
            .send()
            .await?;

        // A merge needs an existing target; surface the miss as its own
        // error kind instead of the remote's error text.
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(id.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await?;
            return Err(Error::Remote { status, message });
        }

        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        tracing::debug!("Deleting document {}/{}", self.collection, id);

        let response = self
            .request(Method::DELETE, self.document_url(id))
            .send()
            .await?;

        // Deletes are idempotent; a missing document is still a success.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await?;
            return Err(Error::Remote { status, message });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_built_from_base_and_collection() {
        let store = HttpDocumentStore::new("http://store.local/", "tasks");

        assert_eq!(store.collection_url(), "http://store.local/tasks");
        assert_eq!(store.document_url("t1"), "http://store.local/tasks/t1");
    }
}
