use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A task document: a string key plus an open map of caller-defined fields.
///
/// The `id` doubles as the document key in the store and is kept inside the
/// document itself, so a fetched task always carries its own key. Everything
/// else is schemaless: `fields` holds whatever JSON object the caller sent,
/// flattened into the document on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Task {
    /// Random unique token, safe under concurrent creates.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Assigns a fresh id when the caller did not supply one.
    pub fn ensure_id(&mut self) -> &str {
        if self.id.is_empty() {
            self.id = Self::generate_id();
        }
        &self.id
    }

    /// Merges caller fields into this document, leaving absent fields
    /// untouched. The document key is immutable: an `id` entry in the patch
    /// is discarded.
    pub fn apply_patch(&mut self, fields: &Map<String, Value>) {
        for (key, value) in fields {
            if key != "id" {
                self.fields.insert(key.clone(), value.clone());
            }
        }
    }
}
