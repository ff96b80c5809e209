use std::sync::Arc;

use tasklist_store::DocumentStore;

#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn DocumentStore>,
}

impl ApiState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}
