//! Mutex-guarded in-memory document collection.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Document, DocumentDraft, DocumentId, DocumentStore, StoreError};

use super::next_seed_id;

/// Document store backed by a vector in insertion order.
///
/// Same id discipline as the account store: a dedicated counter, never
/// reused after deletion. Creation and update stamp wall-clock time.
pub struct InMemoryDocumentStore {
    records: Mutex<Vec<Document>>,
    next_id: AtomicU32,
}

impl InMemoryDocumentStore {
    /// Build a store over the given seed documents.
    #[must_use]
    pub fn new(seed: Vec<Document>) -> Self {
        let next_id = next_seed_id(seed.iter().map(|document| document.id.0));
        Self {
            records: Mutex::new(seed),
            next_id: AtomicU32::new(next_id),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Document>> {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, query: &str) -> Vec<Document> {
        self.lock()
            .iter()
            .filter(|document| document.matches(query))
            .cloned()
            .collect()
    }

    async fn find(&self, id: DocumentId) -> Option<Document> {
        self.lock()
            .iter()
            .find(|document| document.id == id)
            .cloned()
    }

    async fn create(&self, draft: DocumentDraft) -> Document {
        let id = DocumentId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let document = Document::from_draft(id, draft, Utc::now());
        self.lock().push(document.clone());
        document
    }

    async fn update(&self, id: DocumentId, draft: DocumentDraft) -> Result<Document, StoreError> {
        let mut records = self.lock();
        let slot = records
            .iter_mut()
            .find(|document| document.id == id)
            .ok_or(StoreError::NotFound { id: id.0 })?;
        *slot = slot.clone().with_draft(draft, Utc::now());
        Ok(slot.clone())
    }

    async fn delete(&self, id: DocumentId) -> Option<Document> {
        let mut records = self.lock();
        let index = records.iter().position(|document| document.id == id)?;
        Some(records.remove(index))
    }
}
