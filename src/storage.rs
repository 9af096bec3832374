//! Record store for processed documents and their summaries.
//!
//! Nothing on the request path reads or writes these records yet; the store is
//! carried in [`crate::AppState`] so a durable backend can replace [`MemStore`]
//! without touching the handlers.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::prompt::Language;

pub type RecordId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub filename: String,
    pub content: String,
    pub language: Language,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: RecordId,
    pub filename: String,
    pub content: String,
    pub language: Language,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSummary {
    pub document_id: RecordId,
    pub summary: String,
    pub question: Option<String>,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: RecordId,
    pub document_id: RecordId,
    pub summary: String,
    pub question: Option<String>,
    pub language: Language,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_document(&self, document: NewDocument) -> Document;

    async fn get_document(&self, id: RecordId) -> Option<Document>;

    async fn create_summary(&self, summary: NewSummary) -> Summary;

    async fn get_summary(&self, id: RecordId) -> Option<Summary>;

    /// Summaries referencing `document_id`, oldest first.
    async fn summaries_for_document(&self, document_id: RecordId) -> Vec<Summary>;
}

#[derive(Default)]
struct Tables {
    documents: HashMap<RecordId, Document>,
    summaries: HashMap<RecordId, Summary>,
    last_document_id: RecordId,
    last_summary_id: RecordId,
}

/// Process-local store; ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemStore {
    tables: Mutex<Tables>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemStore {
    async fn create_document(&self, document: NewDocument) -> Document {
        let mut tables = self.tables.lock().await;
        tables.last_document_id += 1;
        let id = tables.last_document_id;

        let record = Document {
            id,
            filename: document.filename,
            content: document.content,
            language: document.language,
            created_at: document.created_at,
        };
        tables.documents.insert(id, record.clone());
        record
    }

    async fn get_document(&self, id: RecordId) -> Option<Document> {
        self.tables.lock().await.documents.get(&id).cloned()
    }

    async fn create_summary(&self, summary: NewSummary) -> Summary {
        let mut tables = self.tables.lock().await;
        tables.last_summary_id += 1;
        let id = tables.last_summary_id;

        let record = Summary {
            id,
            document_id: summary.document_id,
            summary: summary.summary,
            question: summary.question,
            language: summary.language,
        };
        tables.summaries.insert(id, record.clone());
        record
    }

    async fn get_summary(&self, id: RecordId) -> Option<Summary> {
        self.tables.lock().await.summaries.get(&id).cloned()
    }

    async fn summaries_for_document(&self, document_id: RecordId) -> Vec<Summary> {
        let tables = self.tables.lock().await;
        let mut found: Vec<Summary> = tables
            .summaries
            .values()
            .filter(|summary| summary.document_id == document_id)
            .cloned()
            .collect();
        found.sort_by_key(|summary| summary.id);
        found
    }
}
