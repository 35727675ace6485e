//! The record-store collaborator boundary. Persistence itself is
//! external to this crate; the pipeline only needs a save/query
//! interface in which every operation is scoped by `user_id` so one
//! user can never see or touch another user's records.

pub mod memory;

pub use memory::MemoryStore;

use crate::categorizer::Category;
use crate::extractor::{ExtractionMethod, Language};
use crate::pipeline::SaveReady;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A record as the store returns it. `(user_id, id)` uniquely
/// identifies a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedArticle {
    pub id: i64,
    pub user_id: i64,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub language: Language,
    pub reading_time_minutes: u32,
    pub method: ExtractionMethod,
    pub date_saved: DateTime<Utc>,
    pub date_read: Option<DateTime<Utc>>,
    pub is_favorite: bool,
}

/// A record as the pipeline hands it over for saving.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub user_id: i64,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub language: Language,
    pub reading_time_minutes: u32,
    pub method: ExtractionMethod,
}

impl NewArticle {
    /// Build a record from a processed pipeline result.
    pub fn from_save_ready(user_id: i64, ready: SaveReady) -> Self {
        Self {
            user_id,
            url: ready.url,
            title: ready.title,
            summary: ready.summary,
            body: ready.body,
            category: ready.category,
            tags: Vec::new(),
            language: ready.language,
            reading_time_minutes: ready.reading_time_minutes,
            method: ready.method,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("article {article_id} not found for user {user_id}")]
    NotFound { user_id: i64, article_id: i64 },

    #[error("storage backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a new record and return its id.
    async fn save(&self, article: NewArticle) -> Result<i64, StoreError>;

    async fn get(&self, user_id: i64, article_id: i64)
    -> Result<Option<SavedArticle>, StoreError>;

    /// Newest-first listing, optionally narrowed to one category.
    async fn list(
        &self,
        user_id: i64,
        category: Option<Category>,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SavedArticle>, StoreError>;

    /// Case-insensitive substring search over title, summary and body.
    async fn search(&self, user_id: i64, query: &str) -> Result<Vec<SavedArticle>, StoreError>;

    /// Returns whether a record was deleted.
    async fn delete(&self, user_id: i64, article_id: i64) -> Result<bool, StoreError>;

    /// Flip the favorite flag, returning the new state.
    async fn toggle_favorite(&self, user_id: i64, article_id: i64) -> Result<bool, StoreError>;

    /// Record that the article was read.
    async fn mark_read(&self, user_id: i64, article_id: i64) -> Result<(), StoreError>;
}
