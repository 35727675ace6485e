//! In-memory record store, used by the test suite and useful as a
//! development stand-in for a real database backend.

use crate::categorizer::Category;
use crate::store::{NewArticle, RecordStore, SavedArticle, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<BTreeMap<i64, SavedArticle>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn save(&self, article: NewArticle) -> Result<i64, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = SavedArticle {
            id,
            user_id: article.user_id,
            url: article.url,
            title: article.title,
            summary: article.summary,
            body: article.body,
            category: article.category,
            tags: article.tags,
            language: article.language,
            reading_time_minutes: article.reading_time_minutes,
            method: article.method,
            date_saved: Utc::now(),
            date_read: None,
            is_favorite: false,
        };
        self.rows.write().await.insert(id, row);
        Ok(id)
    }

    async fn get(
        &self,
        user_id: i64,
        article_id: i64,
    ) -> Result<Option<SavedArticle>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .get(&article_id)
            .filter(|row| row.user_id == user_id)
            .cloned())
    }

    async fn list(
        &self,
        user_id: i64,
        category: Option<Category>,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SavedArticle>, StoreError> {
        let rows = self.rows.read().await;
        let mut matched: Vec<SavedArticle> = rows
            .values()
            .filter(|row| row.user_id == user_id)
            .filter(|row| category.is_none_or(|c| row.category == c))
            .cloned()
            .collect();
        // ids are monotonic, so newest-first is descending id
        matched.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(matched.into_iter().skip(offset).take(limit).collect())
    }

    async fn search(&self, user_id: i64, query: &str) -> Result<Vec<SavedArticle>, StoreError> {
        let needle = query.to_lowercase();
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|row| row.user_id == user_id)
            .filter(|row| {
                row.title.to_lowercase().contains(&needle)
                    || row.summary.to_lowercase().contains(&needle)
                    || row.body.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn delete(&self, user_id: i64, article_id: i64) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().await;
        match rows.get(&article_id) {
            Some(row) if row.user_id == user_id => {
                rows.remove(&article_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn toggle_favorite(&self, user_id: i64, article_id: i64) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&article_id) {
            Some(row) if row.user_id == user_id => {
                row.is_favorite = !row.is_favorite;
                Ok(row.is_favorite)
            }
            _ => Err(StoreError::NotFound {
                user_id,
                article_id,
            }),
        }
    }

    async fn mark_read(&self, user_id: i64, article_id: i64) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&article_id) {
            Some(row) if row.user_id == user_id => {
                row.date_read = Some(Utc::now());
                Ok(())
            }
            _ => Err(StoreError::NotFound {
                user_id,
                article_id,
            }),
        }
    }
}
