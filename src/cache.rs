//! Bounded, time-expiring cache of extraction results, keyed by URL.
//! Owned by the pipeline and passed in by constructor so tests get
//! clean isolation; concurrent chat users may hit it simultaneously.

use crate::extractor::ExtractedArticle;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct ExtractCache {
    entries: Arc<DashMap<String, CacheEntry>>,
    capacity: usize,
    ttl: Duration,
}

struct CacheEntry {
    article: ExtractedArticle,
    inserted_at: Instant,
}

impl ExtractCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            capacity,
            ttl,
        }
    }

    /// Look up a fresh entry; an expired entry is removed and counts as
    /// a miss.
    pub fn get(&self, url: &str) -> Option<ExtractedArticle> {
        let expired = match self.entries.get(url) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                return Some(entry.article.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(url);
        }
        None
    }

    /// Insert, evicting the oldest entry when at capacity.
    pub fn insert(&self, url: &str, article: ExtractedArticle) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.len() >= self.capacity && !self.entries.contains_key(url) {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|entry| entry.value().inserted_at)
                .map(|entry| entry.key().clone());
            if let Some(key) = oldest {
                self.entries.remove(&key);
            }
        }

        self.entries.insert(
            url.to_string(),
            CacheEntry {
                article,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
