//! Orchestration of the save chain: fetch -> extract -> detect ->
//! summarize -> categorize. One URL submission runs one chain; the
//! components are stateless apart from the injected URL cache, so
//! concurrent chains need no coordination.

use crate::cache::ExtractCache;
use crate::categorizer::{self, Category};
use crate::config::Config;
use crate::extractor::{self, ExtractLimits, ExtractionMethod, Language};
use crate::fetcher::{self, FetchError};
use crate::summarizer;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Average adult reading speed, words per minute.
const READING_WPM: usize = 200;

/// Everything the caller needs to persist and to format a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveReady {
    pub url: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub category: Category,
    pub language: Language,
    pub method: ExtractionMethod,
    pub reading_time_minutes: u32,
}

/// Caller-facing failure taxonomy. The caller maps these onto
/// user-visible guidance: timeouts suggest trying again later, blocked
/// and no-content suggest a different site.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("fetch timed out")]
    Timeout,

    #[error("site blocked the request")]
    Blocked,

    #[error("http error {0}")]
    HttpStatus(StatusCode),

    #[error("network error: {0}")]
    Network(String),

    #[error("no article content could be extracted")]
    NoContent,
}

impl From<FetchError> for PipelineError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::InvalidUrl(e) => Self::InvalidUrl(e),
            FetchError::ConnectTimeout | FetchError::RequestTimeout => Self::Timeout,
            FetchError::Blocked(_) => Self::Blocked,
            FetchError::Http { status, .. } => Self::HttpStatus(status),
            FetchError::Network(e) | FetchError::Io(e) => Self::Network(e),
            // The page answered but its content is unusable; same
            // guidance as a failed extraction
            FetchError::BodyTooLarge(_)
            | FetchError::UnsupportedContentType(_)
            | FetchError::Charset(_) => Self::NoContent,
        }
    }
}

/// The pipeline owns its HTTP client and URL cache; construct once and
/// share across chat handlers.
#[derive(Clone)]
pub struct Pipeline {
    config: Config,
    client: Client,
    cache: ExtractCache,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let cache = ExtractCache::new(config.cache_size(), config.cache_ttl());
        Self::with_cache(config, cache)
    }

    /// Constructor injection of the cache, for sharing or for test
    /// isolation.
    pub fn with_cache(config: Config, cache: ExtractCache) -> Result<Self, FetchError> {
        let client = fetcher::build_client(&config)?;
        Ok(Self {
            config,
            client,
            cache,
        })
    }

    /// Run the full chain for one URL. Summarization and categorization
    /// cannot fail; only fetch and extraction outcomes propagate.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn process(&self, url: &str) -> Result<SaveReady, PipelineError> {
        let article = match self.cache.get(url) {
            Some(cached) => {
                debug!("extraction cache hit");
                cached
            }
            None => {
                let page = fetcher::fetch(&self.client, url, &self.config).await?;
                let limits = ExtractLimits {
                    max_title_chars: self.config.max_title_chars(),
                    max_body_chars: self.config.max_body_chars(),
                };
                let article = extractor::extract(&page.body, &page.url_final, &limits)
                    .ok_or(PipelineError::NoContent)?;
                self.cache.insert(url, article.clone());
                article
            }
        };

        let summary = summarizer::summarize(
            &article.body,
            article.language,
            self.config.max_summary_chars(),
        );
        let category = categorizer::categorize(&article.title, &article.body);

        info!(
            method = article.method.as_str(),
            language = article.language.code(),
            category = category.as_str(),
            "article processed"
        );

        Ok(SaveReady {
            url: url.to_string(),
            reading_time_minutes: reading_time_minutes(&article.body),
            title: article.title,
            summary,
            body: article.body,
            category,
            language: article.language,
            method: article.method,
        })
    }
}

/// `max(1, round(words / 200))` minutes.
fn reading_time_minutes(body: &str) -> u32 {
    let words = body.split_whitespace().count();
    ((words as f64 / READING_WPM as f64).round() as u32).max(1)
}
