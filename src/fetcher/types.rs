use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// A fetched page, already decoded to UTF-8. The fetcher does not
/// interpret the content; the extractor takes it from here.
#[derive(Debug)]
pub struct PageText {
    pub url_final: Url,
    pub status: StatusCode,
    pub body: String,
    /// Name of the encoding the body was decoded from.
    pub encoding: String,
    pub fetched_at: DateTime<Utc>,
}
