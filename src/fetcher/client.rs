use crate::config::Config;
use crate::fetcher::{decode::decode_body, errors::FetchError, types::PageText};
use chrono::Utc;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::instrument;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB

// A realistic browser User-Agent; many news sites serve reduced or
// blocked pages to obvious bots.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Build the shared HTTP client with connect timeout, redirect limit
/// and browser-like default headers. The total request timeout is
/// applied per attempt in [`fetch_once`].
pub fn build_client(config: &Config) -> Result<Client, FetchError> {
    ClientBuilder::new()
        .connect_timeout(config.connect_timeout())
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
                    .parse()
                    .expect("static header value"),
            );
            headers.insert(
                reqwest::header::ACCEPT_LANGUAGE,
                "he,en-US;q=0.7,en;q=0.3".parse().expect("static header value"),
            );
            headers
        })
        .build()
        .map_err(|e| FetchError::Io(e.to_string()))
}

/// Perform a single fetch attempt. Retry orchestration lives in
/// [`crate::fetcher::retry`].
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_once(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<PageText, FetchError> {
    let parsed_url = validate_url(url)?;

    let response = client
        .get(parsed_url)
        .timeout(timeout)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    // Check content length before downloading
    if let Some(content_length) = response.content_length()
        && content_length > MAX_BODY_SIZE
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    let url_final = response.url().clone();
    let status = response.status();

    if !status.is_success() {
        return Err(FetchError::from_status(status));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    if !content_type.contains("text/html") && !content_type.contains("application/xhtml") {
        return Err(FetchError::UnsupportedContentType(content_type));
    }

    let body_bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?;

    // Content-Length may have been missing; re-check after download
    if body_bytes.len() as u64 > MAX_BODY_SIZE {
        return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
    }

    let (body, encoding) = decode_body(&content_type, &body_bytes[..])?;

    Ok(PageText {
        url_final,
        status,
        body,
        encoding: encoding.to_string(),
        fetched_at: Utc::now(),
    })
}

fn validate_url(url: &str) -> Result<url::Url, FetchError> {
    let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl(format!(
            "unsupported scheme '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_schemes() {
        assert!(matches!(
            validate_url("ftp://example.com/file"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_url("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(validate_url("https://example.com/article").is_ok());
        assert!(validate_url("http://example.com").is_ok());
    }
}
