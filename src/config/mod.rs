//! Configuration handling for the pipeline.
//!
//! All knobs are environment-provided and consumed as plain values. The
//! `Config::from_env` method performs the loading with sensible
//! development defaults, so the crate works out of the box and a
//! deployment can override any single value.

use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variable names. Keeping them public lets other crates
/// (tests, deployment tooling) refer to them if needed later.
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "CONNECT_TIMEOUT_SECS";
pub const ENV_MAX_RETRIES: &str = "MAX_RETRIES";
pub const ENV_RETRY_BASE_DELAY_MS: &str = "RETRY_BASE_DELAY_MS";
pub const ENV_MAX_BODY_CHARS: &str = "MAX_BODY_CHARS";
pub const ENV_MAX_TITLE_CHARS: &str = "MAX_TITLE_CHARS";
pub const ENV_MAX_SUMMARY_CHARS: &str = "MAX_SUMMARY_CHARS";
pub const ENV_CACHE_SIZE: &str = "CACHE_SIZE";
pub const ENV_CACHE_TTL_SECS: &str = "CACHE_TTL_SECS";

/// Default development values used when environment variables are absent.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 500;
const DEFAULT_MAX_BODY_CHARS: usize = 8000;
const DEFAULT_MAX_TITLE_CHARS: usize = 200;
const DEFAULT_MAX_SUMMARY_CHARS: usize = 300;
const DEFAULT_CACHE_SIZE: usize = 100;
const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Pipeline runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    request_timeout: Duration,
    connect_timeout: Duration,
    max_retries: u32,
    retry_base_delay: Duration,
    max_body_chars: usize,
    max_title_chars: usize,
    max_summary_chars: usize,
    cache_size: usize,
    cache_ttl: Duration,
}

impl Config {
    /// Load from environment variables, falling back to development
    /// defaults. A variable that is present but not a valid number is a
    /// configuration error rather than a silent default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            request_timeout: Duration::from_secs(read_var(
                ENV_REQUEST_TIMEOUT_SECS,
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            connect_timeout: Duration::from_secs(read_var(
                ENV_CONNECT_TIMEOUT_SECS,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
            max_retries: read_var(ENV_MAX_RETRIES, DEFAULT_MAX_RETRIES)?,
            retry_base_delay: Duration::from_millis(read_var(
                ENV_RETRY_BASE_DELAY_MS,
                DEFAULT_RETRY_BASE_DELAY_MS,
            )?),
            max_body_chars: read_var(ENV_MAX_BODY_CHARS, DEFAULT_MAX_BODY_CHARS)?,
            max_title_chars: read_var(ENV_MAX_TITLE_CHARS, DEFAULT_MAX_TITLE_CHARS)?,
            max_summary_chars: read_var(ENV_MAX_SUMMARY_CHARS, DEFAULT_MAX_SUMMARY_CHARS)?,
            cache_size: read_var(ENV_CACHE_SIZE, DEFAULT_CACHE_SIZE)?,
            cache_ttl: Duration::from_secs(read_var(ENV_CACHE_TTL_SECS, DEFAULT_CACHE_TTL_SECS)?),
        })
    }

    /// Override the request timeout (useful in tests and embedders).
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
    pub fn with_max_summary_chars(mut self, max: usize) -> Self {
        self.max_summary_chars = max;
        self
    }
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Total request timeout for a single fetch attempt.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
    /// TCP connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
    /// Total fetch attempts (not extra attempts after the first).
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
    /// Base delay for exponential backoff between attempts.
    pub fn retry_base_delay(&self) -> Duration {
        self.retry_base_delay
    }
    /// Extracted body truncation cap, in characters.
    pub fn max_body_chars(&self) -> usize {
        self.max_body_chars
    }
    /// Extracted title truncation cap, in characters.
    pub fn max_title_chars(&self) -> usize {
        self.max_title_chars
    }
    /// Summary length cap, in characters.
    pub fn max_summary_chars(&self) -> usize {
        self.max_summary_chars
    }
    /// URL cache capacity, in entries.
    pub fn cache_size(&self) -> usize {
        self.cache_size
    }
    /// URL cache entry lifetime.
    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: Duration::from_millis(DEFAULT_RETRY_BASE_DELAY_MS),
            max_body_chars: DEFAULT_MAX_BODY_CHARS,
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
            max_summary_chars: DEFAULT_MAX_SUMMARY_CHARS,
            cache_size: DEFAULT_CACHE_SIZE,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

fn read_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
