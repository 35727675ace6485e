use crate::config::Config;
use crate::fetcher::{client::fetch_once, errors::FetchError, types::PageText};
use reqwest::Client;
use std::time::Duration;
use tracing::{instrument, warn};

/// Exponential backoff delay for a retry attempt: `base * 2^attempt`.
/// Deterministic so the schedule is predictable and testable; the
/// exponent is capped to prevent overflow.
pub fn backoff_delay(attempt: u32, base: Duration) -> Duration {
    let capped_attempt = attempt.min(10);
    base.saturating_mul(2_u32.saturating_pow(capped_attempt))
}

/// Fetch a URL with bounded retries. `config.max_retries()` is the
/// total number of attempts; backoff sleeps happen between attempts,
/// never after the final one, and exhausting retries surfaces the last
/// error.
#[instrument(skip(client, config), fields(url = %url))]
pub async fn fetch(client: &Client, url: &str, config: &Config) -> Result<PageText, FetchError> {
    let max_attempts = config.max_retries().max(1);
    let mut attempt = 0;

    loop {
        match fetch_once(client, url, config.request_timeout()).await {
            Ok(page) => return Ok(page),
            Err(err) if err.should_retry() && attempt + 1 < max_attempts => {
                let delay = backoff_delay(attempt, config.retry_base_delay());
                warn!(
                    error = %err,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "fetch attempt failed, backing off"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_per_attempt() {
        let base = Duration::from_millis(500);
        assert_eq!(backoff_delay(0, base), Duration::from_millis(500));
        assert_eq!(backoff_delay(1, base), Duration::from_millis(1000));
        assert_eq!(backoff_delay(2, base), Duration::from_millis(2000));
    }

    #[test]
    fn backoff_exponent_is_capped() {
        let base = Duration::from_millis(100);
        assert_eq!(backoff_delay(10, base), backoff_delay(50, base));
    }
}
