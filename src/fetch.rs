//! HTTP page fetching with exponential backoff retry logic.
//!
//! The module uses a trait-based design for flexibility:
//! - [`FetchPage`]: Core trait defining an async page fetch
//! - [`HttpFetcher`]: Wraps a `reqwest` client with a request timeout
//! - [`RetryFetch`]: Decorator that adds retry logic to any `FetchPage` implementation
//!
//! # Retry Strategy
//!
//! - Maximum 3 retry attempts
//! - Exponential backoff starting at 1 second
//! - Maximum delay capped at 30 seconds
//! - Random jitter (0-250ms) added to prevent thundering herd

use rand::{Rng, rng};
use reqwest::Client;
use std::error::Error;
use std::fmt;
use std::time::{Duration as StdDuration, Instant};
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};

/// Seconds before an in-flight request is abandoned.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Trait for fetching the body of a web page.
///
/// The abstraction exists so decorators (like retry logic) and test doubles
/// can stand in for the real HTTP client.
pub trait FetchPage {
    /// Fetch `url` and return the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// `reqwest`-backed [`FetchPage`] implementation with a request timeout.
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with a [`REQUEST_TIMEOUT_SECS`] second timeout.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl FetchPage for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        info!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u128,
            "Fetched page"
        );
        Ok(body)
    }
}

/// Wrapper that adds exponential backoff retry logic to any [`FetchPage`]
/// implementation.
///
/// # Backoff Strategy
///
/// The delay between retries follows this formula:
/// ```text
/// delay = min(base_delay * 2^(attempt-1), max_delay) + random_jitter(0..250ms)
/// ```
pub struct RetryFetch<T> {
    /// The underlying fetcher to wrap.
    inner: T,
    /// Maximum number of retry attempts before giving up.
    max_retries: usize,
    /// Initial delay between retries (doubles with each attempt).
    base_delay: StdDuration,
    /// Maximum delay cap to prevent excessive waiting.
    max_delay: StdDuration,
}

impl<T> RetryFetch<T>
where
    T: FetchPage,
{
    /// Create a new retry wrapper around an existing [`FetchPage`] implementation.
    pub fn new(inner: T, max_retries: usize, base_delay: StdDuration) -> Self {
        Self {
            inner,
            max_retries,
            base_delay,
            max_delay: StdDuration::from_secs(30),
        }
    }
}

impl<T> fmt::Debug for RetryFetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryFetch")
            .field("max_retries", &self.max_retries)
            .field("base_delay", &self.base_delay)
            .field("max_delay", &self.max_delay)
            .finish()
    }
}

impl<T> FetchPage for RetryFetch<T>
where
    T: FetchPage + fmt::Debug,
{
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let total_t0 = Instant::now();
        let mut attempt = 0usize;

        loop {
            let attempt_t0 = Instant::now();
            match self.inner.fetch(url).await {
                Ok(body) => {
                    return Ok(body);
                }
                Err(e) => {
                    attempt += 1;
                    let attempt_dt = attempt_t0.elapsed();
                    let total_dt = total_t0.elapsed();

                    if attempt > self.max_retries {
                        error!(
                            attempt,
                            max = self.max_retries,
                            elapsed_ms_attempt = attempt_dt.as_millis() as u128,
                            elapsed_ms_total = total_dt.as_millis() as u128,
                            error = %e,
                            "fetch() exhausted retries"
                        );
                        return Err(e);
                    }

                    // backoff calc
                    let mut delay = self.base_delay.saturating_mul(1 << (attempt - 1));
                    if delay > self.max_delay {
                        delay = self.max_delay;
                    }
                    let jitter_ms: u64 = rng().random_range(0..=250);
                    let delay = delay + StdDuration::from_millis(jitter_ms);

                    warn!(
                        attempt,
                        max = self.max_retries,
                        elapsed_ms_attempt = attempt_dt.as_millis() as u128,
                        elapsed_ms_total = total_dt.as_millis() as u128,
                        ?delay,
                        error = %e,
                        "fetch() attempt failed; backing off"
                    );
                    sleep(delay).await;
                }
            }
        }
    }
}

/// Fetch a page with the default retry policy: 3 retries, 1 second base delay.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_with_backoff(url: &str) -> Result<String, Box<dyn Error>> {
    let fetcher = RetryFetch::new(HttpFetcher::new()?, 3, StdDuration::from_secs(1));
    fetcher.fetch(url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Test double failing a fixed number of times before succeeding.
    #[derive(Debug)]
    struct FlakyFetcher {
        failures_left: Cell<usize>,
    }

    impl FetchPage for FlakyFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, Box<dyn Error>> {
            let left = self.failures_left.get();
            if left > 0 {
                self.failures_left.set(left - 1);
                Err("transient failure".into())
            } else {
                Ok("<html></html>".to_string())
            }
        }
    }

    #[tokio::test]
    async fn test_retry_recovers_from_transient_failures() {
        let flaky = FlakyFetcher { failures_left: Cell::new(2) };
        let fetcher = RetryFetch::new(flaky, 3, StdDuration::from_millis(1));
        let body = fetcher.fetch("https://example.com").await.unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_max_retries() {
        let flaky = FlakyFetcher { failures_left: Cell::new(10) };
        let fetcher = RetryFetch::new(flaky, 2, StdDuration::from_millis(1));
        assert!(fetcher.fetch("https://example.com").await.is_err());
        // 1 initial try + 2 retries consumed 3 of the 10 scripted failures
        assert_eq!(flaky_failures_remaining(&fetcher), 7);
    }

    fn flaky_failures_remaining(fetcher: &RetryFetch<FlakyFetcher>) -> usize {
        fetcher.inner.failures_left.get()
    }

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new().is_ok());
    }
}
