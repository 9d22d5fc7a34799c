//! HTTP fetch collaborator.
//!
//! The only I/O boundary in the crate: a single GET against the quote page.
//! Retries transient 5xx responses with exponential backoff, honors
//! `Retry-After` on 429, and reports a non-success final status as a typed
//! error. The extractors never see any of this; they receive page text.

use std::time::Duration;

use tracing::debug;

use crate::error::{FetchError, QuoteError};
use crate::extract::{extract_daily_table, extract_monthly_history};
use crate::quote::PriceQuote;

/// The cooperative's quote page.
pub const QUOTE_PAGE_URL: &str = "https://cooabriel.coop.br/cotacao-do-dia";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const MAX_RETRIES: u32 = 2;

/// HTTP client for the quote page.
#[derive(Clone)]
pub struct PageClient {
    client: reqwest::Client,
    url: String,
}

impl PageClient {
    /// Create a client pointed at the live quote page.
    pub fn new(timeout_ms: u64) -> Self {
        Self::with_url(QUOTE_PAGE_URL, timeout_ms)
    }

    /// Create a client pointed at an arbitrary page URL (tests use this).
    pub fn with_url(url: &str, timeout_ms: u64) -> Self {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self {
            client,
            url: url.to_string(),
        }
    }

    /// GET the quote page and return its body text.
    pub async fn fetch_page(&self) -> Result<String, FetchError> {
        let mut retries = 0u32;

        loop {
            match self.client.get(&self.url).send().await {
                Ok(response) => {
                    let status = response.status().as_u16();

                    // Retry on 5xx
                    if status >= 500 && retries < MAX_RETRIES {
                        retries += 1;
                        let delay = Duration::from_millis(500 * 2u64.pow(retries - 1));
                        debug!(status, retry = retries, "transient status, backing off");
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    // Backoff on 429
                    if status == 429 && retries < MAX_RETRIES {
                        retries += 1;
                        let retry_after = response
                            .headers()
                            .get("retry-after")
                            .and_then(|v| v.to_str().ok())
                            .and_then(|s| s.parse::<u64>().ok())
                            .unwrap_or(2);
                        tokio::time::sleep(Duration::from_secs(retry_after.min(10))).await;
                        continue;
                    }

                    if !(200..300).contains(&status) {
                        return Err(FetchError::Status { status });
                    }

                    let body = response.text().await.map_err(|source| {
                        FetchError::Transport {
                            url: self.url.clone(),
                            source,
                        }
                    })?;
                    debug!(bytes = body.len(), "quote page fetched");
                    return Ok(body);
                }
                Err(source) => {
                    if retries < MAX_RETRIES {
                        retries += 1;
                        let delay = Duration::from_millis(500 * 2u64.pow(retries - 1));
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(FetchError::Transport {
                        url: self.url.clone(),
                        source,
                    });
                }
            }
        }
    }
}

impl Default for PageClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_MS)
    }
}

/// Fetch the page and extract today's quote board.
pub async fn fetch_daily_quotes(client: &PageClient) -> Result<Vec<PriceQuote>, QuoteError> {
    let html = client.fetch_page().await?;
    Ok(extract_daily_table(&html)?)
}

/// Fetch the page and extract the monthly history.
pub async fn fetch_monthly_history(client: &PageClient) -> Result<Vec<PriceQuote>, QuoteError> {
    let html = client.fetch_page().await?;
    Ok(extract_monthly_history(&html)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PageClient::default();
        assert_eq!(client.url, QUOTE_PAGE_URL);
    }
}
