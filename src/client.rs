//! Rate-limited, key-rotating client for the distributor search API.
//!
//! All mutable state (rotation cursor, last-request timestamp) lives on the
//! client instance. The pacing is global across credentials and assumes the
//! sequential, single-caller batch loop in [`crate::resolver`].

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::models::{PartRecord, SearchMode, SearchRequest, SearchResponse};
use reqwest::StatusCode;
use std::time::{Duration, Instant};

const SEARCH_PATH: &str = "/api/v1/search/partnumber";

pub struct SearchClient {
    http: reqwest::Client,
    search_url: String,
    api_keys: Vec<String>,
    cursor: usize,
    last_request: Option<Instant>,
    min_interval: Duration,
    cooldown: Duration,
    max_retry_attempts: u32,
}

impl SearchClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        if config.api_keys.is_empty() {
            return Err(AppError::Config(
                "credential pool must not be empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            search_url: format!("{}{}", config.base_url.trim_end_matches('/'), SEARCH_PATH),
            api_keys: config.api_keys.clone(),
            cursor: 0,
            last_request: None,
            min_interval: Duration::from_millis(config.request_delay_ms),
            cooldown: Duration::from_millis(config.retry.cooldown_ms),
            max_retry_attempts: config.retry.max_attempts,
        })
    }

    /// Credential at the cursor, then advance modulo pool size.
    ///
    /// Pure round-robin, no health tracking: a permanently invalid key in
    /// the pool degrades every Nth request. Known limitation.
    fn next_key(&mut self) -> String {
        let key = self.api_keys[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.api_keys.len();
        key
    }

    /// Sleep out the remainder of the minimum inter-request interval, then
    /// stamp the request time. Global across all credentials.
    async fn enforce_delay(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }

    /// Exact part-number search. `Ok(None)` means no match.
    pub async fn search_exact(
        &mut self,
        part_number: &str,
    ) -> Result<Option<PartRecord>, AppError> {
        self.search(part_number, SearchMode::Exact).await
    }

    /// Relaxed search returning the closest similar part.
    pub async fn search_fuzzy(
        &mut self,
        part_number: &str,
    ) -> Result<Option<PartRecord>, AppError> {
        self.search(part_number, SearchMode::Partial).await
    }

    /// One search cycle per attempt: pace, rotate to the next key, request.
    ///
    /// 429 responses are retried after a fixed cooldown, bounded by the
    /// configured attempt budget (the only error this method surfaces).
    /// Every other failure (timeout, connect error, unexpected status,
    /// malformed body) is logged and swallowed as a non-match.
    async fn search(
        &mut self,
        part_number: &str,
        mode: SearchMode,
    ) -> Result<Option<PartRecord>, AppError> {
        let mut attempts: u32 = 0;

        loop {
            self.enforce_delay().await;
            let api_key = self.next_key();

            match self.execute(part_number, mode, &api_key).await {
                Ok(found) => return Ok(found),
                Err(AppError::Upstream { status: 429, .. }) => {
                    if attempts >= self.max_retry_attempts {
                        tracing::warn!(
                            part_number,
                            attempts = attempts + 1,
                            "retry budget exhausted while throttled"
                        );
                        return Err(AppError::RateLimited {
                            attempts: attempts + 1,
                        });
                    }
                    attempts += 1;
                    tracing::warn!(
                        part_number,
                        attempt = attempts,
                        cooldown_ms = self.cooldown.as_millis() as u64,
                        "throttled by upstream, cooling down before retry"
                    );
                    tokio::time::sleep(self.cooldown).await;
                }
                Err(err) => {
                    // Never raised past this layer; the resolver sees a non-match.
                    tracing::warn!(
                        part_number,
                        mode = mode.as_option_str(),
                        error = %err,
                        "search failed, treating as not found"
                    );
                    return Ok(None);
                }
            }
        }
    }

    async fn execute(
        &self,
        part_number: &str,
        mode: SearchMode,
        api_key: &str,
    ) -> Result<Option<PartRecord>, AppError> {
        let request = SearchRequest::new(part_number, mode);

        let response = self
            .http
            .post(&self.search_url)
            .query(&[("apiKey", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: "throttled".to_string(),
            });
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.into_first_part())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryConfig;

    fn test_config(keys: &[&str]) -> ApiConfig {
        ApiConfig {
            base_url: "http://localhost:9".to_string(),
            api_keys: keys.iter().map(|k| k.to_string()).collect(),
            timeout_seconds: 30,
            request_delay_ms: 0,
            retry: RetryConfig::default(),
        }
    }

    #[test]
    fn test_key_rotation_wraps() {
        let mut client = SearchClient::new(&test_config(&["a", "b", "c"])).unwrap();
        let picked: Vec<String> = (0..7).map(|_| client.next_key()).collect();
        assert_eq!(picked, ["a", "b", "c", "a", "b", "c", "a"]);
    }

    #[test]
    fn test_single_key_pool() {
        let mut client = SearchClient::new(&test_config(&["only"])).unwrap();
        assert_eq!(client.next_key(), "only");
        assert_eq!(client.next_key(), "only");
    }

    #[test]
    fn test_empty_pool_rejected() {
        assert!(matches!(
            SearchClient::new(&test_config(&[])),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_search_url_joins_base() {
        let client = SearchClient::new(&test_config(&["a"])).unwrap();
        assert_eq!(
            client.search_url,
            "http://localhost:9/api/v1/search/partnumber"
        );

        let mut cfg = test_config(&["a"]);
        cfg.base_url = "http://localhost:9/".to_string();
        let client = SearchClient::new(&cfg).unwrap();
        assert_eq!(
            client.search_url,
            "http://localhost:9/api/v1/search/partnumber"
        );
    }

    #[tokio::test]
    async fn test_enforce_delay_paces_requests() {
        let mut cfg = test_config(&["a"]);
        cfg.request_delay_ms = 50;
        let mut client = SearchClient::new(&cfg).unwrap();

        let start = Instant::now();
        client.enforce_delay().await; // first call, no wait
        client.enforce_delay().await;
        client.enforce_delay().await;
        assert!(start.elapsed() >= Duration::from_millis(100));
    }
}
