//! Rules Fetcher
//!
//! Best-effort download of the master rule table. The orchestrator calls a
//! fetcher at most once per run, and only when the cached table is missing.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_RULES_URL: &str = "https://curtbinder.info/reefangel/feature.txt";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Empty rule table received from {0}")]
    Empty(String),
}

/// Source of the rule table text.
#[async_trait]
pub trait RulesFetcher: Send + Sync {
    /// Where the rules come from, for log messages
    fn source(&self) -> &str;

    /// Retrieve the full rule table
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Fetches the rule table over HTTP(S).
pub struct HttpRulesFetcher {
    client: Client,
    url: String,
}

impl HttpRulesFetcher {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: build_client(),
            url: url.unwrap_or_else(|| DEFAULT_RULES_URL.to_string()),
        }
    }

    pub fn with_url(mut self, url: String) -> Self {
        self.url = url;
        self
    }
}

fn build_client() -> Client {
    match Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("Failed to configure HTTP client, using defaults: {}", e);
            Client::default()
        }
    }
}

impl Default for HttpRulesFetcher {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl RulesFetcher for HttpRulesFetcher {
    fn source(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        tracing::info!("Downloading {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(FetchError::Empty(self.url.clone()));
        }
        Ok(body)
    }
}
