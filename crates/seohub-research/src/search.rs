//! Web search adapter backed by the Serper Google Search API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::ResearchError;
use crate::text::normalize_base_url;

/// One organic search result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Returns up to `num` organic results for `query`, in ranking order.
    ///
    /// `query` may use site-scoped syntax such as `site:reddit.com seo`.
    async fn search(&self, query: &str, num: usize) -> Result<Vec<SearchResult>, ResearchError>;
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperResult>,
}

#[derive(Debug, Deserialize)]
struct SerperResult {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

pub struct SerperClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl SerperClient {
    /// Creates a client pointed at `base_url` (production: `https://google.serper.dev`).
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ResearchError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, ResearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        let base = normalize_base_url(base_url)?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint: format!("{base}/search"),
        })
    }
}

#[async_trait]
impl WebSearch for SerperClient {
    async fn search(&self, query: &str, num: usize) -> Result<Vec<SearchResult>, ResearchError> {
        tracing::debug!(query, num, "serper search");

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&serde_json::json!({ "q": query, "num": num }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResearchError::UnexpectedStatus {
                service: "serper",
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SerperResponse =
            serde_json::from_str(&body).map_err(|e| ResearchError::Deserialize {
                context: format!("serper search(q={query})"),
                source: e,
            })?;

        let results: Vec<SearchResult> = parsed
            .organic
            .into_iter()
            .map(|r| SearchResult {
                title: r.title.unwrap_or_default(),
                link: r.link.unwrap_or_default(),
                snippet: r.snippet.unwrap_or_default(),
            })
            .collect();

        tracing::debug!(query, count = results.len(), "serper search complete");
        Ok(results)
    }
}
