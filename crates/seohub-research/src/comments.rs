//! Top-level video comments from the YouTube Data API v3.
//!
//! Optional: only wired in when a `YOUTUBE_API_KEY` is configured. Comments
//! feed the persona prompt as first-hand audience language.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::ResearchError;
use crate::text::normalize_base_url;

#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Returns up to `limit` top-level comment texts, most relevant first.
    async fn top_comments(&self, video_id: &str, limit: usize)
        -> Result<Vec<String>, ResearchError>;
}

#[derive(Deserialize)]
struct CommentThreadList {
    #[serde(default)]
    items: Vec<CommentThread>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    #[serde(default)]
    text_original: Option<String>,
    #[serde(default)]
    text_display: Option<String>,
}

pub struct YoutubeCommentsClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl YoutubeCommentsClient {
    /// Creates a client against `base_url`
    /// (production: `https://www.googleapis.com/youtube/v3`).
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
            endpoint: format!("{base}/commentThreads"),
        })
    }
}

#[async_trait]
impl CommentSource for YoutubeCommentsClient {
    async fn top_comments(
        &self,
        video_id: &str,
        limit: usize,
    ) -> Result<Vec<String>, ResearchError> {
        let max_results = limit.clamp(1, 100).to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("maxResults", max_results.as_str()),
                ("order", "relevance"),
                ("textFormat", "plainText"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResearchError::UnexpectedStatus {
                service: "youtube comments",
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: CommentThreadList =
            serde_json::from_str(&body).map_err(|e| ResearchError::Deserialize {
                context: format!("commentThreads(videoId={video_id})"),
                source: e,
            })?;

        Ok(parsed
            .items
            .into_iter()
            .filter_map(|thread| {
                let snippet = thread.snippet.top_level_comment.snippet;
                snippet.text_original.or(snippet.text_display)
            })
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .take(limit)
            .collect())
    }
}
