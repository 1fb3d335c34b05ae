//! Video transcript retrieval.

use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::error::ResearchError;

/// Transcript languages tried, in preference order.
pub const TRANSCRIPT_LANGUAGES: &[&str] = &["en", "en-US", "auto"];

/// One line of transcript text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    pub text: String,
}

/// Joins segment texts into one space-separated document.
#[must_use]
pub fn transcript_text(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetches the transcript for `video_id` in the first available language
    /// from `languages`.
    async fn fetch(
        &self,
        video_id: &str,
        languages: &[&str],
    ) -> Result<Vec<TranscriptSegment>, ResearchError>;
}

pub struct YoutubeTranscripts {
    api: YouTubeTranscriptApi,
}

impl YoutubeTranscripts {
    /// # Errors
    ///
    /// Returns [`ResearchError::TranscriptClient`] if the underlying client
    /// cannot be constructed.
    pub fn new() -> Result<Self, ResearchError> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| ResearchError::TranscriptClient(e.to_string()))?;
        Ok(Self { api })
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscripts {
    async fn fetch(
        &self,
        video_id: &str,
        languages: &[&str],
    ) -> Result<Vec<TranscriptSegment>, ResearchError> {
        let transcript = self
            .api
            .fetch_transcript(video_id, languages, false)
            .await
            .map_err(|e| ResearchError::Transcript {
                video_id: video_id.to_string(),
                reason: e.to_string(),
            })?;

        Ok(transcript
            .snippets
            .into_iter()
            .map(|s| TranscriptSegment { text: s.text })
            .collect())
    }
}
