//! Phase 3: YouTube strategy extraction.
//!
//! For each of the top three watch-page results, the transcript (or, failing
//! that, the search snippet) is condensed by the model into actionable tips.

use seohub_core::rows::sentinel;
use seohub_core::{TextSource, VideoStrategyRow};

use crate::llm::{ChatMessage, CompletionParams, LanguageModel};
use crate::search::SearchResult;
use crate::services::Services;
use crate::text::truncate_chars;
use crate::throttle::Throttle;
use crate::transcript::{transcript_text, TRANSCRIPT_LANGUAGES};
use crate::video_id::video_id_from_url;

const SEARCH_RESULTS: usize = 10;
const MAX_VIDEOS: usize = 3;
const MAX_ANALYSIS_CHARS: usize = 15_000;

const ANALYST_INSTRUCTION: &str = "You are an SEO Expert. Extract 3 actionable technical SEO tips from this video content. Keep it brief.";

const ANALYSIS_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.5,
    max_tokens: 300,
};

/// Keeps the first three full watch-page results, skipping Shorts.
#[must_use]
pub fn select_videos(results: Vec<SearchResult>) -> Vec<SearchResult> {
    results
        .into_iter()
        .filter(|r| r.link.contains("watch?v=") && !r.link.contains("shorts"))
        .take(MAX_VIDEOS)
        .collect()
}

/// Asks the model for SEO tips from `text` (first 15,000 characters).
pub async fn analyze_video_text(model: Option<&dyn LanguageModel>, text: &str) -> String {
    let Some(model) = model else {
        return sentinel::AI_NOT_ACTIVE.to_string();
    };

    let messages = [
        ChatMessage::system(ANALYST_INSTRUCTION),
        ChatMessage::user(truncate_chars(text, MAX_ANALYSIS_CHARS)),
    ];
    match model.complete(&messages, ANALYSIS_PARAMS).await {
        Ok(tips) => tips,
        Err(e) => {
            tracing::warn!(phase = "youtube", error = %e, "video analysis failed");
            sentinel::AI_ERROR.to_string()
        }
    }
}

/// Transcript text for `link` when available, otherwise the search snippet.
async fn video_text(services: &Services, link: &str, snippet: &str) -> (String, TextSource) {
    let Some(video_id) = video_id_from_url(link) else {
        tracing::debug!(url = link, "no video id in link; using snippet");
        return (snippet.to_string(), TextSource::Snippet);
    };

    match services
        .transcripts
        .fetch(&video_id, TRANSCRIPT_LANGUAGES)
        .await
    {
        Ok(segments) => (transcript_text(&segments), TextSource::Transcript),
        Err(e) => {
            tracing::debug!(video_id = %video_id, error = %e, "transcript unavailable; using snippet");
            (snippet.to_string(), TextSource::Snippet)
        }
    }
}

pub async fn video_strategy(
    services: &Services,
    throttle: &Throttle,
    keyword: &str,
) -> Vec<VideoStrategyRow> {
    let query = format!("site:youtube.com {keyword}");
    let results = match services.search.search(&query, SEARCH_RESULTS).await {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!(keyword, phase = "youtube", error = %e, "video search failed");
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for video in select_videos(results) {
        let (text, source) = video_text(services, &video.link, &video.snippet).await;

        let strategy = if text.is_empty() {
            sentinel::NO_DATA.to_string()
        } else {
            analyze_video_text(services.model(), &text).await
        };

        rows.push(VideoStrategyRow {
            keyword: keyword.to_string(),
            title: video.title.replace(" - YouTube", ""),
            strategy,
            source,
            url: video.link,
        });

        throttle.after_video().await;
    }

    tracing::debug!(keyword, count = rows.len(), "video strategies collected");
    rows
}
