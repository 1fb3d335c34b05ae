//! Phase 2: community questions from Reddit and Quora.

use seohub_core::{CommunityQuestion, Platform};

use crate::search::WebSearch;

const RESULTS_PER_PLATFORM: usize = 5;

/// Runs one site-scoped search per platform. A failed platform contributes
/// no rows and does not affect the other.
pub async fn community_questions(search: &dyn WebSearch, keyword: &str) -> Vec<CommunityQuestion> {
    let mut rows = Vec::new();

    for platform in Platform::ALL {
        let query = format!("{} {keyword}", platform.site_operator());
        match search.search(&query, RESULTS_PER_PLATFORM).await {
            Ok(results) => {
                tracing::debug!(
                    keyword,
                    platform = platform.as_str(),
                    count = results.len(),
                    "collected community questions"
                );
                rows.extend(results.into_iter().map(|r| CommunityQuestion {
                    keyword: keyword.to_string(),
                    platform,
                    question: r.title,
                    link: r.link,
                }));
            }
            Err(e) => {
                tracing::warn!(
                    keyword,
                    phase = "community",
                    platform = platform.as_str(),
                    error = %e,
                    "community search failed"
                );
            }
        }
    }

    rows
}
