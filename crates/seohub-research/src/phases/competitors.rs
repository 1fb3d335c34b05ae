//! Phase 1: competitor discovery and on-page extraction.

use seohub_core::{CompetitorPage, FetchStatus};

use crate::html::{has_faq_schema, heading_summary, meta_description, page_title, word_count};
use crate::page::PageFetcher;
use crate::search::WebSearch;
use crate::services::Services;

const SEARCH_RESULTS: usize = 10;
const MAX_COMPETITORS: usize = 4;

/// Link substrings marking community or video sites rather than competitors.
const EXCLUDED_LINK_MARKERS: &[&str] = &["reddit", "youtube", "quora"];

/// Keeps the first four links that are not community or video sites.
///
/// Matching is a case-sensitive substring test on the whole link.
#[must_use]
pub fn filter_competitor_links<I, S>(links: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    links
        .into_iter()
        .map(Into::into)
        .filter(|link| {
            !EXCLUDED_LINK_MARKERS
                .iter()
                .any(|marker| link.contains(marker))
        })
        .take(MAX_COMPETITORS)
        .collect()
}

/// Searches `keyword` and returns up to four competitor URLs.
/// A failed search yields no URLs.
pub async fn discover_competitors(search: &dyn WebSearch, keyword: &str) -> Vec<String> {
    match search.search(keyword, SEARCH_RESULTS).await {
        Ok(results) => filter_competitor_links(results.into_iter().map(|r| r.link)),
        Err(e) => {
            tracing::warn!(keyword, phase = "competitors", error = %e, "competitor search failed");
            Vec::new()
        }
    }
}

/// Fetches one page and extracts its on-page SEO fields.
///
/// Any fetch failure produces [`CompetitorPage::failed`].
pub async fn extract_page(pages: &dyn PageFetcher, url: &str) -> CompetitorPage {
    let page = match pages.fetch(url).await {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!(url, phase = "competitors", error = %e, "competitor page fetch failed");
            return CompetitorPage::failed(url);
        }
    };

    CompetitorPage {
        url: url.to_string(),
        status: FetchStatus::Success,
        title: page_title(&page.html).unwrap_or_else(|| "N/A".to_string()),
        meta_description: meta_description(&page.html).unwrap_or_else(|| "N/A".to_string()),
        headings: heading_summary(&page.html),
        has_faq_schema: has_faq_schema(&page.html, url),
        word_count: page.main_text.as_deref().map_or(0, word_count),
    }
}

pub async fn research_competitors(services: &Services, keyword: &str) -> Vec<CompetitorPage> {
    let urls = discover_competitors(services.search.as_ref(), keyword).await;
    let mut rows = Vec::with_capacity(urls.len());
    for url in &urls {
        rows.push(extract_page(services.pages.as_ref(), url).await);
    }
    rows
}
