//! Small string helpers shared by the extractors and prompt builders.

/// Returns at most the first `max_chars` characters of `input`.
pub(crate) fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

/// Collapses runs of whitespace to single spaces and trims the ends.
pub(crate) fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Validates a configured base URL and strips any trailing slash.
pub(crate) fn normalize_base_url(
    base_url: &str,
) -> Result<String, crate::error::ResearchError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    url::Url::parse(trimmed).map_err(|e| crate::error::ResearchError::InvalidBaseUrl {
        base_url: base_url.to_string(),
        reason: e.to_string(),
    })?;
    Ok(trimmed.to_string())
}
