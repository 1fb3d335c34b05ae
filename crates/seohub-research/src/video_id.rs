use url::Url;

/// Extracts the YouTube video id from a watch or short-link URL.
///
/// Supported shapes are `https://youtu.be/<id>` and
/// `https://(www.)youtube.com/watch?v=<id>`. Anything else yields `None`.
#[must_use]
pub fn video_id_from_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let id = match parsed.host_str()? {
        "youtu.be" => parsed.path().strip_prefix('/')?.to_string(),
        "www.youtube.com" | "youtube.com" if parsed.path() == "/watch" => parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())?,
        _ => return None,
    };
    (!id.is_empty()).then_some(id)
}
