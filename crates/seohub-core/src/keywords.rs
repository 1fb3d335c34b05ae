/// Trims each keyword and drops blank entries, preserving order.
#[must_use]
pub fn normalize_keywords<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|kw| kw.as_ref().trim().to_string())
        .filter(|kw| !kw.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blanks() {
        let keywords = normalize_keywords(["  crm software ", "", "   ", "seo audit"]);
        assert_eq!(keywords, vec!["crm software", "seo audit"]);
    }

    #[test]
    fn all_blank_is_empty() {
        assert!(normalize_keywords(vec![" ".to_string(), "\t".to_string()]).is_empty());
    }
}
