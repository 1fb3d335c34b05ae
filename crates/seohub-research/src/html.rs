//! Markup extraction for competitor pages: title, meta description, heading
//! outline, FAQ schema detection, and main-text word counts.

use std::sync::LazyLock;

use scraper::{node::Node, ElementRef, Html, Selector};

use crate::text::{collapse_whitespace, truncate_chars};

const HEADING_MAX_CHARS: usize = 80;
const HEADINGS_PER_LEVEL: usize = 3;

/// Elements whose text never counts as page content.
const CHROME_TAGS: &[&str] = &[
    "head", "script", "style", "noscript", "template", "nav", "header", "footer", "aside",
];

static TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid title selector"));

static META_NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[name]").expect("valid meta selector"));

static HEADING_SELS: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    [
        Selector::parse("h1").expect("valid h1 selector"),
        Selector::parse("h2").expect("valid h2 selector"),
        Selector::parse("h3").expect("valid h3 selector"),
    ]
});

fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

/// Text of the first `<title>` element, if present and non-blank.
#[must_use]
pub fn page_title(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let title = element_text(doc.select(&TITLE_SEL).next()?);
    (!title.is_empty()).then_some(title)
}

/// `content` of the first `<meta name="description">` tag.
///
/// `None` when there is no such tag or its `content` is missing or blank.
#[must_use]
pub fn meta_description(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let tag = doc.select(&META_NAME_SEL).find(|meta| {
        meta.value()
            .attr("name")
            .is_some_and(|name| name.trim().eq_ignore_ascii_case("description"))
    })?;
    let content = collapse_whitespace(tag.value().attr("content")?);
    (!content.is_empty()).then_some(content)
}

/// Outline of the first three `h1`, `h2`, and `h3` headings.
///
/// Each level present in the page becomes one line, e.g.
/// `[H2]: Pricing | Setup | Troubleshooting`. Heading texts are cut to 80
/// characters. Levels with no headings are skipped.
#[must_use]
pub fn heading_summary(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut lines = Vec::new();
    for (idx, selector) in HEADING_SELS.iter().enumerate() {
        let texts: Vec<String> = doc
            .select(selector)
            .take(HEADINGS_PER_LEVEL)
            .map(|heading| truncate_chars(&element_text(heading), HEADING_MAX_CHARS).to_string())
            .collect();
        if !texts.is_empty() {
            lines.push(format!("[H{}]: {}", idx + 1, texts.join(" | ")));
        }
    }
    lines.join("\n")
}

/// Heuristic FAQ detection: `FAQPage` structured data in the markup, or
/// `faq` anywhere in the URL.
#[must_use]
pub fn has_faq_schema(html: &str, url: &str) -> bool {
    html.contains("FAQPage") || url.to_lowercase().contains("faq")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(el) if !CHROME_TAGS.contains(&el.name()) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

/// Best-effort readable body text with page chrome removed.
#[must_use]
pub fn main_text(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(doc.root_element(), &mut raw);
    let text = collapse_whitespace(&raw);
    (!text.is_empty()).then_some(text)
}

#[must_use]
pub fn word_count(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title>  Best Running Shoes &amp; Gear </title>
  <meta content="Compare the top shoes of 2025." name="description">
  <script type="application/ld+json">{"@type":"FAQPage"}</script>
</head>
<body>
  <nav>Home About Contact</nav>
  <h1>Best <em>Running</em> Shoes</h1>
  <h2>Road</h2><h2>Trail</h2><h2>Track</h2><h2>Hidden fourth</h2>
  <p>Running shoes matter a lot.</p>
  <footer>Copyright footer words</footer>
</body>
</html>"#;

    #[test]
    fn extracts_title_with_entities() {
        assert_eq!(
            page_title(PAGE).as_deref(),
            Some("Best Running Shoes & Gear")
        );
    }

    #[test]
    fn missing_title_is_none() {
        assert_eq!(page_title("<html><body>hi</body></html>"), None);
    }

    #[test]
    fn meta_description_attribute_order_independent() {
        assert_eq!(
            meta_description(PAGE).as_deref(),
            Some("Compare the top shoes of 2025.")
        );
        let html = r#"<meta name='Description' content='Single quoted'>"#;
        assert_eq!(meta_description(html).as_deref(), Some("Single quoted"));
    }

    #[test]
    fn meta_description_allows_angle_bracket_in_content() {
        let html = r#"<meta name="description" content="Compare A > B for 2025">"#;
        assert_eq!(
            meta_description(html).as_deref(),
            Some("Compare A > B for 2025")
        );
    }

    #[test]
    fn meta_description_without_content_is_none() {
        assert_eq!(meta_description(r#"<meta name="description">"#), None);
        assert_eq!(
            meta_description(r#"<meta name="description" content="   ">"#),
            None
        );
    }

    #[test]
    fn meta_description_skips_other_meta_tags() {
        let html = r#"<meta charset="utf-8"><meta name="viewport" content="width=device-width">"#;
        assert_eq!(meta_description(html), None);
    }

    #[test]
    fn heading_summary_caps_three_per_level() {
        assert_eq!(
            heading_summary(PAGE),
            "[H1]: Best Running Shoes\n[H2]: Road | Trail | Track"
        );
    }

    #[test]
    fn heading_summary_allows_angle_bracket_in_attribute() {
        assert_eq!(
            heading_summary(r#"<h2 data-x="a>b">Pricing</h2>"#),
            "[H2]: Pricing"
        );
    }

    #[test]
    fn heading_summary_ignores_script_strings_and_comments() {
        let html = r#"<script>var t = "<h1>Fake</h1>";</script><!-- <h1>Old</h1> --><h1>Real</h1>"#;
        assert_eq!(heading_summary(html), "[H1]: Real");
    }

    #[test]
    fn heading_summary_truncates_long_headings() {
        let long = "x".repeat(120);
        let html = format!("<h3>{long}</h3>");
        let summary = heading_summary(&html);
        assert_eq!(summary, format!("[H3]: {}", "x".repeat(80)));
    }

    #[test]
    fn heading_summary_empty_without_headings() {
        assert_eq!(heading_summary("<p>no headings</p>"), "");
    }

    #[test]
    fn faq_detected_from_markup_or_url() {
        assert!(has_faq_schema(PAGE, "https://a.com/shoes"));
        assert!(has_faq_schema("<p></p>", "https://a.com/FAQ/shoes"));
        assert!(!has_faq_schema("<p>faqpage</p>", "https://a.com/shoes"));
    }

    #[test]
    fn main_text_drops_chrome() {
        let text = main_text(PAGE).expect("body text");
        assert!(text.contains("Running shoes matter a lot."));
        assert!(!text.contains("Home About Contact"));
        assert!(!text.contains("Copyright"));
        assert!(!text.contains("FAQPage"));
        assert!(!text.contains("Best Running Shoes & Gear"));
    }

    #[test]
    fn main_text_skips_comments() {
        let text = main_text("<body><!-- hidden note --><p>visible</p></body>").expect("text");
        assert_eq!(text, "visible");
    }

    #[test]
    fn word_count_counts_whitespace_separated_tokens() {
        assert_eq!(word_count("one two  three\nfour"), 4);
        assert_eq!(word_count(""), 0);
    }
}
