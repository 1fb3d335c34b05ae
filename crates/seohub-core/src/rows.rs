//! Row types for the six report tables.
//!
//! Every row keeps its full field set even when the upstream call failed;
//! failures are encoded as the sentinel strings in [`sentinel`].

/// Placeholder values substituted when real data could not be obtained.
pub mod sentinel {
    pub const NOT_AVAILABLE: &str = "N/A";
    pub const AI_NOT_ACTIVE: &str = "AI Not Active";
    pub const AI_ERROR: &str = "AI Error";
    pub const SEARCH_FAILED: &str = "Search Failed";
    pub const NO_DATA: &str = "No Data Available";
    pub const PERSONA_ERROR: &str = "Error generating persona";
}

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Count(u64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

/// A row that can be written into one sheet of the report.
pub trait SheetRow {
    /// Column headers, in output order.
    const HEADERS: &'static [&'static str];

    /// Cell values, one per header.
    fn cells(&self) -> Vec<Cell>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Success,
    Failed,
}

impl FetchStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FetchStatus::Success => "Success",
            FetchStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorPage {
    pub url: String,
    pub status: FetchStatus,
    pub title: String,
    pub meta_description: String,
    pub headings: String,
    pub has_faq_schema: bool,
    pub word_count: u64,
}

impl CompetitorPage {
    /// The row recorded when a page could not be fetched or parsed.
    #[must_use]
    pub fn failed(url: &str) -> Self {
        Self {
            url: url.to_string(),
            status: FetchStatus::Failed,
            title: sentinel::NOT_AVAILABLE.to_string(),
            meta_description: sentinel::NOT_AVAILABLE.to_string(),
            headings: sentinel::NOT_AVAILABLE.to_string(),
            has_faq_schema: false,
            word_count: 0,
        }
    }
}

impl SheetRow for CompetitorPage {
    const HEADERS: &'static [&'static str] = &[
        "URL",
        "Status",
        "Meta Title",
        "Meta Description",
        "Headings (H1-H3)",
        "FAQ Schema",
        "Word Count",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.url.as_str().into(),
            self.status.as_str().into(),
            self.title.as_str().into(),
            self.meta_description.as_str().into(),
            self.headings.as_str().into(),
            if self.has_faq_schema { "YES" } else { "No" }.into(),
            Cell::Count(self.word_count),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Reddit,
    Quora,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Reddit, Platform::Quora];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Reddit => "Reddit",
            Platform::Quora => "Quora",
        }
    }

    /// Search operator restricting results to this platform.
    #[must_use]
    pub fn site_operator(self) -> &'static str {
        match self {
            Platform::Reddit => "site:reddit.com",
            Platform::Quora => "site:quora.com",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityQuestion {
    pub keyword: String,
    pub platform: Platform,
    pub question: String,
    pub link: String,
}

impl SheetRow for CommunityQuestion {
    const HEADERS: &'static [&'static str] = &["Keyword", "Platform", "Question", "Link"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.keyword.as_str().into(),
            self.platform.as_str().into(),
            self.question.as_str().into(),
            self.link.as_str().into(),
        ]
    }
}

/// Which text a video strategy was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Transcript,
    Snippet,
}

impl TextSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TextSource::Transcript => "Transcript",
            TextSource::Snippet => "Snippet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoStrategyRow {
    pub keyword: String,
    pub title: String,
    pub strategy: String,
    pub source: TextSource,
    pub url: String,
}

impl SheetRow for VideoStrategyRow {
    const HEADERS: &'static [&'static str] =
        &["Keyword", "Video Title", "AI Strategy", "Source Used", "URL"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.keyword.as_str().into(),
            self.title.as_str().into(),
            self.strategy.as_str().into(),
            self.source.as_str().into(),
            self.url.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaEntry {
    pub keyword: String,
    pub question: String,
    pub answer: String,
    pub citations: String,
}

impl SheetRow for QaEntry {
    const HEADERS: &'static [&'static str] = &["Keyword", "Question", "Answer", "Citations"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.keyword.as_str().into(),
            self.question.as_str().into(),
            self.answer.as_str().into(),
            self.citations.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaReport {
    pub keyword: String,
    pub persona: String,
}

impl SheetRow for PersonaReport {
    const HEADERS: &'static [&'static str] = &["Keyword", "User Persona"];

    fn cells(&self) -> Vec<Cell> {
        vec![self.keyword.as_str().into(), self.persona.as_str().into()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBrief {
    pub keyword: String,
    pub brief: String,
}

impl SheetRow for ContentBrief {
    const HEADERS: &'static [&'static str] = &["Keyword", "Content Brief"];

    fn cells(&self) -> Vec<Cell> {
        vec![self.keyword.as_str().into(), self.brief.as_str().into()]
    }
}

/// The six phase tables produced by a research run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResearchTables {
    pub competitors: Vec<CompetitorPage>,
    pub community: Vec<CommunityQuestion>,
    pub videos: Vec<VideoStrategyRow>,
    pub qa: Vec<QaEntry>,
    pub personas: Vec<PersonaReport>,
    pub briefs: Vec<ContentBrief>,
}

impl ResearchTables {
    /// Appends every table of `other` onto the matching table of `self`.
    pub fn append(&mut self, other: ResearchTables) {
        self.competitors.extend(other.competitors);
        self.community.extend(other.community);
        self.videos.extend(other.videos);
        self.qa.extend(other.qa);
        self.personas.extend(other.personas);
        self.briefs.extend(other.briefs);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
            && self.community.is_empty()
            && self.videos.is_empty()
            && self.qa.is_empty()
            && self.personas.is_empty()
            && self.briefs.is_empty()
    }
}
