//! In-memory adapter doubles for phase and pipeline tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::comments::CommentSource;
use crate::error::ResearchError;
use crate::llm::{ChatMessage, CompletionParams, LanguageModel};
use crate::page::{FetchedPage, PageFetcher};
use crate::search::{SearchResult, WebSearch};
use crate::services::Services;
use crate::transcript::{TranscriptSegment, TranscriptSource};

pub(crate) fn result(title: &str, link: &str, snippet: &str) -> SearchResult {
    SearchResult {
        title: title.to_string(),
        link: link.to_string(),
        snippet: snippet.to_string(),
    }
}

pub(crate) fn segment(text: &str) -> TranscriptSegment {
    TranscriptSegment {
        text: text.to_string(),
    }
}

/// Scripted search: known queries return their results (or fail), unknown
/// queries return nothing.
#[derive(Default)]
pub(crate) struct FakeSearch {
    responses: HashMap<String, Option<Vec<SearchResult>>>,
    calls: Arc<Mutex<Vec<(String, usize)>>>,
}

impl FakeSearch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, query: &str, results: Vec<SearchResult>) -> Self {
        self.responses.insert(query.to_string(), Some(results));
        self
    }

    pub(crate) fn failing(mut self, query: &str) -> Self {
        self.responses.insert(query.to_string(), None);
        self
    }

    pub(crate) fn call_log(&self) -> Arc<Mutex<Vec<(String, usize)>>> {
        Arc::clone(&self.calls)
    }

    pub(crate) fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().expect("call log").clone()
    }
}

#[async_trait]
impl WebSearch for FakeSearch {
    async fn search(&self, query: &str, num: usize) -> Result<Vec<SearchResult>, ResearchError> {
        self.calls
            .lock()
            .expect("call log")
            .push((query.to_string(), num));
        match self.responses.get(query) {
            Some(Some(results)) => Ok(results.clone()),
            Some(None) => Err(ResearchError::UnexpectedStatus {
                service: "fake search",
                status: 500,
            }),
            None => Ok(Vec::new()),
        }
    }
}

#[derive(Default)]
pub(crate) struct FakePages {
    pages: HashMap<String, String>,
}

impl FakePages {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }
}

#[async_trait]
impl PageFetcher for FakePages {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, ResearchError> {
        self.pages
            .get(url)
            .map(|html| FetchedPage::from_html(html.clone()))
            .ok_or(ResearchError::UnexpectedStatus {
                service: "fake page",
                status: 404,
            })
    }
}

#[derive(Default)]
pub(crate) struct FakeTranscripts {
    transcripts: HashMap<String, Vec<TranscriptSegment>>,
}

impl FakeTranscripts {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, video_id: &str, segments: Vec<TranscriptSegment>) -> Self {
        self.transcripts.insert(video_id.to_string(), segments);
        self
    }
}

#[async_trait]
impl TranscriptSource for FakeTranscripts {
    async fn fetch(
        &self,
        video_id: &str,
        _languages: &[&str],
    ) -> Result<Vec<TranscriptSegment>, ResearchError> {
        self.transcripts
            .get(video_id)
            .cloned()
            .ok_or_else(|| ResearchError::Transcript {
                video_id: video_id.to_string(),
                reason: "transcripts disabled".to_string(),
            })
    }
}

#[derive(Default)]
pub(crate) struct FakeComments {
    comments: HashMap<String, Vec<String>>,
}

impl FakeComments {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, video_id: &str, comments: &[&str]) -> Self {
        self.comments.insert(
            video_id.to_string(),
            comments.iter().map(ToString::to_string).collect(),
        );
        self
    }
}

#[async_trait]
impl CommentSource for FakeComments {
    async fn top_comments(
        &self,
        video_id: &str,
        limit: usize,
    ) -> Result<Vec<String>, ResearchError> {
        self.comments
            .get(video_id)
            .map(|c| c.iter().take(limit).cloned().collect())
            .ok_or(ResearchError::UnexpectedStatus {
                service: "fake comments",
                status: 403,
            })
    }
}

type Responder = dyn Fn(&[ChatMessage]) -> Result<String, ResearchError> + Send + Sync;

/// Language model double that records every prompt it receives.
pub(crate) struct FakeModel {
    responder: Box<Responder>,
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl FakeModel {
    pub(crate) fn responding<F>(responder: F) -> Self
    where
        F: Fn(&[ChatMessage]) -> Result<String, ResearchError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::responding(move |_| Ok(text.clone()))
    }

    pub(crate) fn failing() -> Self {
        Self::responding(|_| Err(ResearchError::EmptyResponse { service: "fake model" }))
    }

    pub(crate) fn call_count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub(crate) fn prompt_log(&self) -> Arc<Mutex<Vec<Vec<ChatMessage>>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl LanguageModel for FakeModel {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _params: CompletionParams,
    ) -> Result<String, ResearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .expect("prompt log")
            .push(messages.to_vec());
        (self.responder)(messages)
    }
}

/// Assembles a [`Services`] set from fakes; unset adapters are empty.
pub(crate) struct ServicesBuilder {
    search: FakeSearch,
    pages: FakePages,
    transcripts: FakeTranscripts,
    comments: Option<FakeComments>,
    model: Option<FakeModel>,
}

impl ServicesBuilder {
    pub(crate) fn new() -> Self {
        Self {
            search: FakeSearch::new(),
            pages: FakePages::new(),
            transcripts: FakeTranscripts::new(),
            comments: None,
            model: None,
        }
    }

    pub(crate) fn search(mut self, search: FakeSearch) -> Self {
        self.search = search;
        self
    }

    pub(crate) fn pages(mut self, pages: FakePages) -> Self {
        self.pages = pages;
        self
    }

    pub(crate) fn transcripts(mut self, transcripts: FakeTranscripts) -> Self {
        self.transcripts = transcripts;
        self
    }

    pub(crate) fn comments(mut self, comments: FakeComments) -> Self {
        self.comments = Some(comments);
        self
    }

    pub(crate) fn model(mut self, model: FakeModel) -> Self {
        self.model = Some(model);
        self
    }

    pub(crate) fn build(self) -> Services {
        Services {
            search: Box::new(self.search),
            pages: Box::new(self.pages),
            transcripts: Box::new(self.transcripts),
            comments: self
                .comments
                .map(|c| Box::new(c) as Box<dyn CommentSource>),
            model: self.model.map(|m| Box::new(m) as Box<dyn LanguageModel>),
        }
    }
}
