//! The per-request set of external service adapters.

use seohub_core::{AppConfig, Credentials};

use crate::comments::{CommentSource, YoutubeCommentsClient};
use crate::error::ResearchError;
use crate::llm::{GroqClient, LanguageModel};
use crate::page::{HttpPageFetcher, PageFetcher};
use crate::search::{SerperClient, WebSearch};
use crate::transcript::{TranscriptSource, YoutubeTranscripts};

/// Adapters used by one research run.
///
/// `model` is `None` when the caller's model credential failed the local
/// pre-check; every model-backed field then gets the "AI Not Active"
/// sentinel without a call being attempted. `comments` is `None` unless a
/// YouTube Data API key is configured.
pub struct Services {
    pub search: Box<dyn WebSearch>,
    pub pages: Box<dyn PageFetcher>,
    pub transcripts: Box<dyn TranscriptSource>,
    pub comments: Option<Box<dyn CommentSource>>,
    pub model: Option<Box<dyn LanguageModel>>,
}

impl Services {
    #[must_use]
    pub fn model(&self) -> Option<&dyn LanguageModel> {
        self.model.as_deref()
    }
}

/// Builds a [`Services`] set from caller credentials.
pub trait ServiceFactory: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ResearchError`] if an adapter client cannot be constructed.
    fn build(&self, credentials: &Credentials) -> Result<Services, ResearchError>;
}

/// Factory producing the production adapters.
#[derive(Debug, Clone)]
pub struct LiveServiceFactory {
    config: AppConfig,
}

impl LiveServiceFactory {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl ServiceFactory for LiveServiceFactory {
    fn build(&self, credentials: &Credentials) -> Result<Services, ResearchError> {
        let cfg = &self.config;

        let search = SerperClient::with_base_url(
            &credentials.serper_key,
            cfg.request_timeout_secs,
            &cfg.user_agent,
            &cfg.search_base_url,
        )?;

        let model: Option<Box<dyn LanguageModel>> = if credentials.model_key_is_plausible() {
            Some(Box::new(GroqClient::with_base_url(
                &credentials.groq_key,
                &cfg.llm_model,
                cfg.request_timeout_secs,
                &cfg.user_agent,
                &cfg.llm_base_url,
            )?))
        } else {
            tracing::info!("model credential failed pre-check; AI phases disabled for this run");
            None
        };

        let comments: Option<Box<dyn CommentSource>> = match &cfg.youtube_api_key {
            Some(key) => Some(Box::new(YoutubeCommentsClient::with_base_url(
                key,
                cfg.request_timeout_secs,
                &cfg.user_agent,
                &cfg.youtube_api_base_url,
            )?)),
            None => None,
        };

        Ok(Services {
            search: Box::new(search),
            pages: Box::new(HttpPageFetcher::new(cfg.request_timeout_secs)?),
            transcripts: Box::new(YoutubeTranscripts::new()?),
            comments,
            model,
        })
    }
}
