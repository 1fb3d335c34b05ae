//! Keyword research pipeline: external service adapters, the six research
//! phases, and the run orchestrator that merges them into report tables.

pub mod comments;
pub mod error;
pub mod html;
pub mod llm;
pub mod page;
pub mod phases;
pub mod pipeline;
pub mod search;
pub mod services;
mod text;
pub mod throttle;
pub mod transcript;
pub mod video_id;

pub use comments::{CommentSource, YoutubeCommentsClient};
pub use error::ResearchError;
pub use llm::{ChatMessage, CompletionParams, GroqClient, LanguageModel, Role};
pub use page::{FetchedPage, HttpPageFetcher, PageFetcher};
pub use pipeline::{research_keyword, run_research};
pub use search::{SearchResult, SerperClient, WebSearch};
pub use services::{LiveServiceFactory, ServiceFactory, Services};
pub use throttle::Throttle;
pub use transcript::{TranscriptSegment, TranscriptSource, YoutubeTranscripts};
pub use video_id::video_id_from_url;
