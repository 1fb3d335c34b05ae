use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {service}")]
    UnexpectedStatus { service: &'static str, status: u16 },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{service} returned an empty response")]
    EmptyResponse { service: &'static str },

    #[error("transcript unavailable for video {video_id}: {reason}")]
    Transcript { video_id: String, reason: String },

    #[error("transcript client could not be constructed: {0}")]
    TranscriptClient(String),

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
