use std::net::SocketAddr;
use std::time::Duration;

/// Pauses applied between outbound calls during a research run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    pub video_pause_ms: u64,
    pub question_pause_ms: u64,
    pub keyword_pause_ms: u64,
}

impl ThrottleConfig {
    #[must_use]
    pub fn video_pause(&self) -> Duration {
        Duration::from_millis(self.video_pause_ms)
    }

    #[must_use]
    pub fn question_pause(&self) -> Duration {
        Duration::from_millis(self.question_pause_ms)
    }

    #[must_use]
    pub fn keyword_pause(&self) -> Duration {
        Duration::from_millis(self.keyword_pause_ms)
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            video_pause_ms: 1_000,
            question_pause_ms: 500,
            keyword_pause_ms: 1_000,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub llm_model: String,
    pub llm_base_url: String,
    pub search_base_url: String,
    pub youtube_api_base_url: String,
    pub youtube_api_key: Option<String>,
    pub throttle: ThrottleConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("llm_model", &self.llm_model)
            .field("llm_base_url", &self.llm_base_url)
            .field("search_base_url", &self.search_base_url)
            .field("youtube_api_base_url", &self.youtube_api_base_url)
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("throttle", &self.throttle)
            .finish()
    }
}
