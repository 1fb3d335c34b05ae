//! Fixed pauses between outbound calls, keeping a run under the external
//! services' rate limits.

use std::time::Duration;

use seohub_core::ThrottleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Throttle {
    pub video_pause: Duration,
    pub question_pause: Duration,
    pub keyword_pause: Duration,
}

impl Throttle {
    /// No pauses at all. Used by tests and dry runs.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    pub async fn after_video(&self) {
        pause(self.video_pause).await;
    }

    pub async fn after_question(&self) {
        pause(self.question_pause).await;
    }

    pub async fn after_keyword(&self) {
        pause(self.keyword_pause).await;
    }
}

impl From<ThrottleConfig> for Throttle {
    fn from(config: ThrottleConfig) -> Self {
        Self {
            video_pause: config.video_pause(),
            question_pause: config.question_pause(),
            keyword_pause: config.keyword_pause(),
        }
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
