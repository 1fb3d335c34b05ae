//! Caller-supplied API credentials, carried as an explicit per-request value.

/// Substring that Groq API keys carry. Used only as a quick local sanity
/// filter; the service still has the final say on each call.
const MODEL_KEY_MARKER: &str = "gsk_";

#[derive(Clone)]
pub struct Credentials {
    pub serper_key: String,
    pub groq_key: String,
}

impl Credentials {
    #[must_use]
    pub fn new(serper_key: impl Into<String>, groq_key: impl Into<String>) -> Self {
        Self {
            serper_key: serper_key.into().trim().to_string(),
            groq_key: groq_key.into().trim().to_string(),
        }
    }

    /// Whether the model key passes the local pre-check.
    ///
    /// A key failing this check leaves the language model inactive for the
    /// whole run: every model-backed field gets the "AI Not Active" sentinel.
    #[must_use]
    pub fn model_key_is_plausible(&self) -> bool {
        !self.groq_key.is_empty() && self.groq_key.contains(MODEL_KEY_MARKER)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("serper_key", &"[redacted]")
            .field("groq_key", &"[redacted]")
            .finish()
    }
}
