use crate::app_config::{AppConfig, ThrottleConfig};
use crate::ConfigError;

pub const DEFAULT_LLM_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://google.serper.dev";
pub const DEFAULT_YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional. API credentials for search and the language
/// model arrive per request, so nothing here is required to boot.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let bind_addr = {
        let raw = or_default("SEOHUB_BIND_ADDR", "0.0.0.0:5000");
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "SEOHUB_BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?
    };

    let log_level = or_default("SEOHUB_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("SEOHUB_REQUEST_TIMEOUT_SECS", "60")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SEOHUB_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("SEOHUB_USER_AGENT", "seohub/0.1 (keyword-research)");
    let llm_model = or_default("SEOHUB_LLM_MODEL", DEFAULT_LLM_MODEL);
    let llm_base_url = or_default("SEOHUB_LLM_BASE_URL", DEFAULT_LLM_BASE_URL);
    let search_base_url = or_default("SEOHUB_SEARCH_BASE_URL", DEFAULT_SEARCH_BASE_URL);
    let youtube_api_base_url =
        or_default("SEOHUB_YOUTUBE_API_BASE_URL", DEFAULT_YOUTUBE_API_BASE_URL);
    let youtube_api_key = lookup("YOUTUBE_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    let throttle = ThrottleConfig {
        video_pause_ms: parse_u64("SEOHUB_VIDEO_PAUSE_MS", "1000")?,
        question_pause_ms: parse_u64("SEOHUB_QUESTION_PAUSE_MS", "500")?,
        keyword_pause_ms: parse_u64("SEOHUB_KEYWORD_PAUSE_MS", "1000")?,
    };

    Ok(AppConfig {
        bind_addr,
        log_level,
        request_timeout_secs,
        user_agent,
        llm_model,
        llm_base_url,
        search_base_url,
        youtube_api_base_url,
        youtube_api_key,
        throttle,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
