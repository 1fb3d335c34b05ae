//! Shared configuration, credentials, and report row types for the SEO
//! research hub.

pub mod app_config;
pub mod config;
pub mod credentials;
pub mod keywords;
pub mod rows;

use thiserror::Error;

pub use app_config::{AppConfig, ThrottleConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use credentials::Credentials;
pub use keywords::normalize_keywords;
pub use rows::{
    Cell, CommunityQuestion, CompetitorPage, ContentBrief, FetchStatus, Platform, PersonaReport,
    QaEntry, ResearchTables, SheetRow, TextSource, VideoStrategyRow,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
