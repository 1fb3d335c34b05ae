//! The six research phases. Each phase owns its failure policy: adapter
//! errors are logged and turned into sentinel values or skipped rows, never
//! returned to the caller.

pub mod community;
pub mod competitors;
pub mod persona;
pub mod qa;
pub mod videos;

pub use community::community_questions;
pub use competitors::research_competitors;
pub use persona::{audience_voice, generate_brief, generate_persona};
pub use qa::ai_insights;
pub use videos::video_strategy;

#[cfg(test)]
pub(crate) mod fakes;
