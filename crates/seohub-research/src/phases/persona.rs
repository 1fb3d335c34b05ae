//! Phases 5 and 6: audience persona and the content brief built on it.

use seohub_core::rows::sentinel;
use seohub_core::{CommunityQuestion, ContentBrief, PersonaReport, VideoStrategyRow};

use crate::comments::CommentSource;
use crate::llm::{ChatMessage, CompletionParams, LanguageModel};
use crate::text::{collapse_whitespace, truncate_chars};
use crate::video_id::video_id_from_url;

const MAX_PAIN_POINTS: usize = 15;
const MAX_INTERESTS: usize = 10;
const COMMENTS_PER_VIDEO: usize = 5;
const MAX_VOICE_LINES: usize = 15;
const PERSONA_EXCERPT_CHARS: usize = 2000;

const PERSONA_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.6,
    max_tokens: 800,
};

const BRIEF_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.5,
    max_tokens: 1500,
};

fn bullet_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Top comments from the keyword's videos, flattened to single lines.
///
/// Returns nothing when no comment source is configured. A failing video is
/// skipped; the rest still contribute.
pub async fn audience_voice(
    comments: Option<&dyn CommentSource>,
    videos: &[VideoStrategyRow],
) -> Vec<String> {
    let Some(comments) = comments else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    for video in videos {
        if lines.len() >= MAX_VOICE_LINES {
            break;
        }
        let Some(video_id) = video_id_from_url(&video.url) else {
            continue;
        };
        match comments.top_comments(&video_id, COMMENTS_PER_VIDEO).await {
            Ok(texts) => lines.extend(
                texts
                    .iter()
                    .map(|t| collapse_whitespace(t))
                    .filter(|t| !t.is_empty())
                    .take(COMMENTS_PER_VIDEO),
            ),
            Err(e) => {
                tracing::warn!(video_id = %video_id, phase = "persona", error = %e, "comment fetch failed");
            }
        }
    }

    lines.truncate(MAX_VOICE_LINES);
    lines
}

fn persona_prompt(
    keyword: &str,
    community: &[CommunityQuestion],
    videos: &[VideoStrategyRow],
    voices: &[String],
) -> String {
    let pain_points = bullet_list(
        community
            .iter()
            .take(MAX_PAIN_POINTS)
            .map(|c| c.question.as_str()),
    );
    let interests = bullet_list(videos.iter().take(MAX_INTERESTS).map(|v| v.title.as_str()));

    let mut prompt = format!(
        "Act as a Senior Strategist. Create a detailed USER PERSONA for '{keyword}'.\n\
         DATA SOURCE (PAIN POINTS):\n{pain_points}\n\
         DATA SOURCE (INTERESTS):\n{interests}\n"
    );
    if !voices.is_empty() {
        prompt.push_str("AUDIENCE VOICE (viewer comments):\n");
        prompt.push_str(&bullet_list(voices.iter().map(String::as_str)));
        prompt.push('\n');
    }
    prompt.push_str(
        "\nOutput exact sections:\n\
         1. NAME & ROLE\n\
         2. DEMOGRAPHICS\n\
         3. PSYCHOGRAPHICS\n\
         4. BEHAVIOR\n\
         5. CONTENT STYLE",
    );
    prompt
}

pub async fn generate_persona(
    model: Option<&dyn LanguageModel>,
    keyword: &str,
    community: &[CommunityQuestion],
    videos: &[VideoStrategyRow],
    voices: &[String],
) -> PersonaReport {
    let persona = match model {
        None => sentinel::AI_NOT_ACTIVE.to_string(),
        Some(model) => {
            let prompt = persona_prompt(keyword, community, videos, voices);
            match model.complete(&[ChatMessage::user(prompt)], PERSONA_PARAMS).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(keyword, phase = "persona", error = %e, "persona generation failed");
                    sentinel::PERSONA_ERROR.to_string()
                }
            }
        }
    };

    PersonaReport {
        keyword: keyword.to_string(),
        persona,
    }
}

fn brief_prompt(keyword: &str, persona: &str) -> String {
    let persona = truncate_chars(persona, PERSONA_EXCERPT_CHARS);
    format!(
        "Act as an SEO Content Strategist.\n\n\
         CONTEXT:\n\
         Target Keyword: {keyword}\n\
         Target Audience Persona: {persona}\n\
         Target Word Count: 1500-2000 Words\n\
         Keyword Density: 1.5%\n\n\
         TASK 1: FILL THIS SEO TABLE\n\
         - Recommended Title (Include '{keyword}', catchy)\n\
         - Article Slug (URL friendly)\n\
         - Meta Description (Include '{keyword}', enticing, under 160 chars)\n\
         - H1 Tag (Includes '{keyword}')\n\n\
         TASK 2: CREATE DETAILED BLOG STRUCTURE\n\
         Create an outline (H2, H3). For EACH section provided:\n\
         1. Content Suggestions: What to write? (Address persona pain points).\n\
         2. Unique Insight: Add a unique angle or data point.\n\
         3. Expert Commentary Idea: What topic should a writer get a quote on?\n\
         4. Intent/Objective: What do we convey here?\n\
         5. Keywords to use: List related keywords.\n\
         6. Est Word Count for this section.\n\n\
         TASK 3: FAQs\n\
         - List 5 FAQs based on user intent.\n\n\
         Format the output clearly."
    )
}

/// Writes the content brief for `keyword` from the persona text.
pub async fn generate_brief(
    model: Option<&dyn LanguageModel>,
    keyword: &str,
    persona: &str,
) -> ContentBrief {
    let brief = match model {
        None => sentinel::AI_NOT_ACTIVE.to_string(),
        Some(model) => match model
            .complete(&[ChatMessage::user(brief_prompt(keyword, persona))], BRIEF_PARAMS)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(keyword, phase = "content_brief", error = %e, "brief generation failed");
                format!("Error: {e}")
            }
        },
    };

    ContentBrief {
        keyword: keyword.to_string(),
        brief,
    }
}
