//! Runs the six phases for each keyword and merges the results.

use seohub_core::ResearchTables;

use crate::phases::{
    ai_insights, audience_voice, community_questions, generate_brief, generate_persona,
    research_competitors, video_strategy,
};
use crate::services::Services;
use crate::throttle::Throttle;

/// Researches one keyword. Phases run in order; the brief is written from
/// the persona produced just before it.
pub async fn research_keyword(
    services: &Services,
    throttle: &Throttle,
    keyword: &str,
) -> ResearchTables {
    tracing::info!(keyword, "phase 1: competitors");
    let competitors = research_competitors(services, keyword).await;

    tracing::info!(keyword, "phase 2: community");
    let community = community_questions(services.search.as_ref(), keyword).await;

    tracing::info!(keyword, "phase 3: youtube");
    let videos = video_strategy(services, throttle, keyword).await;

    tracing::info!(keyword, "phase 4: ai insights");
    let qa = ai_insights(services, throttle, keyword).await;

    tracing::info!(keyword, "phase 5: persona");
    let voices = audience_voice(services.comments.as_deref(), &videos).await;
    let persona = generate_persona(services.model(), keyword, &community, &videos, &voices).await;

    tracing::info!(keyword, "phase 6: content brief");
    let brief = generate_brief(services.model(), keyword, &persona.persona).await;

    ResearchTables {
        competitors,
        community,
        videos,
        qa,
        personas: vec![persona],
        briefs: vec![brief],
    }
}

/// Researches every keyword in order, pausing between keywords.
pub async fn run_research(
    services: &Services,
    throttle: &Throttle,
    keywords: &[String],
) -> ResearchTables {
    let mut tables = ResearchTables::default();

    for (index, keyword) in keywords.iter().enumerate() {
        tracing::info!(keyword = %keyword, position = index + 1, total = keywords.len(), "researching keyword");
        tables.append(research_keyword(services, throttle, keyword).await);
        throttle.after_keyword().await;
    }

    tracing::info!(
        keywords = keywords.len(),
        competitors = tables.competitors.len(),
        community = tables.community.len(),
        videos = tables.videos.len(),
        qa = tables.qa.len(),
        "research run complete"
    );
    tables
}
