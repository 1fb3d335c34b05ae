//! Phase 4: AI-generated questions answered from live search snippets.

use seohub_core::rows::sentinel;
use seohub_core::QaEntry;

use crate::llm::{ChatMessage, CompletionParams, LanguageModel};
use crate::search::SearchResult;
use crate::services::Services;
use crate::throttle::Throttle;

const MAX_QUESTIONS: usize = 5;
const RESEARCH_RESULTS: usize = 3;

const QUESTION_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.7,
    max_tokens: 150,
};

const ANSWER_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.5,
    max_tokens: 400,
};

/// An answer and its newline-joined source links, or a sentinel pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchedAnswer {
    pub answer: String,
    pub citations: String,
}

impl ResearchedAnswer {
    fn sentinel(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            citations: sentinel::NOT_AVAILABLE.to_string(),
        }
    }
}

/// Lines containing a question mark, with list markers stripped, capped at five.
#[must_use]
pub fn parse_questions(raw: &str) -> Vec<String> {
    raw.lines()
        .filter(|line| line.contains('?'))
        .map(|line| {
            line.trim_matches(|c: char| matches!(c, '-' | '*' | '•' | ' '))
                .trim()
                .to_string()
        })
        .filter(|q| !q.is_empty())
        .take(MAX_QUESTIONS)
        .collect()
}

/// Asks the model for up to five technical questions about `keyword`.
/// Inactive model or failure: no questions.
pub async fn generate_questions(model: Option<&dyn LanguageModel>, keyword: &str) -> Vec<String> {
    let Some(model) = model else {
        return Vec::new();
    };

    let prompt = format!(
        "List 5 specific, high-value technical SEO questions about '{keyword}'. Return only the questions."
    );
    match model
        .complete(&[ChatMessage::user(prompt)], QUESTION_PARAMS)
        .await
    {
        Ok(raw) => parse_questions(&raw),
        Err(e) => {
            tracing::warn!(keyword, phase = "ai_insights", error = %e, "question generation failed");
            Vec::new()
        }
    }
}

/// Numbered source lines handed to the model as its only evidence.
#[must_use]
pub fn source_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("Source {}: {} (URL: {})\n", i + 1, r.snippet, r.link))
        .collect()
}

/// Searches `question` and has the model answer from the top three snippets.
pub async fn research_answer(services: &Services, question: &str) -> ResearchedAnswer {
    let Some(model) = services.model() else {
        return ResearchedAnswer::sentinel(sentinel::AI_NOT_ACTIVE);
    };

    let results = match services.search.search(question, RESEARCH_RESULTS).await {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!(question, phase = "ai_insights", error = %e, "research search failed");
            return ResearchedAnswer::sentinel(sentinel::SEARCH_FAILED);
        }
    };

    let context = source_context(&results);
    let prompt = format!(
        "Question: {question}\nData:\n{context}\nTask: Answer using the data. Cite sources."
    );

    match model.complete(&[ChatMessage::user(prompt)], ANSWER_PARAMS).await {
        Ok(answer) => ResearchedAnswer {
            answer,
            citations: results
                .iter()
                .map(|r| r.link.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        },
        Err(e) => {
            tracing::warn!(question, phase = "ai_insights", error = %e, "research answer failed");
            ResearchedAnswer::sentinel(sentinel::AI_ERROR)
        }
    }
}

pub async fn ai_insights(services: &Services, throttle: &Throttle, keyword: &str) -> Vec<QaEntry> {
    let questions = generate_questions(services.model(), keyword).await;
    let mut rows = Vec::with_capacity(questions.len());

    for question in questions {
        let researched = research_answer(services, &question).await;
        rows.push(QaEntry {
            keyword: keyword.to_string(),
            question,
            answer: researched.answer,
            citations: researched.citations,
        });
        throttle.after_question().await;
    }

    rows
}
