//! `POST /generate`: runs the research pipeline for the caller's keywords and
//! returns the workbook as a download.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};
use seohub_core::{normalize_keywords, Credentials};
use seohub_report::{build_workbook, REPORT_FILENAME, XLSX_CONTENT_TYPE};
use seohub_research::run_research;
use serde::Deserialize;

use super::{ApiError, AppState};
use crate::middleware::RequestId;

const MISSING_INPUT: &str = "Missing API keys or keywords";

#[derive(Debug, Deserialize)]
pub(super) struct GenerateRequest {
    groq_key: Option<String>,
    serper_key: Option<String>,
    keywords: Option<Vec<String>>,
}

impl GenerateRequest {
    /// Credentials and cleaned keywords, or `None` if anything required is
    /// missing or blank.
    fn into_parts(self) -> Option<(Credentials, Vec<String>)> {
        let credentials = Credentials::new(self.serper_key?, self.groq_key?);
        if credentials.serper_key.is_empty() || credentials.groq_key.is_empty() {
            return None;
        }
        let keywords = normalize_keywords(self.keywords?);
        (!keywords.is_empty()).then_some((credentials, keywords))
    }
}

pub(super) async fn generate(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(request_id = %req_id.0, error = %rejection, "rejected generate body");
            return Err(ApiError::bad_request(MISSING_INPUT));
        }
    };
    let (credentials, keywords) = request
        .into_parts()
        .ok_or_else(|| ApiError::bad_request(MISSING_INPUT))?;

    tracing::info!(
        request_id = %req_id.0,
        keywords = keywords.len(),
        model_active = credentials.model_key_is_plausible(),
        "generate request accepted"
    );

    let services = state.factory.build(&credentials).map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "service construction failed");
        ApiError::internal(e.to_string())
    })?;

    let tables = run_research(&services, &state.throttle, &keywords).await;

    let workbook = build_workbook(&tables).map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "report assembly failed");
        ApiError::internal(e.to_string())
    })?;

    tracing::info!(request_id = %req_id.0, bytes = workbook.len(), "report generated");

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        workbook,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use seohub_research::{
        FetchedPage, PageFetcher, ResearchError, SearchResult, ServiceFactory, Services,
        Throttle, TranscriptSegment, TranscriptSource, WebSearch,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::api::build_app;

    struct EmptySearch;

    #[async_trait]
    impl WebSearch for EmptySearch {
        async fn search(
            &self,
            _query: &str,
            _num: usize,
        ) -> Result<Vec<SearchResult>, ResearchError> {
            Ok(Vec::new())
        }
    }

    struct NoPages;

    #[async_trait]
    impl PageFetcher for NoPages {
        async fn fetch(&self, _url: &str) -> Result<FetchedPage, ResearchError> {
            Err(ResearchError::EmptyResponse { service: "test page" })
        }
    }

    struct NoTranscripts;

    #[async_trait]
    impl TranscriptSource for NoTranscripts {
        async fn fetch(
            &self,
            video_id: &str,
            _languages: &[&str],
        ) -> Result<Vec<TranscriptSegment>, ResearchError> {
            Err(ResearchError::Transcript {
                video_id: video_id.to_string(),
                reason: "disabled".to_string(),
            })
        }
    }

    /// Offline factory; records the credentials it was handed.
    #[derive(Default)]
    struct OfflineFactory {
        seen: Mutex<Vec<Credentials>>,
    }

    impl ServiceFactory for OfflineFactory {
        fn build(&self, credentials: &Credentials) -> Result<Services, ResearchError> {
            self.seen.lock().expect("seen").push(credentials.clone());
            Ok(Services {
                search: Box::new(EmptySearch),
                pages: Box::new(NoPages),
                transcripts: Box::new(NoTranscripts),
                comments: None,
                model: None,
            })
        }
    }

    struct BrokenFactory;

    impl ServiceFactory for BrokenFactory {
        fn build(&self, _credentials: &Credentials) -> Result<Services, ResearchError> {
            Err(ResearchError::InvalidBaseUrl {
                base_url: "::".to_string(),
                reason: "bad".to_string(),
            })
        }
    }

    fn app_with(factory: Arc<dyn ServiceFactory>) -> Router {
        build_app(AppState {
            factory,
            throttle: Throttle::none(),
        })
    }

    fn post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn error_message(response: Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
        json["error"].as_str().expect("error field").to_string()
    }

    #[tokio::test]
    async fn missing_fields_are_bad_request() {
        let bodies = [
            r#"{"serper_key":"s","keywords":["crm"]}"#,
            r#"{"groq_key":"gsk_x","keywords":["crm"]}"#,
            r#"{"groq_key":"gsk_x","serper_key":"s"}"#,
            r#"{"groq_key":"gsk_x","serper_key":"  ","keywords":["crm"]}"#,
            r#"{"groq_key":"gsk_x","serper_key":"s","keywords":[]}"#,
            r#"{"groq_key":"gsk_x","serper_key":"s","keywords":["  ",""]}"#,
        ];

        for body in bodies {
            let response = app_with(Arc::new(OfflineFactory::default()))
                .oneshot(post(body))
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(error_message(response).await, "Missing API keys or keywords");
        }
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let response = app_with(Arc::new(OfflineFactory::default()))
            .oneshot(post("{not json"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(response).await, "Missing API keys or keywords");
    }

    #[tokio::test]
    async fn valid_request_returns_workbook() {
        let factory = Arc::new(OfflineFactory::default());
        let response = app_with(factory.clone())
            .oneshot(post(
                r#"{"groq_key":" not-a-groq-key ","serper_key":" serper ","keywords":[" crm ",""]}"#,
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some(XLSX_CONTENT_TYPE)
        );
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok()),
            Some("attachment; filename=\"SEO_Master_Plan.xlsx\"")
        );
        assert!(response.headers().contains_key("x-request-id"));

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        assert!(body.starts_with(b"PK"));

        let seen = factory.seen.lock().expect("seen");
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].serper_key, "serper");
        assert_eq!(seen[0].groq_key, "not-a-groq-key");
    }

    #[tokio::test]
    async fn factory_failure_is_internal_error() {
        let response = app_with(Arc::new(BrokenFactory))
            .oneshot(post(r#"{"groq_key":"gsk_x","serper_key":"s","keywords":["crm"]}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error_message(response).await.contains("invalid base URL"));
    }
}
