use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use interview_prep::error::AppError;
use interview_prep::questions::{
    ExtractionNotice, GenerateQuestionsRequest, NoticeView, Question, QuestionGenerator,
    RequirementDraft, Submission, SubmissionAdapter,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractRequest {
    pub(crate) job_description: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExtractResponse {
    pub(crate) requirements: RequirementDraft,
    pub(crate) extracted: usize,
    pub(crate) notice: NoticeView,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsResponse {
    pub(crate) questions: Vec<Question>,
}

pub(crate) fn api_router<G>(adapter: Arc<SubmissionAdapter<G>>) -> Router
where
    G: QuestionGenerator + ?Sized + 'static,
{
    Router::new()
        .route("/api/v1/questions", post(questions_endpoint::<G>))
        .with_state(adapter)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/requirements/extract", post(extract_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn extract_endpoint(Json(payload): Json<ExtractRequest>) -> Json<ExtractResponse> {
    let (requirements, notice) = RequirementDraft::from_job_description(&payload.job_description);
    let extracted = match notice {
        ExtractionNotice::Found { count } => count,
        ExtractionNotice::NoneFound => 0,
    };
    debug!(
        input_chars = payload.job_description.chars().count(),
        extracted,
        "requirements extracted"
    );

    Json(ExtractResponse {
        requirements,
        extracted,
        notice: notice.view(),
    })
}

pub(crate) async fn questions_endpoint<G>(
    State(adapter): State<Arc<SubmissionAdapter<G>>>,
    Json(payload): Json<GenerateQuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError>
where
    G: QuestionGenerator + ?Sized + 'static,
{
    let submission = Submission::from(payload);
    let questions = adapter.submit(&submission).await?;
    Ok(Json(QuestionsResponse { questions }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use interview_prep::questions::{GenerateQuestionsResponse, GenerationError};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;
    use tower::ServiceExt;

    struct FixedGenerator {
        reply: Result<GenerateQuestionsResponse, GenerationError>,
    }

    #[async_trait]
    impl QuestionGenerator for FixedGenerator {
        async fn generate(
            &self,
            _request: &GenerateQuestionsRequest,
        ) -> Result<GenerateQuestionsResponse, GenerationError> {
            self.reply.clone()
        }
    }

    fn build_router(reply: Result<GenerateQuestionsResponse, GenerationError>) -> Router {
        let adapter = SubmissionAdapter::new(
            Arc::new(FixedGenerator { reply }),
            Duration::from_secs(5),
        );
        api_router(Arc::new(adapter))
    }

    fn sample_question() -> Question {
        Question {
            question: "How do you keep a Kafka consumer idempotent?".to_string(),
            difficulty: 6,
            skill_area: "Messaging".to_string(),
            evaluation_criteria: vec!["Mentions deduplication keys".to_string()],
            example_answer: String::new(),
        }
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&body).expect("serialize body"),
            ))
            .expect("request")
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[tokio::test]
    async fn extract_returns_slots_and_notice() {
        let router = build_router(Ok(GenerateQuestionsResponse {
            questions: Vec::new(),
        }));

        let response = router
            .oneshot(json_request(
                "/api/v1/requirements/extract",
                json!({ "job_description": "Requirements:\n- Experience with Rust\n- Knowledge of SQL" }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(
            payload["requirements"],
            json!(["Experience with Rust", "Knowledge of SQL"])
        );
        assert_eq!(payload["extracted"], 2);
        assert_eq!(payload["notice"]["severity"], "success");
    }

    #[tokio::test]
    async fn extract_without_matches_offers_blank_slot() {
        let router = build_router(Ok(GenerateQuestionsResponse {
            questions: Vec::new(),
        }));

        let response = router
            .oneshot(json_request(
                "/api/v1/requirements/extract",
                json!({ "job_description": "Join our team!" }),
            ))
            .await
            .expect("router dispatch");

        let payload = read_json(response).await;
        assert_eq!(payload["requirements"], json!([""]));
        assert_eq!(payload["extracted"], 0);
        assert_eq!(payload["notice"]["title"], "No Requirements Found");
        assert_eq!(payload["notice"]["severity"], "warning");
    }

    #[tokio::test]
    async fn questions_endpoint_returns_generated_questions() {
        let router = build_router(Ok(GenerateQuestionsResponse {
            questions: vec![sample_question()],
        }));

        let response = router
            .oneshot(json_request(
                "/api/v1/questions",
                json!({
                    "job_requirements": ["Experience with Kafka", ""],
                    "experience_level": "senior",
                    "domain": "backend",
                    "num_questions": 1
                }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["questions"][0]["skill_area"], "Messaging");
        assert_eq!(payload["questions"][0]["difficulty"], 6);
    }

    #[tokio::test]
    async fn blank_requirements_are_unprocessable() {
        let router = build_router(Ok(GenerateQuestionsResponse {
            questions: vec![sample_question()],
        }));

        let response = router
            .oneshot(json_request(
                "/api/v1/questions",
                json!({
                    "job_requirements": ["   "],
                    "experience_level": "mid",
                    "domain": "frontend"
                }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let payload = read_json(response).await;
        assert_eq!(payload["error"], "Please add at least one job requirement");
    }

    #[tokio::test]
    async fn generator_failure_maps_to_bad_gateway_with_detail() {
        let router = build_router(Err(GenerationError::Rejected {
            status: 500,
            detail: Some("Error generating questions: quota exceeded".to_string()),
        }));

        let response = router
            .oneshot(json_request(
                "/api/v1/questions",
                json!({
                    "job_requirements": ["Experience with Rust"],
                    "experience_level": "junior",
                    "domain": "web_development",
                    "num_questions": 2
                }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let payload = read_json(response).await;
        assert_eq!(payload["error"], "Error generating questions: quota exceeded");
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let readiness = Arc::new(AtomicBool::new(false));
        let state = AppState {
            readiness: readiness.clone(),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let router = build_router(Ok(GenerateQuestionsResponse {
            questions: Vec::new(),
        }))
        .layer(Extension(state));

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        readiness.store(true, std::sync::atomic::Ordering::Release);
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ready");
    }
}
