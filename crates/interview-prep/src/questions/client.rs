use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::domain::{GenerateQuestionsRequest, GenerateQuestionsResponse};
use super::generator::{GenerationError, QuestionGenerator};
use crate::config::GeneratorConfig;

/// Talks to the question-generation service over HTTP (`POST {base_url}/generate`).
pub struct HttpQuestionGenerator {
    client: reqwest::Client,
    endpoint: String,
    timeout_secs: u64,
}

impl HttpQuestionGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/generate", config.base_url.trim_end_matches('/')),
            timeout_secs: config.timeout.as_secs(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_send_error(&self, err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::Timeout {
                seconds: self.timeout_secs,
            }
        } else {
            GenerationError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl QuestionGenerator for HttpQuestionGenerator {
    async fn generate(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> Result<GenerateQuestionsResponse, GenerationError> {
        debug!(endpoint = %self.endpoint, "posting generation request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| self.map_send_error(err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Rejected {
                status: status.as_u16(),
                detail: detail_from_body(&body),
            });
        }

        response
            .json::<GenerateQuestionsResponse>()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    self.map_send_error(err)
                } else {
                    GenerationError::InvalidResponse(err.to_string())
                }
            })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Pulls the `detail` field out of an error body. Strings are taken as-is; any
/// other JSON shape (validation error lists, objects) is kept in its JSON form.
pub(crate) fn detail_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::Null => None,
        serde_json::Value::String(detail) => Some(detail),
        other => Some(other.to_string()),
    }
}
