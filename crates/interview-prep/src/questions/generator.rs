use async_trait::async_trait;

use super::domain::{GenerateQuestionsRequest, GenerateQuestionsResponse};

/// Message shown when a failure carries no server-supplied detail.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to generate questions";

/// Boundary to the remote question-generation function.
///
/// Implementations perform exactly one exchange per call; retrying is left to the
/// user, not the transport.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &GenerateQuestionsRequest,
    ) -> Result<GenerateQuestionsResponse, GenerationError>;
}

/// Failure of a single generation exchange.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("question service unreachable: {0}")]
    Transport(String),
    #[error("question service did not answer within {seconds}s")]
    Timeout { seconds: u64 },
    #[error("question service rejected the request ({status}){}", detail_suffix(.detail))]
    Rejected { status: u16, detail: Option<String> },
    #[error("question service returned an unusable response: {0}")]
    InvalidResponse(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}

impl GenerationError {
    /// Human-readable detail supplied by the service, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            GenerationError::Rejected { detail, .. } => detail
                .as_deref()
                .map(str::trim)
                .filter(|detail| !detail.is_empty()),
            _ => None,
        }
    }

    /// The message surfaced to the user: the service's detail when present,
    /// otherwise the generic failure message.
    pub fn user_message(&self) -> String {
        self.detail()
            .unwrap_or(FALLBACK_FAILURE_MESSAGE)
            .to_string()
    }
}
