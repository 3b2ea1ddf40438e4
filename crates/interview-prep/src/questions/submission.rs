use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::domain::{
    Domain, ExperienceLevel, GenerateQuestionsRequest, InvalidQuestionCount, Question,
    QuestionCount,
};
use super::draft::non_blank;
use super::generator::{GenerationError, QuestionGenerator};

/// Message shown when a submission has no usable requirement.
pub const NO_REQUIREMENTS_MESSAGE: &str = "Please add at least one job requirement";

/// What the user asked for: their edited requirements plus the three selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub requirements: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub domain: Domain,
    pub num_questions: QuestionCount,
}

impl Submission {
    pub fn new(
        requirements: Vec<String>,
        experience_level: ExperienceLevel,
        domain: Domain,
        num_questions: u8,
    ) -> Result<Self, SubmissionError> {
        Ok(Self {
            requirements,
            experience_level,
            domain,
            num_questions: QuestionCount::new(num_questions)?,
        })
    }

    /// Packages the non-blank requirements into the generation request.
    pub fn to_request(&self) -> Result<GenerateQuestionsRequest, SubmissionError> {
        let job_requirements = non_blank(&self.requirements);
        if job_requirements.is_empty() {
            return Err(SubmissionError::NoRequirements);
        }

        Ok(GenerateQuestionsRequest {
            job_requirements,
            experience_level: self.experience_level,
            domain: self.domain,
            num_questions: self.num_questions,
        })
    }
}

impl From<GenerateQuestionsRequest> for Submission {
    fn from(request: GenerateQuestionsRequest) -> Self {
        Self {
            requirements: request.job_requirements,
            experience_level: request.experience_level,
            domain: request.domain,
            num_questions: request.num_questions,
        }
    }
}

/// Validates submissions, forwards them to the generator once, and unpacks the answer.
pub struct SubmissionAdapter<G: ?Sized> {
    generator: Arc<G>,
    timeout: Duration,
}

impl<G> SubmissionAdapter<G>
where
    G: QuestionGenerator + ?Sized,
{
    pub fn new(generator: Arc<G>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Submit one request. Validation failures return before the generator is called;
    /// generator failures are returned as-is, without retrying.
    pub async fn submit(&self, submission: &Submission) -> Result<Vec<Question>, SubmissionError> {
        let request = submission.to_request()?;

        info!(
            requirements = request.job_requirements.len(),
            level = %request.experience_level,
            domain = %request.domain,
            num_questions = request.num_questions.get(),
            "submitting question generation request"
        );

        let outcome =
            match tokio::time::timeout(self.timeout, self.generator.generate(&request)).await {
                Ok(result) => result,
                Err(_) => Err(GenerationError::Timeout {
                    seconds: self.timeout.as_secs(),
                }),
            };
        let response =
            outcome.inspect_err(|err| warn!(error = %err, "question generation failed"))?;

        if let Some(question) = response
            .questions
            .iter()
            .find(|question| !question.difficulty_in_range())
        {
            let err = GenerationError::InvalidResponse(format!(
                "difficulty {} is outside 1..=10",
                question.difficulty
            ));
            warn!(error = %err, "discarding generation response");
            return Err(err.into());
        }

        info!(
            questions = response.questions.len(),
            "question generation completed"
        );
        Ok(response.questions)
    }
}

/// Error raised while submitting requirements for question generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("{}", NO_REQUIREMENTS_MESSAGE)]
    NoRequirements,
    #[error(transparent)]
    InvalidQuestionCount(#[from] InvalidQuestionCount),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl SubmissionError {
    /// Message suitable for showing to the user who triggered the submission.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Generation(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}
