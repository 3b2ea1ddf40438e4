//! Packaging extracted requirements for the question-generation service and
//! unpacking its answers.

pub mod client;
pub mod domain;
pub mod draft;
pub mod generator;
pub mod submission;

pub use client::HttpQuestionGenerator;
pub use domain::{
    Domain, ExperienceLevel, GenerateQuestionsRequest, GenerateQuestionsResponse,
    InvalidQuestionCount, Question, QuestionCount,
};
pub use draft::{ExtractionNotice, NoticeSeverity, NoticeView, RequirementDraft};
pub use generator::{GenerationError, QuestionGenerator, FALLBACK_FAILURE_MESSAGE};
pub use submission::{Submission, SubmissionAdapter, SubmissionError, NO_REQUIREMENTS_MESSAGE};
