use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seniority the generated questions should target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Junior,
    #[default]
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [Self::Junior, Self::Mid, Self::Senior, Self::Lead];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Lead => "lead",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Mid => "Mid-Level",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let folded = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == folded)
            .ok_or_else(|| format!("unknown experience level '{value}' (junior, mid, senior, lead)"))
    }
}

/// Engineering area the questions are drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    #[default]
    Backend,
    Frontend,
    WebDevelopment,
    DataScience,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Self::Backend,
        Self::Frontend,
        Self::WebDevelopment,
        Self::DataScience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::WebDevelopment => "web_development",
            Self::DataScience => "data_science",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Backend => "Backend",
            Self::Frontend => "Frontend",
            Self::WebDevelopment => "Web Development",
            Self::DataScience => "Data Science",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let folded = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|domain| domain.as_str() == folded)
            .ok_or_else(|| {
                format!(
                    "unknown domain '{value}' (backend, frontend, web_development, data_science)"
                )
            })
    }
}

/// Number of questions to request, bounded to `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QuestionCount(u8);

impl QuestionCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, InvalidQuestionCount> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidQuestionCount(value))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for QuestionCount {
    type Error = InvalidQuestionCount;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionCount> for u8 {
    fn from(value: QuestionCount) -> Self {
        value.0
    }
}

impl FromStr for QuestionCount {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = value
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("'{value}' is not a whole number"))?;
        Self::new(parsed).map_err(|err| err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("question count must be between 1 and 5, got {0}")]
pub struct InvalidQuestionCount(pub u8);

/// Payload accepted by the question-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub job_requirements: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub domain: Domain,
    #[serde(default)]
    pub num_questions: QuestionCount,
}

/// One generated interview question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub difficulty: u8,
    pub skill_area: String,
    pub evaluation_criteria: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub example_answer: String,
}

impl Question {
    pub const MIN_DIFFICULTY: u8 = 1;
    pub const MAX_DIFFICULTY: u8 = 10;

    pub fn difficulty_in_range(&self) -> bool {
        (Self::MIN_DIFFICULTY..=Self::MAX_DIFFICULTY).contains(&self.difficulty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<Question>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
