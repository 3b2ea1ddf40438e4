use crate::infra::{http_submission_adapter, read_job_description};
use clap::Args;
use interview_prep::config::AppConfig;
use interview_prep::error::AppError;
use interview_prep::questions::{
    Domain, ExperienceLevel, ExtractionNotice, Question, QuestionCount, RequirementDraft,
    Submission,
};
use interview_prep::telemetry;
use serde_json::json;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ExtractArgs {
    /// Job description file. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Print the draft and notice as JSON instead of a listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Job description file. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Experience level (junior, mid, senior, lead)
    #[arg(long, default_value_t = ExperienceLevel::Mid)]
    pub(crate) level: ExperienceLevel,
    /// Interview domain (backend, frontend, web_development, data_science)
    #[arg(long, default_value_t = Domain::Backend)]
    pub(crate) domain: Domain,
    /// Number of questions to request (1-5)
    #[arg(long, default_value = "1")]
    pub(crate) count: QuestionCount,
    /// Override the question service base URL
    #[arg(long)]
    pub(crate) generator_url: Option<String>,
}

pub(crate) fn run_extract(args: ExtractArgs) -> Result<(), AppError> {
    let text = read_job_description(args.input.as_deref())?;
    let (draft, notice) = RequirementDraft::from_job_description(&text);

    if args.json {
        let payload = json!({
            "requirements": draft,
            "notice": notice.view(),
        });
        let rendered = serde_json::to_string_pretty(&payload).map_err(std::io::Error::other)?;
        println!("{rendered}");
    } else {
        print!("{}", render_extraction(&draft, notice));
    }

    Ok(())
}

pub(crate) async fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(url) = args.generator_url {
        config.generator.base_url = url.trim_end_matches('/').to_string();
    }
    telemetry::init(&config.telemetry)?;

    let text = read_job_description(args.input.as_deref())?;
    let (draft, notice) = RequirementDraft::from_job_description(&text);
    print!("{}", render_extraction(&draft, notice));

    let submission = Submission {
        requirements: draft.into_slots(),
        experience_level: args.level,
        domain: args.domain,
        num_questions: args.count,
    };

    let adapter = http_submission_adapter(&config.generator)?;
    let questions = adapter.submit(&submission).await?;
    print!("{}", render_questions(&questions));

    Ok(())
}

fn render_extraction(draft: &RequirementDraft, notice: ExtractionNotice) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", notice.title(), notice.description());
    if draft.is_blank() {
        return out;
    }

    for (index, requirement) in draft.slots().iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", index + 1, requirement);
    }
    out
}

fn render_questions(questions: &[Question]) -> String {
    let mut out = String::new();
    if questions.is_empty() {
        out.push_str("No questions were generated.\n");
        return out;
    }

    for (index, question) in questions.iter().enumerate() {
        let heading = format!("Question {}", index + 1);
        let _ = writeln!(out, "\n{heading}");
        let _ = writeln!(out, "{}", "=".repeat(heading.len()));
        let _ = writeln!(out, "{}", question.question);
        let _ = writeln!(out, "Skill area: {}", question.skill_area);
        let _ = writeln!(out, "Difficulty: {}/10", question.difficulty);

        if !question.evaluation_criteria.is_empty() {
            let _ = writeln!(out, "Evaluation criteria:");
            for criterion in &question.evaluation_criteria {
                let _ = writeln!(out, "  - {criterion}");
            }
        }

        if !question.example_answer.trim().is_empty() {
            let _ = writeln!(out, "Example answer:\n  {}", question.example_answer);
        }
    }
    out
}
