use interview_prep::config::GeneratorConfig;
use interview_prep::error::AppError;
use interview_prep::questions::{HttpQuestionGenerator, SubmissionAdapter};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Adapter wired to the HTTP question service described by `config`.
pub(crate) fn http_submission_adapter(
    config: &GeneratorConfig,
) -> Result<SubmissionAdapter<HttpQuestionGenerator>, AppError> {
    let generator = HttpQuestionGenerator::new(config)?;
    Ok(SubmissionAdapter::new(Arc::new(generator), config.timeout))
}

/// Reads the job description from `path`, or from stdin when no path is given.
pub(crate) fn read_job_description(
    path: Option<&std::path::Path>,
) -> Result<String, std::io::Error> {
    use std::io::Read;

    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
