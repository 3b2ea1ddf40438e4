use serde::Serialize;

use crate::requirements::extract_requirements;

/// Editable requirement slots the user reviews before submitting.
///
/// A draft always holds at least one slot; when extraction finds nothing it
/// holds a single blank slot for manual entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequirementDraft {
    slots: Vec<String>,
}

impl Default for RequirementDraft {
    fn default() -> Self {
        Self {
            slots: vec![String::new()],
        }
    }
}

impl RequirementDraft {
    /// Builds a draft from extractor output along with the notice to show the user.
    pub fn from_extracted(requirements: Vec<String>) -> (Self, ExtractionNotice) {
        if requirements.is_empty() {
            (Self::default(), ExtractionNotice::NoneFound)
        } else {
            let count = requirements.len();
            (
                Self {
                    slots: requirements,
                },
                ExtractionNotice::Found { count },
            )
        }
    }

    /// Runs the extractor over a job description and wraps the result.
    pub fn from_job_description(text: &str) -> (Self, ExtractionNotice) {
        Self::from_extracted(extract_requirements(text))
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// True when every slot is blank.
    pub fn is_blank(&self) -> bool {
        self.slots.iter().all(|slot| slot.trim().is_empty())
    }

    pub fn add_slot(&mut self) {
        self.slots.push(String::new());
    }

    /// Removes a slot. The last remaining slot can't be removed.
    pub fn remove_slot(&mut self, index: usize) -> Option<String> {
        if self.slots.len() <= 1 || index >= self.slots.len() {
            return None;
        }
        Some(self.slots.remove(index))
    }

    pub fn update_slot(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Slots with non-blank text, in order.
    pub fn submittable(&self) -> Vec<String> {
        non_blank(&self.slots)
    }

    pub fn into_slots(self) -> Vec<String> {
        self.slots
    }
}

pub(crate) fn non_blank(slots: &[String]) -> Vec<String> {
    slots
        .iter()
        .filter(|slot| !slot.trim().is_empty())
        .cloned()
        .collect()
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    Success,
    Warning,
}

/// Outcome of an extraction as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionNotice {
    Found { count: usize },
    NoneFound,
}

impl ExtractionNotice {
    pub fn title(&self) -> &'static str {
        match self {
            ExtractionNotice::Found { .. } => "Requirements Extracted",
            ExtractionNotice::NoneFound => "No Requirements Found",
        }
    }

    pub fn description(&self) -> String {
        match self {
            ExtractionNotice::Found { count } => {
                format!("Found {count} requirements from the job description")
            }
            ExtractionNotice::NoneFound => {
                "Please enter requirements manually or adjust the job description".to_string()
            }
        }
    }

    pub fn severity(&self) -> NoticeSeverity {
        match self {
            ExtractionNotice::Found { .. } => NoticeSeverity::Success,
            ExtractionNotice::NoneFound => NoticeSeverity::Warning,
        }
    }

    pub fn view(&self) -> NoticeView {
        NoticeView {
            title: self.title(),
            description: self.description(),
            severity: self.severity(),
        }
    }
}

/// Serializable rendering of an [`ExtractionNotice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeView {
    pub title: &'static str,
    pub description: String,
    pub severity: NoticeSeverity,
}
