use std::collections::HashSet;

/// Candidates shorter than this (in characters, after cleanup) are treated as noise.
pub const MIN_REQUIREMENT_CHARS: usize = 10;

/// Trims whitespace and a single trailing `,` `.` or `;`.
pub(crate) fn clean_candidate(value: &str) -> &str {
    let trimmed = value.trim();
    trimmed
        .strip_suffix([',', '.', ';'])
        .unwrap_or(trimmed)
        .trim()
}

pub(crate) fn dedup_key(value: &str) -> String {
    value.to_lowercase()
}

/// Ordered, case-insensitively distinct requirements collected during one scan.
#[derive(Debug, Default)]
pub(crate) struct RequirementSet {
    seen: HashSet<String>,
    accepted: Vec<String>,
}

impl RequirementSet {
    /// Applies the acceptance filter; returns whether the candidate was kept.
    pub(crate) fn accept(&mut self, candidate: &str) -> bool {
        let cleaned = clean_candidate(candidate);
        if cleaned.chars().count() < MIN_REQUIREMENT_CHARS {
            return false;
        }
        if !self.seen.insert(dedup_key(cleaned)) {
            return false;
        }
        self.accepted.push(cleaned.to_string());
        true
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.accepted
    }
}
