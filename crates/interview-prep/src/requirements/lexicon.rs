//! Fixed vocabularies and line matchers used while scanning a job description.
//!
//! Everything here is read-only and shared across extraction calls. The matchers
//! are total: a line that does not fit a pattern is simply "no match".

use regex::Regex;
use std::sync::LazyLock;

/// Phrases that open a requirements section when they start a line.
pub const SECTION_HEADERS: &[&str] = &[
    "requirements",
    "qualifications",
    "what you'll need",
    "what we're looking for",
    "key skills",
    "technical skills",
    "about you",
    "you will have",
    "your background",
    "role requirements",
    "technical requirements",
    "skills required",
    "minimum qualifications",
    "preferred qualifications",
];

/// Phrases that mark a free-standing line as requirement-bearing.
pub const REQUIREMENT_KEYWORDS: &[&str] = &[
    "experience with",
    "knowledge of",
    "familiar with",
    "proficiency in",
    "proficient in",
    "understanding of",
    "ability to",
    "skills in",
    "expertise in",
    "background in",
    "required:",
    "requirements:",
    "qualifications:",
    "must have",
    "responsible for",
    "will be",
    "you have",
    "you'll need",
    "proven track record",
    "demonstrated experience",
    "strong understanding",
    "deep knowledge",
    "hands-on experience",
    "experience building",
    "experience developing",
];

/// Recognised tool, language and framework names, lowercase.
pub const TECHNOLOGY_LEXICON: &[&str] = &[
    "react",
    "angular",
    "vue",
    "javascript",
    "typescript",
    "node",
    "express",
    "python",
    "django",
    "flask",
    "fastapi",
    "java",
    "spring",
    "c#",
    ".net",
    "php",
    "laravel",
    "ruby",
    "rails",
    "go",
    "rust",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "graphql",
    "rest",
    "kafka",
    "rabbitmq",
    "jenkins",
    "github",
    "gitlab",
    "ci/cd",
    "react native",
    "flutter",
    "swift",
    "kotlin",
    "android",
    "ios",
];

static TECH_PHRASE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:using|with|in)\s+([A-Za-z0-9\s,/.#+]+)(?:\s+(?:and|or)\s+[A-Za-z0-9\s,/.#+]+)?",
    )
    .ok()
});

static TECH_SEPARATOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[,\s]+(?:(?:and|or)\b|\s)*").ok());

fn is_marker_char(c: char) -> bool {
    matches!(c, '-' | '•' | '*' | '.') || c.is_ascii_digit()
}

/// True when the (already trimmed) line opens with a bullet or list number.
pub fn has_list_marker(line: &str) -> bool {
    line.chars().next().is_some_and(is_marker_char)
}

/// Removes the leading run of bullet, digit, dot and whitespace characters.
pub fn strip_list_marker(line: &str) -> &str {
    line.trim_start_matches(|c: char| is_marker_char(c) || c.is_whitespace())
        .trim()
}

/// Matches a section header phrase followed by a colon, or standing alone on the line.
pub fn is_section_header(line: &str) -> bool {
    let folded = fold(line);
    SECTION_HEADERS.iter().any(|header| {
        folded
            .strip_prefix(header)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(':'))
    })
}

pub fn has_requirement_keyword(line: &str) -> bool {
    let folded = fold(line);
    REQUIREMENT_KEYWORDS
        .iter()
        .any(|keyword| folded.contains(keyword))
}

pub fn is_known_technology(token: &str) -> bool {
    TECHNOLOGY_LEXICON.contains(&token)
}

/// Lexicon technologies named in the first "using/with/in ..." phrase of the line,
/// in the order they appear.
pub fn technologies_in(line: &str) -> Vec<&'static str> {
    let (Some(phrase), Some(separator)) = (TECH_PHRASE.as_ref(), TECH_SEPARATOR.as_ref()) else {
        return Vec::new();
    };
    let Some(captured) = phrase.captures(line).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    let lowered = captured.as_str().to_lowercase();
    separator
        .split(&lowered)
        .map(str::trim)
        .filter_map(|token| {
            TECHNOLOGY_LEXICON
                .iter()
                .copied()
                .find(|known| *known == token)
        })
        .collect()
}

fn fold(line: &str) -> String {
    line.to_lowercase().replace('\u{2019}', "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_markers_cover_bullets_and_numbers() {
        assert!(has_list_marker("- Rust"));
        assert!(has_list_marker("• Rust"));
        assert!(has_list_marker("* Rust"));
        assert!(has_list_marker("3. Rust"));
        assert!(has_list_marker("5+ years of Go"));
        assert!(!has_list_marker("Rust"));
        assert!(!has_list_marker(""));
    }

    #[test]
    fn strips_mixed_marker_runs() {
        assert_eq!(strip_list_marker("- Own the API"), "Own the API");
        assert_eq!(strip_list_marker("12. Own the API"), "Own the API");
        assert_eq!(strip_list_marker("• - Own the API  "), "Own the API");
        assert_eq!(strip_list_marker("---"), "");
    }

    #[test]
    fn section_headers_need_colon_or_whole_line() {
        assert!(is_section_header("Requirements:"));
        assert!(is_section_header("QUALIFICATIONS: see below"));
        assert!(is_section_header("What you’ll need:"));
        assert!(is_section_header("About you"));
        assert!(!is_section_header("Requirements gathering with stakeholders"));
        assert!(!is_section_header("Our requirements:"));
    }

    #[test]
    fn keywords_match_case_insensitively() {
        assert!(has_requirement_keyword("MUST HAVE a driving licence"));
        assert!(has_requirement_keyword("Hands-on experience shipping mobile apps"));
        assert!(!has_requirement_keyword("We offer free lunch"));
    }

    #[test]
    fn technologies_follow_lexicon_and_capture_order() {
        assert_eq!(
            technologies_in("Build APIs using Python and Django frameworks"),
            vec!["python", "django"]
        );
        assert_eq!(
            technologies_in("Deploy services with Docker, Kubernetes or AWS"),
            vec!["docker", "kubernetes", "aws"]
        );
        assert_eq!(technologies_in("Ship features in C#, .NET"), vec!["c#", ".net"]);
    }

    #[test]
    fn conjunction_absorption_keeps_words_starting_with_and_or() {
        assert_eq!(
            technologies_in("Write apps with Kotlin, Android and iOS"),
            vec!["kotlin", "android", "ios"]
        );
    }

    #[test]
    fn unknown_or_absent_technologies_yield_nothing() {
        assert!(technologies_in("Work with great people").is_empty());
        assert!(technologies_in("No tech phrase here").is_empty());
        assert!(is_known_technology("ci/cd"));
        assert!(!is_known_technology("cobol"));
    }
}
