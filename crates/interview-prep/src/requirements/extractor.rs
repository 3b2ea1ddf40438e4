use super::lexicon::{
    has_list_marker, has_requirement_keyword, is_section_header, strip_list_marker,
    technologies_in,
};
use super::normalizer::RequirementSet;

/// How a single trimmed line is treated during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    SectionHeader,
    /// Bulleted or numbered, or any line inside a requirements section.
    Listed,
    KeywordBearing,
    TechStack(Vec<&'static str>),
    Plain,
}

/// Classifies a trimmed line. Rules are checked in precedence order.
pub fn classify_line(line: &str, in_section: bool) -> LineKind {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if is_section_header(line) {
        return LineKind::SectionHeader;
    }
    if in_section || has_list_marker(line) {
        return LineKind::Listed;
    }
    if has_requirement_keyword(line) {
        return LineKind::KeywordBearing;
    }

    let technologies = technologies_in(line);
    if technologies.is_empty() {
        LineKind::Plain
    } else {
        LineKind::TechStack(technologies)
    }
}

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Scanning,
    ContinuationPending(String),
}

/// Single-pass scanner state for one extraction call.
#[derive(Debug, Default)]
struct Scanner {
    in_section: bool,
    state: ScanState,
    requirements: RequirementSet,
}

impl Scanner {
    fn flush(&mut self) {
        if let ScanState::ContinuationPending(pending) = std::mem::take(&mut self.state) {
            self.requirements.accept(&pending);
        }
    }

    /// Handles one line; returns true when the following line was consumed as a continuation.
    fn step(&mut self, line: &str, next: Option<&str>) -> bool {
        match classify_line(line, self.in_section) {
            LineKind::Blank => {
                self.flush();
                false
            }
            LineKind::SectionHeader => {
                self.in_section = true;
                self.flush();
                false
            }
            LineKind::Listed => {
                self.flush();
                let item = strip_list_marker(line);
                match next.filter(|next| continues_item(next)) {
                    Some(next) => {
                        self.state = ScanState::ContinuationPending(format!("{item} {next}"));
                        true
                    }
                    None => {
                        self.requirements.accept(item);
                        false
                    }
                }
            }
            LineKind::KeywordBearing => {
                self.requirements.accept(line);
                false
            }
            LineKind::TechStack(technologies) => {
                let candidate = format!("Experience with {}", technologies.join(", "));
                self.requirements.accept(&candidate);
                false
            }
            LineKind::Plain => false,
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.requirements.into_vec()
    }
}

/// A wrapped remainder of the previous item: non-empty, unmarked, not capitalised.
fn continues_item(next: &str) -> bool {
    !next.is_empty()
        && !has_list_marker(next)
        && !next.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Extracts distinct requirement statements from a free-form job description,
/// in the order they were first detected. Never fails; text without any
/// recognisable requirement yields an empty list.
pub fn extract_requirements(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    let mut scanner = Scanner::default();

    let mut index = 0;
    while index < lines.len() {
        let next = lines.get(index + 1).copied();
        if scanner.step(lines[index], next) {
            index += 1;
        }
        index += 1;
    }

    scanner.finish()
}
